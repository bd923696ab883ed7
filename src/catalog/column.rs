// Column Management Module
//
// This module defines the Column type that represents a table column in a schema.

use super::schema::DataType;
use super::value::DataValue;

/// Represents a column in a database table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Zero-based ordinal within the table
    position: usize,
    /// Column name
    name: String,
    /// Column data type
    data_type: DataType,
    /// Whether this column can contain NULL values
    nullable: bool,
    /// Whether this column is the primary key
    primary_key: bool,
    /// Default value (if any)
    default_value: Option<DataValue>,
}

impl Column {
    /// Create a new column
    pub fn new(
        position: usize,
        name: String,
        data_type: DataType,
        nullable: bool,
        primary_key: bool,
        default_value: Option<DataValue>,
    ) -> Self {
        Column {
            position,
            name,
            data_type,
            nullable,
            primary_key,
            default_value,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the column data type
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Check if the column can contain NULL values
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Check if the column is the primary key
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn default_value(&self) -> Option<&DataValue> {
        self.default_value.as_ref()
    }
}
