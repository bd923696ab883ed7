// Schema Management Module
//
// This module defines the column types and the ordered column set of a table.

use std::fmt;

use linked_hash_map::LinkedHashMap;

use super::column::Column;
use super::error::{CatalogError, CatalogResult};

/// Data types supported by the database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Float,
    Text,
    Boolean,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Text => "TEXT",
            DataType::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}

/// The columns of a table keyed by name, kept in definition order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    columns: LinkedHashMap<String, Column>,
}

impl Schema {
    /// Create a new, empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, rejecting duplicate names
    pub fn add_column(&mut self, column: Column) -> CatalogResult<()> {
        if self.columns.contains_key(column.name()) {
            return Err(CatalogError::DuplicateColumn(column.name().to_string()));
        }
        self.columns.insert(column.name().to_string(), column);
        Ok(())
    }

    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Columns in definition order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// The primary key column, if one is declared
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns().find(|column| column.is_primary_key())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
