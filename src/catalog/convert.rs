//! Conversions from parsed column definitions into catalog types.

use crate::query::parser::ast::{ColumnDef, ColumnType, Expression, ScalarType};

use super::column::Column;
use super::error::{CatalogError, CatalogResult};
use super::schema::{DataType, Schema};
use super::value::DataValue;

impl From<ColumnType> for DataType {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Integer => DataType::Integer,
            ColumnType::Text => DataType::Text,
            ColumnType::Boolean => DataType::Boolean,
        }
    }
}

/// Convert a scalar literal into a runtime value
pub fn convert_scalar(scalar_type: ScalarType, literal: &str) -> Result<DataValue, String> {
    match scalar_type {
        ScalarType::Null => Ok(DataValue::Null),
        ScalarType::Integer => literal
            .parse::<i64>()
            .map(DataValue::Integer)
            .map_err(|e| format!("{} is not a valid integer: {}", literal, e)),
        ScalarType::Text => Ok(DataValue::Text(literal.to_string())),
        ScalarType::Boolean => Ok(DataValue::Boolean(literal.eq_ignore_ascii_case("true"))),
    }
}

/// Convert a DEFAULT expression into a value of the column's type
fn convert_default(definition: &ColumnDef, data_type: DataType) -> CatalogResult<Option<DataValue>> {
    let Some(expr) = &definition.default else {
        return Ok(None);
    };

    let invalid = |reason: String| CatalogError::InvalidDefault {
        column: definition.name.clone(),
        reason,
    };

    let value = match expr {
        Expression::Scalar {
            scalar_type,
            literal,
        } => convert_scalar(*scalar_type, literal).map_err(invalid)?,
        other => return Err(invalid(format!("{:?} is not a constant", other))),
    };

    match value.data_type() {
        None if !definition.nullable => Err(invalid("column is NOT NULL".to_string())),
        Some(value_type) if value_type != data_type => Err(invalid(format!(
            "expected {} but got {}",
            data_type, value_type
        ))),
        _ => Ok(Some(value)),
    }
}

impl Schema {
    /// Build a schema from parsed column definitions.
    ///
    /// Column names must be unique and exactly one column must be the primary key.
    pub fn from_definitions(definitions: &[ColumnDef]) -> CatalogResult<Schema> {
        let mut schema = Schema::new();

        for definition in definitions {
            if definition.primary_key {
                if let Some(existing) = schema.primary_key() {
                    return Err(CatalogError::MultiplePrimaryKeys(
                        existing.name().to_string(),
                        definition.name.clone(),
                    ));
                }
            }

            let data_type = DataType::from(definition.data_type);
            let default_value = convert_default(definition, data_type)?;

            schema.add_column(Column::new(
                definition.position,
                definition.name.clone(),
                data_type,
                definition.nullable,
                definition.primary_key,
                default_value,
            ))?;
        }

        if schema.primary_key().is_none() {
            return Err(CatalogError::MissingPrimaryKey);
        }

        Ok(schema)
    }
}
