//! Table Storage Module
//!
//! In-memory row storage for one table. Rows are keyed by their primary key
//! value; a separate key list keeps scans in insertion order.

use std::collections::HashMap;

use super::column::Column;
use super::error::{CatalogError, CatalogResult};
use super::schema::Schema;
use super::value::Row;

/// Represents a database table and its rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name
    name: String,
    /// Column definitions
    schema: Schema,
    /// Rows by primary key
    rows: HashMap<i64, Row>,
    /// Primary keys in insertion order
    keys: Vec<i64>,
}

impl Table {
    /// Create a new, empty table with the given name and schema
    pub fn new(name: String, schema: Schema) -> Self {
        Table {
            name,
            schema,
            rows: HashMap::new(),
            keys: Vec::new(),
        }
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn primary_key(&self) -> Option<&Column> {
        self.schema.primary_key()
    }

    /// Iterate over rows in insertion order
    pub fn scan(&self) -> impl Iterator<Item = &Row> {
        self.keys.iter().filter_map(|key| self.rows.get(key))
    }

    /// Insert a row under a new primary key
    pub fn insert(&mut self, key: i64, row: Row) -> CatalogResult<()> {
        if self.rows.contains_key(&key) {
            return Err(CatalogError::DuplicateKey(key));
        }
        self.rows.insert(key, row);
        self.keys.push(key);
        Ok(())
    }

    /// Replace the row stored under an existing primary key
    pub fn update(&mut self, key: i64, row: Row) -> CatalogResult<()> {
        match self.rows.get_mut(&key) {
            Some(existing) => {
                *existing = row;
                Ok(())
            }
            None => Err(CatalogError::KeyNotFound(key)),
        }
    }

    /// Remove the row stored under a primary key
    pub fn delete(&mut self, key: i64) -> CatalogResult<()> {
        if self.rows.remove(&key).is_none() {
            return Err(CatalogError::KeyNotFound(key));
        }
        self.keys.retain(|existing| *existing != key);
        Ok(())
    }
}
