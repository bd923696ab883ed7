// Database Module
//
// A named collection of tables.

use std::collections::HashMap;

use super::error::{CatalogError, CatalogResult};
use super::schema::Schema;
use super::table::Table;

/// A database holding tables by name
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    tables: HashMap<String, Table>,
}

impl Database {
    pub fn new(name: String) -> Self {
        Database {
            name,
            tables: HashMap::new(),
        }
    }

    /// Get the database name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a table with the given schema
    pub fn create_table(&mut self, name: &str, schema: Schema) -> CatalogResult<&Table> {
        if self.tables.contains_key(name) {
            return Err(CatalogError::TableAlreadyExists(name.to_string()));
        }
        let table = self
            .tables
            .entry(name.to_string())
            .or_insert_with(|| Table::new(name.to_string(), schema));
        Ok(table)
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> CatalogResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    pub fn get_table_mut(&mut self, name: &str) -> CatalogResult<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// Tables sorted by name
    pub fn list_tables(&self) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self.tables.values().collect();
        tables.sort_by(|a, b| a.name().cmp(b.name()));
        tables
    }

    /// Remove a table
    pub fn drop_table(&mut self, name: &str) -> CatalogResult<()> {
        self.tables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }
}
