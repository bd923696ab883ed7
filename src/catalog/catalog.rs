// Catalog Module
//
// The root of the metadata tree: every database known to the server.

use std::collections::HashMap;

use log::info;

use super::database::Database;
use super::error::{CatalogError, CatalogResult};

/// The Catalog is the central repository for all databases
#[derive(Debug, Default)]
pub struct Catalog {
    databases: HashMap<String, Database>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty database
    pub fn create_database(&mut self, name: &str) -> CatalogResult<&Database> {
        if self.databases.contains_key(name) {
            return Err(CatalogError::DatabaseAlreadyExists(name.to_string()));
        }
        info!("creating database {}", name);
        let database = self
            .databases
            .entry(name.to_string())
            .or_insert_with(|| Database::new(name.to_string()));
        Ok(database)
    }

    /// Get a database by name
    pub fn get_database(&self, name: &str) -> CatalogResult<&Database> {
        self.databases
            .get(name)
            .ok_or_else(|| CatalogError::DatabaseNotFound(name.to_string()))
    }

    pub fn get_database_mut(&mut self, name: &str) -> CatalogResult<&mut Database> {
        self.databases
            .get_mut(name)
            .ok_or_else(|| CatalogError::DatabaseNotFound(name.to_string()))
    }

    /// Databases sorted by name
    pub fn list_databases(&self) -> Vec<&Database> {
        let mut databases: Vec<&Database> = self.databases.values().collect();
        databases.sort_by(|a, b| a.name().cmp(b.name()));
        databases
    }

    /// Remove a database and all of its tables
    pub fn drop_database(&mut self, name: &str) -> CatalogResult<()> {
        if self.databases.remove(name).is_none() {
            return Err(CatalogError::DatabaseNotFound(name.to_string()));
        }
        info!("dropped database {}", name);
        Ok(())
    }
}
