// Query Execution Engine Implementation
//
// This module parses SQL text and applies the resulting statement to the catalog.

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::catalog::{Catalog, Schema};
use crate::query::executor::result::{QueryError, QueryResult};
use crate::query::parser::ast::{CreateTableStatement, Statement};
use crate::query::parser::parse;

pub struct ExecutionEngine {
    catalog: Arc<RwLock<Catalog>>,
}

impl ExecutionEngine {
    pub fn new(catalog: Arc<RwLock<Catalog>>) -> Self {
        ExecutionEngine { catalog }
    }

    /// Shared handle to the catalog this engine operates on
    pub fn catalog(&self) -> Arc<RwLock<Catalog>> {
        self.catalog.clone()
    }

    /// Parse and execute one statement against the given database.
    ///
    /// Returns the message shown to the user on success.
    pub fn execute(&self, database: Option<&str>, sql: &str) -> QueryResult<String> {
        let statement = parse(sql).inspect_err(|e| warn!("rejected statement: {}", e))?;
        debug!("executing {} on {:?}", statement, database);

        match statement {
            Statement::CreateDatabase(create) => self.create_database(&create.database),
            Statement::DropDatabase(drop) => self.drop_database(&drop.database),
            Statement::CreateTable(create) => {
                let database = database.ok_or(QueryError::NoDatabaseSelected)?;
                self.create_table(database, &create)
            }
            other => {
                warn!("{} cannot be executed", other);
                Err(QueryError::Unsupported(other.to_string()))
            }
        }
    }

    pub fn create_database(&self, name: &str) -> QueryResult<String> {
        let mut catalog = self.catalog.write();
        let database = catalog.create_database(name)?;
        Ok(format!("create database {}\n", database.name()))
    }

    pub fn drop_database(&self, name: &str) -> QueryResult<String> {
        self.catalog.write().drop_database(name)?;
        Ok(format!("drop database {}\n", name))
    }

    /// Create a table in `database` from a parsed CREATE TABLE statement
    pub fn create_table(&self, database: &str, create: &CreateTableStatement) -> QueryResult<String> {
        let schema = Schema::from_definitions(&create.columns)?;

        let mut catalog = self.catalog.write();
        let table = catalog
            .get_database_mut(database)?
            .create_table(&create.table_name, schema)?;
        Ok(format!("create table {}\n", table.name()))
    }
}
