//! Interactive session state.
//!
//! A [`Shell`] owns an execution engine and the database currently in use.
//! Lines starting with `\` are meta-commands; everything else is SQL.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::catalog::Catalog;
use crate::query::executor::{ExecutionEngine, QueryError, QueryResult};

pub const DEFAULT_PROMPT: &str = "minidb >> ";
pub const DEFAULT_HISTORY_FILE: &str = ".minidb_history";

/// Options for an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Database created and selected when the session starts
    pub database: Option<String>,
    pub history_file: String,
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            database: None,
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

pub struct Shell {
    engine: ExecutionEngine,
    database: Option<String>,
}

impl Shell {
    /// Start a session over a fresh catalog
    pub fn new(config: &ShellConfig) -> QueryResult<Self> {
        let engine = ExecutionEngine::new(Arc::new(RwLock::new(Catalog::new())));
        let mut shell = Shell {
            engine,
            database: None,
        };

        if let Some(name) = &config.database {
            shell.engine.create_database(name)?;
            shell.use_database(name)?;
        }

        Ok(shell)
    }

    /// Name of the database in use
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Execute one input line and return the message to print
    pub fn exec(&mut self, line: &str) -> QueryResult<String> {
        let line = line.trim();
        if line.starts_with('\\') {
            self.exec_command(line)
        } else {
            let message = self.engine.execute(self.database(), line)?;
            self.forget_dropped_database();
            Ok(message)
        }
    }

    /// Deselect the current database once it no longer exists
    fn forget_dropped_database(&mut self) {
        let Some(name) = self.database.as_deref() else {
            return;
        };
        if self.engine.catalog().read().get_database(name).is_err() {
            debug!("database {} was dropped, clearing selection", name);
            self.database = None;
        }
    }

    fn exec_command(&mut self, line: &str) -> QueryResult<String> {
        let params: Vec<&str> = line.split_whitespace().collect();
        debug!("meta-command {:?}", params);

        match params.as_slice() {
            ["\\use"] => Err(QueryError::DatabaseNotSpecified),
            ["\\use", name, ..] => self.use_database(name),
            ["\\l", ..] => Ok(self.list_databases()),
            ["\\dt", ..] => self.list_tables(),
            [command, ..] => Err(QueryError::UnknownCommand(command.to_string())),
            [] => Err(QueryError::UnknownCommand(line.to_string())),
        }
    }

    fn use_database(&mut self, name: &str) -> QueryResult<String> {
        self.engine.catalog().read().get_database(name)?;
        self.database = Some(name.to_string());
        Ok("database changed\n".to_string())
    }

    fn list_databases(&self) -> String {
        let catalog = self.engine.catalog();
        let catalog = catalog.read();
        catalog
            .list_databases()
            .iter()
            .map(|db| format!("{}\n", db.name()))
            .collect()
    }

    fn list_tables(&self) -> QueryResult<String> {
        let name = self.database().ok_or(QueryError::NoDatabaseSelected)?;
        let catalog = self.engine.catalog();
        let catalog = catalog.read();
        let tables = catalog
            .get_database(name)?
            .list_tables()
            .iter()
            .map(|table| format!("{}\n", table.name()))
            .collect();
        Ok(tables)
    }
}
