// Query Result Implementation
//
// This module defines the error and result types for query execution.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::query::parser::components::ParseError;

/// Errors that can occur while executing a query or shell command
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Error while parsing the statement
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error from the catalog
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    /// Statement needs a database but none is in use
    #[error("no database selected")]
    NoDatabaseSelected,
    /// Statement parsed but cannot be executed
    #[error("{0} is not supported")]
    Unsupported(String),
    /// Unknown shell meta-command
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// `\use` without a database name
    #[error("database name not specified")]
    DatabaseNotSpecified,
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
