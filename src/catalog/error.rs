use thiserror::Error;

/// Errors raised by catalog and table operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("database {0:?} already exist")]
    DatabaseAlreadyExists(String),
    #[error("database {0:?} not found")]
    DatabaseNotFound(String),
    #[error("table {0:?} already exist")]
    TableAlreadyExists(String),
    #[error("table {0:?} not found")]
    TableNotFound(String),
    #[error("duplicate primary key {0}")]
    DuplicateKey(i64),
    #[error("key {0} not found")]
    KeyNotFound(i64),
    #[error("duplicate column {0:?}")]
    DuplicateColumn(String),
    #[error("table must have a primary key column")]
    MissingPrimaryKey,
    #[error("table must have exactly one primary key column, found {0:?} and {1:?}")]
    MultiplePrimaryKeys(String, String),
    #[error("invalid default for column {column:?}: {reason}")]
    InvalidDefault { column: String, reason: String },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
