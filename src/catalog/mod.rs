//! Catalog Management Module
//!
//! This module manages databases, tables, their column schemas and the
//! in-memory rows stored in each table.

pub mod catalog;
pub mod column;
pub mod convert;
pub mod database;
pub mod error;
pub mod schema;
pub mod table;
pub mod value;

// Re-export key types
pub use self::catalog::Catalog;
pub use self::column::Column;
pub use self::database::Database;
pub use self::error::{CatalogError, CatalogResult};
pub use self::schema::{DataType, Schema};
pub use self::table::Table;
pub use self::value::{DataValue, Row};
