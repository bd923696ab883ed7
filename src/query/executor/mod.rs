// Query Executor Module
//
// This module is responsible for executing parsed statements against the catalog.

pub mod engine;
pub mod result;

// Export key types
pub use self::engine::ExecutionEngine;
pub use self::result::{QueryError, QueryResult};
