// Query Processing Module
//
// This module contains components for SQL parsing and execution.

pub mod executor;
pub mod parser;

// Export key public interfaces
pub use executor::engine::ExecutionEngine;
pub use executor::result::{QueryError, QueryResult};
pub use parser::{parse, Parser};
