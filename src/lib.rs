// MiniDB SQL front end

pub mod catalog;
pub mod query;
pub mod shell;

// Re-export key items for convenient access
pub use catalog::Catalog;
pub use query::executor::engine::ExecutionEngine;
pub use query::executor::result::{QueryError, QueryResult};
pub use query::parser::{parse, Parser};
pub use shell::{Shell, ShellConfig};
