// SQL Parser Module
//
// This module is responsible for parsing SQL queries and converting them
// into an abstract syntax tree (AST) representation.

// Re-export public components
pub mod token;
pub mod lexer;
pub mod precedence;
pub mod ast;
pub mod components;

// Export key types
pub use self::components::{parse, Parser, ParseError, ParseResult};
pub use self::lexer::Lexer;
pub use self::token::{Token, TokenType};
pub use self::ast::Statement;
