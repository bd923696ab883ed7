// Core Parser Implementation
//
// This module implements the core parser functionality for SQL: token
// management with one token of lookahead, the shared "expect" helpers and
// the statement dispatch entry point.

use std::mem;

use log::debug;
use thiserror::Error;

use crate::query::parser::ast::*;
use crate::query::parser::lexer::Lexer;
use crate::query::parser::precedence::{precedence_of, Precedence};
use crate::query::parser::token::{Token, TokenType};

use super::parser_ddl::{parse_create, parse_drop};
use super::parser_dml::{parse_delete, parse_insert, parse_update};
use super::parser_select::parse_select;

/// SQL Parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected statement: {token_type}({literal:?})")]
    UnexpectedStatement {
        token_type: TokenType,
        literal: String,
    },
    #[error("unexpected operand {token_type}({literal:?})")]
    UnexpectedOperand {
        token_type: TokenType,
        literal: String,
    },
    #[error("expected {expected} but found {found}({literal:?})")]
    ExpectedToken {
        expected: TokenType,
        found: TokenType,
        literal: String,
    },
    #[error("no columns specified")]
    EmptyProjection,
    #[error("unexpected column type {token_type}({literal:?})")]
    UnexpectedColumnType {
        token_type: TokenType,
        literal: String,
    },
    #[error("unary operator {0} is not supported")]
    UnsupportedUnaryOperator(TokenType),
    #[error("expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum depth of parenthesised sub-expressions
pub const MAX_NESTING_DEPTH: usize = 128;

/// SQL Parser for constructing an AST from SQL tokens.
///
/// A parser reads exactly one statement; build a new one for every query string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub current_token: Token,
    pub peek_token: Token,
    /// Open parenthesised groups around the current token
    pub(super) depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser from a SQL query string
    pub fn new(input: &'a str) -> Self {
        Self::from_lexer(Lexer::new(input))
    }

    /// Create a parser over an existing lexer, pre-loading the current and peek tokens
    pub fn from_lexer(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            peek_token,
            depth: 0,
        }
    }

    /// Advance to the next token
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    /// Check if the current token is of the given type
    pub fn current_token_is(&self, token_type: TokenType) -> bool {
        self.current_token.token_type == token_type
    }

    /// Check if the lookahead token is of the given type
    pub fn peek_token_is(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(&self.current_token.token_type)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(&self.peek_token.token_type)
    }

    /// Consume the current token if it matches the expected type.
    ///
    /// On a mismatch the offending token stays current.
    pub fn expect_token(&mut self, expected: TokenType) -> ParseResult<Token> {
        if self.current_token_is(expected) {
            let token = self.current_token.clone();
            self.next_token();
            Ok(token)
        } else {
            Err(self.expected(expected))
        }
    }

    /// Build an `ExpectedToken` error against the current token
    pub fn expected(&self, expected: TokenType) -> ParseError {
        ParseError::ExpectedToken {
            expected,
            found: self.current_token.token_type,
            literal: self.current_token.literal.clone(),
        }
    }

    /// Parse an identifier (common utility)
    pub fn parse_identifier(&mut self) -> ParseResult<String> {
        self.expect_token(TokenType::IDENTIFIER).map(|token| token.literal)
    }

    /// Parse a SQL statement
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        debug!("dispatching statement on {}", self.current_token);

        let statement = match self.current_token.token_type {
            TokenType::SELECT => parse_select(self)?,
            TokenType::INSERT => parse_insert(self)?,
            TokenType::CREATE => parse_create(self)?,
            TokenType::UPDATE => parse_update(self)?,
            TokenType::DELETE => parse_delete(self)?,
            TokenType::DROP => parse_drop(self)?,
            token_type => {
                return Err(ParseError::UnexpectedStatement {
                    token_type,
                    literal: self.current_token.literal.clone(),
                });
            }
        };

        self.expect_end_of_statement()?;
        Ok(statement)
    }

    /// Accept one optional semicolon, then require the end of input
    fn expect_end_of_statement(&mut self) -> ParseResult<()> {
        if self.current_token_is(TokenType::SEMICOLON) {
            self.next_token();
        }
        if self.current_token_is(TokenType::EOF) {
            Ok(())
        } else {
            Err(self.expected(TokenType::EOF))
        }
    }
}

/// Parse a single SQL statement from a query string
pub fn parse(input: &str) -> ParseResult<Statement> {
    Parser::new(input).parse_statement()
}

/// Convert a token type to a binary operator
pub fn token_to_operator(token_type: &TokenType) -> Option<Operator> {
    match token_type {
        TokenType::OR => Some(Operator::Or),
        TokenType::AND => Some(Operator::And),
        TokenType::EQUALS => Some(Operator::Equals),
        TokenType::NotEqual => Some(Operator::NotEquals),
        TokenType::LessThan => Some(Operator::LessThan),
        TokenType::GreaterThan => Some(Operator::GreaterThan),
        TokenType::PLUS => Some(Operator::Plus),
        TokenType::MINUS => Some(Operator::Minus),
        TokenType::ASTERISK => Some(Operator::Multiply),
        TokenType::SLASH => Some(Operator::Divide),
        _ => None,
    }
}
