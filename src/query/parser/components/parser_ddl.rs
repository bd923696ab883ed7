// DDL Statement Parser Implementation
//
// This module implements parsing for SQL DDL (Data Definition Language) statements:
// CREATE TABLE, CREATE DATABASE and DROP DATABASE.

use crate::query::parser::ast::*;
use crate::query::parser::token::TokenType;

use super::parser_core::{ParseError, ParseResult, Parser};
use super::parser_expressions::parse_clause_expression;

/// Parse a CREATE statement
pub fn parse_create(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume CREATE keyword
    parser.expect_token(TokenType::CREATE)?;

    // Check what we're creating
    if parser.current_token_is(TokenType::DATABASE) {
        parse_create_database(parser)
    } else {
        parse_create_table(parser)
    }
}

/// Parse `DATABASE <name>` after CREATE
fn parse_create_database(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::DATABASE)?;
    let database = parser.parse_identifier()?;

    Ok(Statement::CreateDatabase(CreateDatabaseStatement { database }))
}

/// Parse `TABLE <name> ( <column-def>, ... )` after CREATE
fn parse_create_table(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::TABLE)?;

    let table_name = parser.parse_identifier()?;

    parser.expect_token(TokenType::LeftParen)?;
    let columns = parse_column_definitions(parser)?;
    parser.expect_token(TokenType::RightParen)?;

    Ok(Statement::CreateTable(CreateTableStatement {
        table_name,
        columns,
    }))
}

/// Parse a DROP statement. Only DROP DATABASE is supported.
pub fn parse_drop(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::DROP)?;
    parser.expect_token(TokenType::DATABASE)?;
    let database = parser.parse_identifier()?;

    Ok(Statement::DropDatabase(DropDatabaseStatement { database }))
}

/// Parse column definitions for CREATE TABLE
fn parse_column_definitions(parser: &mut Parser) -> ParseResult<Vec<ColumnDef>> {
    let mut columns = Vec::new();

    loop {
        let name = parser.parse_identifier()?;
        let data_type = parse_column_type(parser)?;

        let mut column = ColumnDef {
            position: columns.len(),
            name,
            data_type,
            nullable: false,
            primary_key: false,
            default: None,
        };
        parse_column_constraints(parser, &mut column)?;
        columns.push(column);

        // Check if we have a comma for more columns
        if parser.current_token_is(TokenType::COMMA) {
            parser.next_token();
            continue;
        }

        break;
    }

    Ok(columns)
}

/// Parse the type marker of a column definition
fn parse_column_type(parser: &mut Parser) -> ParseResult<ColumnType> {
    let token = &parser.current_token;
    let data_type = match token.token_type {
        TokenType::TEXT => ColumnType::Text,
        TokenType::TRUE | TokenType::FALSE => ColumnType::Boolean,
        TokenType::IDENTIFIER => match token.literal.to_uppercase().as_str() {
            "INT" | "INTEGER" => ColumnType::Integer,
            "BOOL" | "BOOLEAN" => ColumnType::Boolean,
            _ => return Err(unexpected_column_type(parser)),
        },
        _ => return Err(unexpected_column_type(parser)),
    };

    parser.next_token();
    Ok(data_type)
}

fn unexpected_column_type(parser: &Parser) -> ParseError {
    ParseError::UnexpectedColumnType {
        token_type: parser.current_token.token_type,
        literal: parser.current_token.literal.clone(),
    }
}

/// Parse optional `PRIMARY KEY`, `NOT NULL`, `NULL` and `DEFAULT <expr>` annotations
fn parse_column_constraints(parser: &mut Parser, column: &mut ColumnDef) -> ParseResult<()> {
    loop {
        match parser.current_token.token_type {
            TokenType::PRIMARY => {
                parser.next_token();
                parser.expect_token(TokenType::KEY)?;
                column.primary_key = true;
                column.nullable = false;
            }
            TokenType::NOT => {
                parser.next_token();
                parser.expect_token(TokenType::NULL)?;
                column.nullable = false;
            }
            TokenType::NULL => {
                parser.next_token();
                column.nullable = true;
            }
            TokenType::DEFAULT => {
                parser.next_token();
                column.default = Some(parse_clause_expression(parser)?);
            }
            _ => return Ok(()),
        }
    }
}
