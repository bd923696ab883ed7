// DML Statement Parser Implementation
//
// This module implements parsing for SQL DML (Data Manipulation Language) statements:
// INSERT, UPDATE, and DELETE

use crate::query::parser::ast::*;
use crate::query::parser::token::TokenType;

use super::parser_core::{ParseResult, Parser};
use super::parser_expressions::{parse_clause_expression, parse_where_clause};

/// Parse an INSERT statement
pub fn parse_insert(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::INSERT)?;
    parser.expect_token(TokenType::INTO)?;

    let table_name = parser.parse_identifier()?;

    // Column list
    parser.expect_token(TokenType::LeftParen)?;
    let mut columns = vec![parser.parse_identifier()?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        columns.push(parser.parse_identifier()?);
    }
    parser.expect_token(TokenType::RightParen)?;

    parser.expect_token(TokenType::VALUES)?;

    // Value list; its length is not checked against the column list here
    parser.expect_token(TokenType::LeftParen)?;
    let mut values = vec![parse_clause_expression(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        values.push(parse_clause_expression(parser)?);
    }
    parser.expect_token(TokenType::RightParen)?;

    Ok(Statement::Insert(InsertStatement {
        table_name,
        columns,
        values,
    }))
}

/// Parse an UPDATE statement
pub fn parse_update(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::UPDATE)?;

    let table_name = parser.parse_identifier()?;

    parser.expect_token(TokenType::SET)?;

    let mut assignments = vec![parse_assignment(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        assignments.push(parse_assignment(parser)?);
    }

    let where_clause = parse_where_clause(parser)?;

    Ok(Statement::Update(UpdateStatement {
        table_name,
        assignments,
        where_clause,
    }))
}

/// Parse `<column> = <expr>`
fn parse_assignment(parser: &mut Parser) -> ParseResult<Assignment> {
    let column = parser.parse_identifier()?;
    parser.expect_token(TokenType::EQUALS)?;
    let value = parse_clause_expression(parser)?;

    Ok(Assignment { column, value })
}

/// Parse a DELETE statement
pub fn parse_delete(parser: &mut Parser) -> ParseResult<Statement> {
    parser.expect_token(TokenType::DELETE)?;
    parser.expect_token(TokenType::FROM)?;

    let table_name = parser.parse_identifier()?;
    let where_clause = parse_where_clause(parser)?;

    Ok(Statement::Delete(DeleteStatement {
        table_name,
        where_clause,
    }))
}
