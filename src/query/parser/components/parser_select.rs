// SELECT Statement Parser Implementation
//
// Clauses are parsed in a fixed order: result list, FROM, WHERE, ORDER BY,
// LIMIT, OFFSET. Only the result list is mandatory.

use crate::query::parser::ast::*;
use crate::query::parser::token::TokenType;

use super::parser_core::{ParseError, ParseResult, Parser};
use super::parser_expressions::{parse_clause_expression, parse_where_clause};

/// Parse a SELECT statement
pub fn parse_select(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume SELECT keyword
    parser.expect_token(TokenType::SELECT)?;

    let result = parse_result_columns(parser)?;
    let from = parse_from_clause(parser)?;
    let where_clause = parse_where_clause(parser)?;
    let order_by = parse_order_by_clause(parser)?;
    let limit = parse_integer_clause(parser, TokenType::LIMIT)?;
    let offset = parse_integer_clause(parser, TokenType::OFFSET)?;

    Ok(Statement::Select(SelectStatement {
        result,
        from,
        where_clause,
        order_by,
        limit,
        offset,
    }))
}

/// Parse the comma separated result list up to FROM or the end of input
fn parse_result_columns(parser: &mut Parser) -> ParseResult<Vec<Expression>> {
    if parser.current_token_is(TokenType::FROM) || parser.current_token_is(TokenType::EOF) {
        return Err(ParseError::EmptyProjection);
    }

    // Every comma must be followed by another expression
    let mut columns = vec![parse_clause_expression(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        columns.push(parse_clause_expression(parser)?);
    }

    Ok(columns)
}

/// Parse an optional `FROM <table>` clause
fn parse_from_clause(parser: &mut Parser) -> ParseResult<Option<String>> {
    if !parser.current_token_is(TokenType::FROM) {
        return Ok(None);
    }
    parser.next_token(); // Consume FROM
    parser.parse_identifier().map(Some)
}

/// Parse an optional `ORDER BY <column> [ASC | DESC]` clause
fn parse_order_by_clause(parser: &mut Parser) -> ParseResult<Option<OrderBy>> {
    if !parser.current_token_is(TokenType::ORDER) {
        return Ok(None);
    }
    parser.next_token(); // Consume ORDER
    parser.expect_token(TokenType::BY)?;

    let column = parser.parse_identifier()?;

    let direction = match parser.current_token.token_type {
        TokenType::ASC => {
            parser.next_token();
            OrderDirection::Asc
        }
        TokenType::DESC => {
            parser.next_token();
            OrderDirection::Desc
        }
        _ => OrderDirection::default(),
    };

    Ok(Some(OrderBy { column, direction }))
}

/// Parse an optional `<keyword> <integer>` clause (LIMIT, OFFSET)
fn parse_integer_clause(parser: &mut Parser, keyword: TokenType) -> ParseResult<Option<Expression>> {
    if !parser.current_token_is(keyword) {
        return Ok(None);
    }
    parser.next_token(); // Consume keyword

    let token = parser.expect_token(TokenType::INTEGER)?;
    Ok(Some(Expression::scalar(ScalarType::Integer, token.literal)))
}
