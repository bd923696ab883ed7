// Expression Parser Implementation
//
// Precedence climbing over binary operators. While an expression is being
// parsed the current token is the last token of the expression seen so far;
// the lookahead token decides whether the expression continues.

use crate::query::parser::ast::*;
use crate::query::parser::precedence::Precedence;
use crate::query::parser::token::TokenType;

use super::parser_core::{token_to_operator, ParseError, ParseResult, Parser, MAX_NESTING_DEPTH};

/// Parse an expression whose operators bind tighter than `precedence`.
///
/// Leaves the parser on the last token of the expression.
pub fn parse_expression(parser: &mut Parser, precedence: Precedence) -> ParseResult<Expression> {
    let mut left_expr = parse_operand(parser)?;

    while !is_expression_terminator(&parser.peek_token.token_type)
        && precedence < parser.peek_precedence()
    {
        parser.next_token(); // Move onto the operator
        left_expr = parse_infix_expression(parser, left_expr)?;
    }

    Ok(left_expr)
}

/// Parse a complete expression and step past its last token
pub fn parse_clause_expression(parser: &mut Parser) -> ParseResult<Expression> {
    let expr = parse_expression(parser, Precedence::Lowest)?;
    parser.next_token();
    Ok(expr)
}

/// Parse an optional `WHERE <expr>` clause
pub fn parse_where_clause(parser: &mut Parser) -> ParseResult<Option<Expression>> {
    if !parser.current_token_is(TokenType::WHERE) {
        return Ok(None);
    }
    parser.next_token(); // Consume WHERE
    parse_clause_expression(parser).map(Some)
}

/// Tokens that end an expression inside a statement clause
fn is_expression_terminator(token_type: &TokenType) -> bool {
    matches!(
        token_type,
        TokenType::COMMA
            | TokenType::SEMICOLON
            | TokenType::EOF
            | TokenType::FROM
            | TokenType::WHERE
    )
}

/// Parse a single operand starting at the current token
fn parse_operand(parser: &mut Parser) -> ParseResult<Expression> {
    let token = parser.current_token.clone();
    match token.token_type {
        TokenType::IDENTIFIER => Ok(Expression::Identifier(token.literal)),
        TokenType::ASTERISK => Ok(Expression::Asterisk),
        TokenType::INTEGER => Ok(Expression::scalar(ScalarType::Integer, token.literal)),
        TokenType::STRING => Ok(Expression::scalar(ScalarType::Text, token.literal)),
        TokenType::TRUE | TokenType::FALSE => {
            Ok(Expression::scalar(ScalarType::Boolean, token.literal))
        }
        TokenType::NULL => Ok(Expression::scalar(ScalarType::Null, token.literal)),
        TokenType::LeftParen => parse_group_expression(parser),
        TokenType::PLUS | TokenType::MINUS => {
            Err(ParseError::UnsupportedUnaryOperator(token.token_type))
        }
        token_type => Err(ParseError::UnexpectedOperand {
            token_type,
            literal: token.literal,
        }),
    }
}

/// Parse `( <expr> )`, leaving the parser on the closing parenthesis
fn parse_group_expression(parser: &mut Parser) -> ParseResult<Expression> {
    if parser.depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    parser.next_token(); // Consume (

    parser.depth += 1;
    let expr = parse_expression(parser, Precedence::Lowest);
    parser.depth -= 1;
    let expr = expr?;

    parser.next_token();
    if !parser.current_token_is(TokenType::RightParen) {
        return Err(parser.expected(TokenType::RightParen));
    }

    Ok(expr)
}

/// Fold the operator at the current token into a binary operation
fn parse_infix_expression(parser: &mut Parser, left: Expression) -> ParseResult<Expression> {
    let operator_token = parser.current_token.clone();
    let op = token_to_operator(&operator_token.token_type).ok_or(ParseError::UnexpectedOperand {
        token_type: operator_token.token_type,
        literal: operator_token.literal,
    })?;
    let precedence = parser.current_precedence();

    parser.next_token(); // Consume the operator

    // Equal precedence does not pass the gate, which keeps chains left-associative
    let right = parse_expression(parser, precedence)?;

    Ok(Expression::binary(left, op, right))
}
