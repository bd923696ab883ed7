// Operator Precedence Table
//
// Maps binary operator tokens to their binding strength for precedence climbing.

use super::token::TokenType;

/// Binding strength of a binary operator, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Seed precedence for a fresh expression and for anything that is not an operator
    Lowest,
    Or,
    And,
    /// =, !=, <, >
    Comparison,
    /// +, -
    Sum,
    /// *, /
    Product,
}

/// Get operator precedence for expression parsing
pub fn precedence_of(token_type: &TokenType) -> Precedence {
    match token_type {
        TokenType::OR => Precedence::Or,
        TokenType::AND => Precedence::And,
        TokenType::EQUALS | TokenType::NotEqual | TokenType::LessThan | TokenType::GreaterThan => {
            Precedence::Comparison
        }
        TokenType::PLUS | TokenType::MINUS => Precedence::Sum,
        TokenType::ASTERISK | TokenType::SLASH => Precedence::Product,
        _ => Precedence::Lowest,
    }
}
