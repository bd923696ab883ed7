// SQL Token Model
//
// This module defines the vocabulary of lexical units produced by the lexer
// and the keyword table used to recognize reserved words.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// SQL Token types
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenType {
    // Special
    EOF,
    ILLEGAL,

    // Identifiers and literals
    IDENTIFIER,
    INTEGER,
    STRING,
    TRUE,
    FALSE,
    NULL,

    // Punctuation
    COMMA,          // ,
    SEMICOLON,      // ;
    LeftParen,      // (
    RightParen,     // )

    // Operators
    EQUALS,         // =
    LessThan,       // <
    GreaterThan,    // >
    NotEqual,       // !=
    BANG,           // !
    PLUS,           // +
    MINUS,          // -
    ASTERISK,       // *
    SLASH,          // /

    // Keywords
    SELECT,
    FROM,
    WHERE,
    AND,
    OR,
    NOT,
    CREATE,
    TABLE,
    DATABASE,
    DROP,
    INSERT,
    INTO,
    VALUES,
    UPDATE,
    SET,
    DELETE,
    ORDER,
    BY,
    ASC,
    DESC,
    LIMIT,
    OFFSET,
    DEFAULT,
    TEXT,
    PRIMARY,
    KEY,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::EOF => "EOF",
            TokenType::ILLEGAL => "ILLEGAL",
            TokenType::IDENTIFIER => "IDENT",
            TokenType::INTEGER => "INT",
            TokenType::STRING => "STRING",
            TokenType::TRUE => "TRUE",
            TokenType::FALSE => "FALSE",
            TokenType::NULL => "NULL",
            TokenType::COMMA => ",",
            TokenType::SEMICOLON => ";",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::EQUALS => "=",
            TokenType::LessThan => "<",
            TokenType::GreaterThan => ">",
            TokenType::NotEqual => "!=",
            TokenType::BANG => "!",
            TokenType::PLUS => "+",
            TokenType::MINUS => "-",
            TokenType::ASTERISK => "*",
            TokenType::SLASH => "/",
            TokenType::SELECT => "SELECT",
            TokenType::FROM => "FROM",
            TokenType::WHERE => "WHERE",
            TokenType::AND => "AND",
            TokenType::OR => "OR",
            TokenType::NOT => "NOT",
            TokenType::CREATE => "CREATE",
            TokenType::TABLE => "TABLE",
            TokenType::DATABASE => "DATABASE",
            TokenType::DROP => "DROP",
            TokenType::INSERT => "INSERT",
            TokenType::INTO => "INTO",
            TokenType::VALUES => "VALUES",
            TokenType::UPDATE => "UPDATE",
            TokenType::SET => "SET",
            TokenType::DELETE => "DELETE",
            TokenType::ORDER => "ORDER",
            TokenType::BY => "BY",
            TokenType::ASC => "ASC",
            TokenType::DESC => "DESC",
            TokenType::LIMIT => "LIMIT",
            TokenType::OFFSET => "OFFSET",
            TokenType::DEFAULT => "DEFAULT",
            TokenType::TEXT => "TEXT",
            TokenType::PRIMARY => "PRIMARY",
            TokenType::KEY => "KEY",
        };
        f.write_str(name)
    }
}

/// A Token represents a lexical unit in the SQL query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>) -> Self {
        Token {
            token_type,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenType::EOF, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", self.token_type, self.literal)
    }
}

// Reserved words, stored upper-cased
static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    HashMap::from([
        ("TRUE", TokenType::TRUE),
        ("FALSE", TokenType::FALSE),
        ("NULL", TokenType::NULL),
        ("SELECT", TokenType::SELECT),
        ("FROM", TokenType::FROM),
        ("WHERE", TokenType::WHERE),
        ("AND", TokenType::AND),
        ("OR", TokenType::OR),
        ("NOT", TokenType::NOT),
        ("CREATE", TokenType::CREATE),
        ("TABLE", TokenType::TABLE),
        ("DATABASE", TokenType::DATABASE),
        ("DROP", TokenType::DROP),
        ("INSERT", TokenType::INSERT),
        ("INTO", TokenType::INTO),
        ("VALUES", TokenType::VALUES),
        ("UPDATE", TokenType::UPDATE),
        ("SET", TokenType::SET),
        ("DELETE", TokenType::DELETE),
        ("ORDER", TokenType::ORDER),
        ("BY", TokenType::BY),
        ("ASC", TokenType::ASC),
        ("DESC", TokenType::DESC),
        ("LIMIT", TokenType::LIMIT),
        ("OFFSET", TokenType::OFFSET),
        ("DEFAULT", TokenType::DEFAULT),
        ("TEXT", TokenType::TEXT),
        ("PRIMARY", TokenType::PRIMARY),
        ("KEY", TokenType::KEY),
    ])
});

/// Resolve an identifier candidate against the keyword table.
///
/// The exact spelling is tried first, then the upper-cased and lower-cased
/// spellings, so keywords match regardless of case while identifiers keep
/// the casing they were written with.
pub fn lookup_identifier(ident: &str) -> TokenType {
    if let Some(token_type) = KEYWORDS.get(ident) {
        return *token_type;
    }
    if let Some(token_type) = KEYWORDS.get(ident.to_uppercase().as_str()) {
        return *token_type;
    }
    if let Some(token_type) = KEYWORDS.get(ident.to_lowercase().as_str()) {
        return *token_type;
    }
    TokenType::IDENTIFIER
}
