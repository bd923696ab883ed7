// SQL Lexer Implementation
//
// This module implements a single-pass lexer that tokenizes SQL queries on demand.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;

use super::token::{lookup_identifier, Token, TokenType};

/// SQL Lexer for breaking a query string into tokens
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    ch: Option<char>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from a SQL query string
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars().peekable(),
            ch: None,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Read the next character from the input
    fn read_char(&mut self) -> Option<char> {
        self.ch = self.input.next();
        self.ch
    }

    /// Peek at the next character without advancing
    fn peek_char(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if ch.is_whitespace() {
                self.read_char();
            } else {
                break;
            }
        }
    }

    /// Read a maximal run of letters, digits and underscores
    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();
        while let Some(ch) = self.ch {
            if is_letter(ch) || ch.is_ascii_digit() {
                identifier.push(ch);
                self.read_char();
            } else {
                break;
            }
        }
        identifier
    }

    /// Read a maximal run of decimal digits
    fn read_number(&mut self) -> String {
        let mut number = String::new();
        while let Some(ch) = self.ch {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.read_char();
            } else {
                break;
            }
        }
        number
    }

    /// Read a quoted text literal. No escapes are recognized; the literal ends
    /// at the next quote. A missing closing quote yields the partial text as `Err`.
    fn read_string(&mut self) -> Result<String, String> {
        let mut string = String::new();

        // Skip opening quote
        self.read_char();

        while let Some(ch) = self.ch {
            self.read_char();
            if ch == '\'' {
                return Ok(string);
            }
            string.push(ch);
        }

        Err(string)
    }

    /// Get the next token from the input.
    ///
    /// Once the input is exhausted every further call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.ch {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        let token = match ch {
            ',' => Token::new(TokenType::COMMA, ","),
            ';' => Token::new(TokenType::SEMICOLON, ";"),
            '(' => Token::new(TokenType::LeftParen, "("),
            ')' => Token::new(TokenType::RightParen, ")"),
            '=' => Token::new(TokenType::EQUALS, "="),
            '<' => Token::new(TokenType::LessThan, "<"),
            '>' => Token::new(TokenType::GreaterThan, ">"),
            '+' => Token::new(TokenType::PLUS, "+"),
            '-' => Token::new(TokenType::MINUS, "-"),
            '*' => Token::new(TokenType::ASTERISK, "*"),
            '/' => Token::new(TokenType::SLASH, "/"),
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenType::NotEqual, "!=")
                } else {
                    Token::new(TokenType::BANG, "!")
                }
            }
            '\'' => {
                // read_string leaves the cursor past the literal
                return match self.read_string() {
                    Ok(text) => Token::new(TokenType::STRING, text),
                    Err(partial) => Token::new(TokenType::ILLEGAL, format!("'{}", partial)),
                };
            }
            _ if is_letter(ch) => {
                let identifier = self.read_identifier();
                let token_type = lookup_identifier(&identifier);
                return Token::new(token_type, identifier);
            }
            _ if ch.is_ascii_digit() => {
                let number = self.read_number();
                return Token::new(TokenType::INTEGER, number);
            }
            _ => Token::new(TokenType::ILLEGAL, ch.to_string()),
        };

        self.read_char();
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        trace!("lexed {}", token);
        if token.token_type == TokenType::EOF {
            self.finished = true;
        }
        Some(token)
    }
}

/// Check if a character can start an identifier
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
