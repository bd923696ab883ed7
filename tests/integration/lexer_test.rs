use anyhow::Result;
use minidb::query::parser::{Lexer, Token, TokenType};

fn token_types(input: &str) -> Vec<TokenType> {
    Lexer::new(input).map(|token| token.token_type).collect()
}

#[test]
fn test_lex_select_statement() -> Result<()> {
    let tokens: Vec<Token> = Lexer::new("SELECT id, name FROM users WHERE id >= 10;").collect();

    let expected = vec![
        Token::new(TokenType::SELECT, "SELECT"),
        Token::new(TokenType::IDENTIFIER, "id"),
        Token::new(TokenType::COMMA, ","),
        Token::new(TokenType::IDENTIFIER, "name"),
        Token::new(TokenType::FROM, "FROM"),
        Token::new(TokenType::IDENTIFIER, "users"),
        Token::new(TokenType::WHERE, "WHERE"),
        Token::new(TokenType::IDENTIFIER, "id"),
        Token::new(TokenType::GreaterThan, ">"),
        Token::new(TokenType::EQUALS, "="),
        Token::new(TokenType::INTEGER, "10"),
        Token::new(TokenType::SEMICOLON, ";"),
        Token::eof(),
    ];
    assert_eq!(tokens, expected);
    Ok(())
}

#[test]
fn test_eof_is_repeatable() -> Result<()> {
    let mut lexer = Lexer::new("id");
    assert_eq!(lexer.next_token().token_type, TokenType::IDENTIFIER);
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
    Ok(())
}

#[test]
fn test_keyword_case_insensitivity() -> Result<()> {
    assert_eq!(
        token_types("select SELECT Select"),
        vec![TokenType::SELECT, TokenType::SELECT, TokenType::SELECT, TokenType::EOF]
    );

    let mut lexer = Lexer::new("Select_Column");
    assert_eq!(lexer.next_token(), Token::new(TokenType::IDENTIFIER, "Select_Column"));
    Ok(())
}

#[test]
fn test_operators_and_literals() -> Result<()> {
    assert_eq!(
        token_types("a != 'x y' ! + - * / ( ) < true null"),
        vec![
            TokenType::IDENTIFIER,
            TokenType::NotEqual,
            TokenType::STRING,
            TokenType::BANG,
            TokenType::PLUS,
            TokenType::MINUS,
            TokenType::ASTERISK,
            TokenType::SLASH,
            TokenType::LeftParen,
            TokenType::RightParen,
            TokenType::LessThan,
            TokenType::TRUE,
            TokenType::NULL,
            TokenType::EOF,
        ]
    );

    let mut lexer = Lexer::new("'x y'");
    assert_eq!(lexer.next_token(), Token::new(TokenType::STRING, "x y"));
    Ok(())
}

#[test]
fn test_illegal_characters() -> Result<()> {
    let mut lexer = Lexer::new("id @ 1.5");
    assert_eq!(lexer.next_token().token_type, TokenType::IDENTIFIER);
    assert_eq!(lexer.next_token(), Token::new(TokenType::ILLEGAL, "@"));
    assert_eq!(lexer.next_token(), Token::new(TokenType::INTEGER, "1"));
    assert_eq!(lexer.next_token(), Token::new(TokenType::ILLEGAL, "."));
    assert_eq!(lexer.next_token(), Token::new(TokenType::INTEGER, "5"));
    Ok(())
}
