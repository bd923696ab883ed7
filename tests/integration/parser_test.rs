use anyhow::{anyhow, Result};
use minidb::query::parser::ast::{
    Expression, InsertStatement, OrderBy, OrderDirection, Operator, ScalarType, SelectStatement,
    Statement,
};
use minidb::query::parser::{parse, ParseError, Parser, TokenType};

fn int(literal: &str) -> Expression {
    Expression::scalar(ScalarType::Integer, literal)
}

fn parse_select(sql: &str) -> Result<SelectStatement> {
    match parse(sql).map_err(|e| anyhow!("Parse error: {}", e))? {
        Statement::Select(select) => Ok(select),
        other => Err(anyhow!("Expected SELECT statement, got {}", other)),
    }
}

#[test]
fn test_simple_select_query() -> Result<()> {
    let sql = "SELECT id, name FROM test_table WHERE id > 5";
    let mut parser = Parser::new(sql);

    let statement = parser.parse_statement().map_err(|e| anyhow!("Parse error: {:?}", e))?;

    if let Statement::Select(select) = statement {
        assert_eq!(select.result.len(), 2);
        assert_eq!(select.from.as_deref(), Some("test_table"));

        // Should be a binary operation with > operator
        match select.where_clause {
            Some(Expression::BinaryOp { op, .. }) => assert_eq!(op, Operator::GreaterThan),
            _ => panic!("Expected binary operation in WHERE clause"),
        }
    } else {
        panic!("Expected SELECT statement");
    }

    Ok(())
}

#[test]
fn test_multiplication_binds_tighter() -> Result<()> {
    let select = parse_select("SELECT 10+2*3")?;
    assert_eq!(
        select.result,
        vec![Expression::binary(
            int("10"),
            Operator::Plus,
            Expression::binary(int("2"), Operator::Multiply, int("3")),
        )]
    );

    let select = parse_select("SELECT (10+2)*3")?;
    assert_eq!(
        select.result,
        vec![Expression::binary(
            Expression::binary(int("10"), Operator::Plus, int("2")),
            Operator::Multiply,
            int("3"),
        )]
    );
    Ok(())
}

#[test]
fn test_order_by_defaults_to_ascending() -> Result<()> {
    let select = parse_select("SELECT id FROM customers ORDER BY id")?;
    assert_eq!(
        select.order_by,
        Some(OrderBy {
            column: "id".to_string(),
            direction: OrderDirection::Asc,
        })
    );
    Ok(())
}

#[test]
fn test_compound_where() -> Result<()> {
    let select = parse_select("SELECT id FROM customers WHERE id = 10 AND name = 'vlad'")?;
    assert_eq!(
        select.where_clause,
        Some(Expression::binary(
            Expression::binary(Expression::identifier("id"), Operator::Equals, int("10")),
            Operator::And,
            Expression::binary(
                Expression::identifier("name"),
                Operator::Equals,
                Expression::scalar(ScalarType::Text, "vlad"),
            ),
        ))
    );
    Ok(())
}

#[test]
fn test_full_select() -> Result<()> {
    let select = parse_select(
        "select id, name from customers where id != 3 order by name desc limit 5 offset 10;",
    )?;
    assert_eq!(
        select,
        SelectStatement {
            result: vec![Expression::identifier("id"), Expression::identifier("name")],
            from: Some("customers".to_string()),
            where_clause: Some(Expression::binary(
                Expression::identifier("id"),
                Operator::NotEquals,
                int("3"),
            )),
            order_by: Some(OrderBy {
                column: "name".to_string(),
                direction: OrderDirection::Desc,
            }),
            limit: Some(int("5")),
            offset: Some(int("10")),
        }
    );
    Ok(())
}

#[test]
fn test_empty_projection() -> Result<()> {
    let err = parse("SELECT FROM users").unwrap_err();
    assert_eq!(err, ParseError::EmptyProjection);
    assert_eq!(err.to_string(), "no columns specified");
    Ok(())
}

#[test]
fn test_insert_shape() -> Result<()> {
    let statement = parse("INSERT INTO customers (id, name) VALUES (10, 'Tom')")?;
    assert_eq!(
        statement,
        Statement::Insert(InsertStatement {
            table_name: "customers".to_string(),
            columns: vec!["id".to_string(), "name".to_string()],
            values: vec![int("10"), Expression::scalar(ScalarType::Text, "Tom")],
        })
    );
    Ok(())
}

#[test]
fn test_keywords_are_case_insensitive() -> Result<()> {
    for sql in ["select * from users", "SELECT * FROM users", "Select * From users"] {
        let select = parse_select(sql)?;
        assert_eq!(select.result, vec![Expression::Asterisk]);
        assert_eq!(select.from.as_deref(), Some("users"));
    }

    let select = parse_select("SELECT Select_Column FROM Users")?;
    assert_eq!(select.result, vec![Expression::identifier("Select_Column")]);
    assert_eq!(select.from.as_deref(), Some("Users"));
    Ok(())
}

#[test]
fn test_statement_errors() -> Result<()> {
    assert!(matches!(
        parse("GRANT ALL"),
        Err(ParseError::UnexpectedStatement { token_type: TokenType::IDENTIFIER, .. })
    ));
    assert!(matches!(
        parse("SELECT id FROM users ORDER id"),
        Err(ParseError::ExpectedToken { expected: TokenType::BY, .. })
    ));
    assert!(matches!(
        parse("SELECT id, FROM users"),
        Err(ParseError::UnexpectedOperand { token_type: TokenType::FROM, .. })
    ));
    assert!(matches!(
        parse("CREATE TABLE t (id 'x')"),
        Err(ParseError::UnexpectedColumnType { token_type: TokenType::STRING, .. })
    ));
    assert_eq!(
        parse("SELECT -1").unwrap_err(),
        ParseError::UnsupportedUnaryOperator(TokenType::MINUS)
    );
    Ok(())
}

#[test]
fn test_ddl_and_dml_statements() -> Result<()> {
    assert!(matches!(parse("CREATE DATABASE shop")?, Statement::CreateDatabase(_)));
    assert!(matches!(parse("DROP DATABASE shop;")?, Statement::DropDatabase(_)));
    assert!(matches!(
        parse("CREATE TABLE items (id INT PRIMARY KEY, name TEXT)")?,
        Statement::CreateTable(_)
    ));
    assert!(matches!(parse("UPDATE items SET name = 'x' WHERE id = 1")?, Statement::Update(_)));
    assert!(matches!(parse("DELETE FROM items")?, Statement::Delete(_)));
    Ok(())
}
