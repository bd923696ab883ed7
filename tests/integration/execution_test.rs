use std::sync::Arc;

use anyhow::{anyhow, Result};
use minidb::catalog::{CatalogError, DataType, DataValue};
use minidb::query::parser::ParseError;
use minidb::{Catalog, ExecutionEngine, QueryError, Shell, ShellConfig};
use parking_lot::RwLock;

fn setup_engine() -> ExecutionEngine {
    ExecutionEngine::new(Arc::new(RwLock::new(Catalog::new())))
}

#[test]
fn test_create_database_and_table() -> Result<()> {
    let engine = setup_engine();

    let message = engine.execute(None, "CREATE DATABASE shop")?;
    assert_eq!(message, "create database shop\n");

    let sql = "CREATE TABLE items (id INT PRIMARY KEY, name TEXT NOT NULL, in_stock BOOLEAN DEFAULT true)";
    let message = engine.execute(Some("shop"), sql)?;
    assert_eq!(message, "create table items\n");

    let catalog = engine.catalog();
    let catalog = catalog.read();
    let table = catalog.get_database("shop")?.get_table("items")?;

    let columns: Vec<(&str, DataType)> = table
        .schema()
        .columns()
        .map(|c| (c.name(), c.data_type()))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("id", DataType::Integer),
            ("name", DataType::Text),
            ("in_stock", DataType::Boolean),
        ]
    );

    let in_stock = table
        .schema()
        .get_column("in_stock")
        .ok_or_else(|| anyhow!("missing column"))?;
    assert_eq!(in_stock.default_value(), Some(&DataValue::Boolean(true)));
    Ok(())
}

#[test]
fn test_table_rows_through_catalog() -> Result<()> {
    let engine = setup_engine();
    engine.execute(None, "CREATE DATABASE shop")?;
    engine.execute(Some("shop"), "CREATE TABLE items (id INT PRIMARY KEY, name TEXT)")?;

    let catalog = engine.catalog();
    let mut catalog = catalog.write();
    let table = catalog.get_database_mut("shop")?.get_table_mut("items")?;

    table.insert(2, vec![DataValue::Integer(2), DataValue::Text("pen".to_string())])?;
    table.insert(1, vec![DataValue::Integer(1), DataValue::Text("ink".to_string())])?;
    table.delete(2)?;
    table.insert(3, vec![DataValue::Integer(3), DataValue::Null])?;

    let names: Vec<String> = table.scan().map(|row| row[1].to_string()).collect();
    assert_eq!(names, vec!["ink", "NULL"]);
    assert_eq!(
        table.insert(1, vec![DataValue::Integer(1), DataValue::Null]),
        Err(CatalogError::DuplicateKey(1))
    );
    Ok(())
}

#[test]
fn test_schema_validation_errors() -> Result<()> {
    let engine = setup_engine();
    engine.execute(None, "CREATE DATABASE shop")?;

    assert_eq!(
        engine.execute(Some("shop"), "CREATE TABLE t (id INT, name TEXT)"),
        Err(QueryError::Catalog(CatalogError::MissingPrimaryKey))
    );
    assert_eq!(
        engine.execute(Some("shop"), "CREATE TABLE t (id INT PRIMARY KEY, id TEXT)"),
        Err(QueryError::Catalog(CatalogError::DuplicateColumn("id".to_string())))
    );
    engine.execute(Some("shop"), "CREATE TABLE t (id INT PRIMARY KEY)")?;
    assert_eq!(
        engine.execute(Some("shop"), "CREATE TABLE t (id INT PRIMARY KEY)"),
        Err(QueryError::Catalog(CatalogError::TableAlreadyExists("t".to_string())))
    );
    Ok(())
}

#[test]
fn test_unexecuted_statements() -> Result<()> {
    let engine = setup_engine();
    for sql in [
        "SELECT * FROM items",
        "INSERT INTO items (id) VALUES (1)",
        "UPDATE items SET id = 2",
        "DELETE FROM items WHERE id = 1",
    ] {
        assert!(matches!(engine.execute(Some("shop"), sql), Err(QueryError::Unsupported(_))));
    }
    assert_eq!(
        engine.execute(None, "SELECT FROM items"),
        Err(QueryError::Parse(ParseError::EmptyProjection))
    );
    Ok(())
}

#[test]
fn test_shell_session() -> Result<()> {
    let mut shell = Shell::new(&ShellConfig::default())?;

    assert_eq!(shell.exec("create database test")?, "create database test\n");
    assert_eq!(
        shell.exec("CREATE TABLE users (id INT PRIMARY KEY)"),
        Err(QueryError::NoDatabaseSelected)
    );
    assert_eq!(shell.exec("\\use test")?, "database changed\n");
    assert_eq!(shell.exec("CREATE TABLE users (id INT PRIMARY KEY)")?, "create table users\n");
    assert_eq!(shell.exec("\\dt")?, "users\n");

    let err = shell.exec("create database test").unwrap_err();
    assert_eq!(err.to_string(), "database \"test\" already exist");
    Ok(())
}
