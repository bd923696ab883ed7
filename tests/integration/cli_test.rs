use anyhow::Result;
use std::process::Command;

fn minidb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minidb"))
}

/// Test that the CLI can execute a single statement
#[test]
fn test_cli_query_execution() -> Result<()> {
    let output = minidb().args(["query", "CREATE DATABASE shop"]).output()?;

    assert!(output.status.success(), "CLI query execution failed");
    let output_str = String::from_utf8(output.stdout)?;
    assert_eq!(output_str, "create database shop\n");
    Ok(())
}

/// Test that the --database option selects a database for the query
#[test]
fn test_cli_query_with_database() -> Result<()> {
    let output = minidb()
        .args(["--database", "shop", "query", "CREATE TABLE items (id INT PRIMARY KEY)"])
        .output()?;

    assert!(output.status.success(), "CLI query with database failed");
    let output_str = String::from_utf8(output.stdout)?;
    assert_eq!(output_str, "create table items\n");
    Ok(())
}

/// Test that failures are reported and exit non-zero
#[test]
fn test_cli_query_error() -> Result<()> {
    let output = minidb().args(["query", "SELECT FROM users"]).output()?;

    assert!(!output.status.success(), "Expected the query to fail");
    let error_str = String::from_utf8(output.stderr)?;
    assert!(error_str.contains("no columns specified"), "Unexpected error: {}", error_str);
    Ok(())
}

/// Test that the parse command prints the syntax tree
#[test]
fn test_cli_parse_command() -> Result<()> {
    let output = minidb().args(["parse", "SELECT id FROM users"]).output()?;
    assert!(output.status.success(), "CLI parse command failed");
    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("Select("), "Unexpected output: {}", output_str);

    let output = minidb()
        .args(["parse", "--json", "CREATE DATABASE shop"])
        .output()?;
    assert!(output.status.success(), "CLI parse --json command failed");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["CreateDatabase"]["database"], "shop");
    Ok(())
}
