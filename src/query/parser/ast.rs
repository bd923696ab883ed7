// SQL Abstract Syntax Tree (AST) Implementation
//
// This module defines the AST nodes for representing parsed SQL statements.

use std::fmt;

use serde::Serialize;

/// Represents a SQL statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateTable(CreateTableStatement),
    CreateDatabase(CreateDatabaseStatement),
    DropDatabase(DropDatabaseStatement),
}

/// SELECT statement representation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    /// Projected expressions, never empty
    pub result: Vec<Expression>,
    /// FROM table (optional)
    pub from: Option<String>,
    /// WHERE clause (optional)
    pub where_clause: Option<Expression>,
    /// ORDER BY clause (optional)
    pub order_by: Option<OrderBy>,
    /// LIMIT clause, an integer scalar (optional)
    pub limit: Option<Expression>,
    /// OFFSET clause, an integer scalar (optional)
    pub offset: Option<Expression>,
}

/// ORDER BY clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// Expression in SQL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// Column or other named reference
    Identifier(String),
    /// Literal value, kept as written in the query
    Scalar {
        scalar_type: ScalarType,
        literal: String,
    },
    /// The `*` wildcard of `SELECT *`
    Asterisk,
    /// Binary operation (comparison, boolean connective or arithmetic)
    BinaryOp {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn scalar(scalar_type: ScalarType, literal: impl Into<String>) -> Self {
        Expression::Scalar {
            scalar_type,
            literal: literal.into(),
        }
    }

    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Type of a scalar literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScalarType {
    Integer,
    Text,
    Boolean,
    Null,
}

/// SQL binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    // Logical
    Or,
    And,
    // Comparison
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        };
        f.write_str(symbol)
    }
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTableStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDef>,
}

/// Column definition for CREATE TABLE
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    /// Zero-based ordinal in the column list
    pub position: usize,
    pub name: String,
    pub data_type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub default: Option<Expression>,
}

/// Column types accepted in CREATE TABLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Integer,
    Text,
    Boolean,
}

/// CREATE DATABASE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabaseStatement {
    pub database: String,
}

/// DROP DATABASE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropDatabaseStatement {
    pub database: String,
}

/// INSERT statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    pub table_name: String,
    pub columns: Vec<String>,
    pub values: Vec<Expression>,
}

/// UPDATE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStatement {
    pub table_name: String,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expression>,
}

/// Column assignment in UPDATE
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: Expression,
}

/// DELETE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStatement {
    pub table_name: String,
    pub where_clause: Option<Expression>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(_) => write!(f, "SELECT statement"),
            Statement::Insert(_) => write!(f, "INSERT statement"),
            Statement::Update(_) => write!(f, "UPDATE statement"),
            Statement::Delete(_) => write!(f, "DELETE statement"),
            Statement::CreateTable(_) => write!(f, "CREATE TABLE statement"),
            Statement::CreateDatabase(_) => write!(f, "CREATE DATABASE statement"),
            Statement::DropDatabase(_) => write!(f, "DROP DATABASE statement"),
        }
    }
}
