//! Function calls and casts.

use super::Expression;
use crate::literal::Literal;

/// `NAME(arg1, arg2, ...)`; the name is written verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFunctionExpression {
    name: String,
    args: Vec<Literal>,
}

impl SqlFunctionExpression {
    pub fn new(name: impl Into<String>, args: Vec<Literal>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Literal] {
        &self.args
    }
}

/// `CAST(<expr> AS <TYPE>)`; the type is written verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpression {
    expr: Box<Expression>,
    type_name: String,
}

impl CastExpression {
    pub fn new(expr: impl Into<Expression>, type_name: impl Into<String>) -> Self {
        Self {
            expr: Box::new(expr.into()),
            type_name: type_name.into(),
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Call an arbitrary SQL function.
pub fn func(name: impl Into<String>, args: Vec<Literal>) -> SqlFunctionExpression {
    SqlFunctionExpression::new(name, args)
}

// Single-column aggregates: strings name a column.
macro_rules! column_function {
    ($($(#[$meta:meta])* $fn_name:ident => $sql:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $fn_name(col: impl Into<Expression>) -> SqlFunctionExpression {
                SqlFunctionExpression::new($sql, vec![Literal::Expr(col.into())])
            }
        )*
    };
}

column_function! {
    /// `MIN(col)`
    min => "MIN",
    /// `MAX(col)`
    max => "MAX",
    /// `SUM(col)`
    sum => "SUM",
    /// `AVG(col)`
    avg => "AVG",
    /// `COUNT(col)`
    count => "COUNT",
    /// `DISTINCT(col)`
    distinct => "DISTINCT",
    /// `FIRST(col)`
    first => "FIRST",
    /// `LAST(col)`
    last => "LAST",
}

/// `COALESCE(v1, v2, ...)`; arguments are values, not column names.
pub fn coalesce(args: Vec<Literal>) -> SqlFunctionExpression {
    SqlFunctionExpression::new("COALESCE", args)
}
