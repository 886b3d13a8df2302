//! Lists, raw fragments, aliases and set operations.

use super::Expression;
use crate::dataset::Dataset;
use crate::literal::Literal;

/// Comma-joined columns, e.g. a SELECT list. No enclosing parentheses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnList {
    columns: Vec<Expression>,
}

impl ColumnList {
    pub fn new<I, E>(columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[Expression] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Append columns, returning a new list.
    pub fn append(mut self, other: ColumnList) -> Self {
        self.columns.extend(other.columns);
        self
    }
}

/// How the items of an [`ExpressionList`] are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `a, b, c` with no parentheses
    Comma,
    /// `(a AND b)`
    And,
    /// `(a OR b)`
    Or,
}

impl ListKind {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Comma => ", ",
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// A list of values or nodes.
///
/// AND/OR lists are wrapped in one pair of parentheses, render a single item
/// bare and render nothing when empty. Comma lists never add parentheses; the
/// containing context does.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionList {
    kind: ListKind,
    items: Vec<Literal>,
}

impl ExpressionList {
    pub fn new(kind: ListKind, items: Vec<Literal>) -> Self {
        Self { kind, items }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn items(&self) -> &[Literal] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item to the end, returning a new list.
    pub fn push(mut self, item: impl Into<Literal>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// A verbatim SQL fragment with `?` substitution markers.
///
/// The fragment is never escaped. Each `?`, in order, is replaced by the
/// rendering of the matching argument; markers beyond the last argument are
/// left as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpression {
    sql: String,
    args: Vec<Literal>,
}

impl LiteralExpression {
    pub fn new(sql: impl Into<String>, args: Vec<Literal>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Literal] {
        &self.args
    }
}

/// `<expr> AS "<alias>"`
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedExpression {
    expr: Box<Expression>,
    alias: String,
}

impl AliasedExpression {
    pub fn new(expr: impl Into<Expression>, alias: impl Into<String>) -> Self {
        Self {
            expr: Box::new(expr.into()),
            alias: alias.into(),
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

/// Set operation keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundType {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
}

impl CompoundType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Intersect => "INTERSECT",
            Self::IntersectAll => "INTERSECT ALL",
        }
    }
}

/// ` UNION (<dataset>)` and friends; note the leading space.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundExpression {
    kind: CompoundType,
    rhs: Box<Dataset>,
}

impl CompoundExpression {
    pub fn new(kind: CompoundType, rhs: Dataset) -> Self {
        Self {
            kind,
            rhs: Box::new(rhs),
        }
    }

    pub fn kind(&self) -> CompoundType {
        self.kind
    }

    pub fn rhs(&self) -> &Dataset {
        &self.rhs
    }
}
