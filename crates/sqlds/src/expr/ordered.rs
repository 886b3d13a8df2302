//! ORDER BY items and SET assignments.

use super::{Expression, IdentifierExpression};
use crate::literal::Literal;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Placement of NULLs in an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// `<expr> ASC|DESC [NULLS FIRST|LAST]`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedExpression {
    expr: Box<Expression>,
    direction: SortDirection,
    nulls: Option<NullsOrder>,
}

impl OrderedExpression {
    pub fn new(expr: impl Into<Expression>, direction: SortDirection) -> Self {
        Self {
            expr: Box::new(expr.into()),
            direction,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn nulls(&self) -> Option<NullsOrder> {
        self.nulls
    }
}

/// `"col"=<value>`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    col: IdentifierExpression,
    val: Box<Literal>,
}

impl UpdateExpression {
    pub fn new(col: impl Into<IdentifierExpression>, val: impl Into<Literal>) -> Self {
        Self {
            col: col.into(),
            val: Box::new(val.into()),
        }
    }

    pub fn col(&self) -> &IdentifierExpression {
        &self.col
    }

    pub fn val(&self) -> &Literal {
        &self.val
    }
}
