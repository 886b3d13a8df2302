//! Comparison expressions: `lhs op rhs`, always rendered in parentheses.

use super::Expression;
use crate::literal::Literal;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    Eq,
    Neq,
    Is,
    IsNot,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    RegexpLike,
    RegexpNotLike,
    RegexpILike,
    RegexpNotILike,
}

impl BooleanOperation {
    /// SQL spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::RegexpLike => "~",
            Self::RegexpNotLike => "!~",
            Self::RegexpILike => "~*",
            Self::RegexpNotILike => "!~*",
        }
    }

    /// The operator actually written for a given right-hand side.
    ///
    /// - `=`/`!=` against a boolean or NULL become `IS`/`IS NOT`
    /// - `=`/`!=` against a sequence become `IN`/`NOT IN`
    /// - LIKE-family operators against a regex become `~`, `!~`, `~*`, `!~*`
    pub fn resolve(self, rhs: &Literal) -> Self {
        match (self, rhs) {
            (Self::Eq, Literal::Bool(_) | Literal::Null) => Self::Is,
            (Self::Neq, Literal::Bool(_) | Literal::Null) => Self::IsNot,
            (Self::Eq, Literal::Seq(_)) => Self::In,
            (Self::Neq, Literal::Seq(_)) => Self::NotIn,
            (Self::Like, Literal::Regex(_)) => Self::RegexpLike,
            (Self::NotLike, Literal::Regex(_)) => Self::RegexpNotLike,
            (Self::ILike, Literal::Regex(_)) => Self::RegexpILike,
            (Self::NotILike, Literal::Regex(_)) => Self::RegexpNotILike,
            (op, _) => op,
        }
    }
}

impl std::fmt::Display for BooleanOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(lhs op rhs)`
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpression {
    op: BooleanOperation,
    lhs: Box<Expression>,
    rhs: Box<Literal>,
}

impl BooleanExpression {
    pub fn new(op: BooleanOperation, lhs: impl Into<Expression>, rhs: impl Into<Literal>) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    /// The operator as constructed, before any rewrite.
    pub fn op(&self) -> BooleanOperation {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Literal {
        &self.rhs
    }
}
