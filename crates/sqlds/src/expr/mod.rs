//! Expression model.
//!
//! This module provides the closed set of expression nodes the serializer
//! understands. Every node is a plain immutable value; nodes nest other nodes
//! (or arbitrary [`Literal`]s) but never point back at a parent.
//!
//! # Example
//!
//! ```ignore
//! use sqlds::{and, i, literal};
//!
//! let filter = and(vec![
//!     i("a").eq("b").into(),
//!     i("c").neq(1).into(),
//!     i("d").eq(literal("NOW()", vec![])).into(),
//! ]);
//! // (("a" = 'b') AND ("c" != 1) AND ("d" = NOW()))
//! ```

mod boolean;
mod func;
mod ident;
mod list;
mod ordered;

pub use boolean::{BooleanExpression, BooleanOperation};
pub use func::{
    CastExpression, SqlFunctionExpression, avg, coalesce, count, distinct, first, func, last, max,
    min, sum,
};
pub use ident::{IdentSegment, IdentifierExpression};
pub use list::{
    AliasedExpression, ColumnList, CompoundExpression, CompoundType, ExpressionList, ListKind,
    LiteralExpression,
};
pub use ordered::{NullsOrder, OrderedExpression, SortDirection, UpdateExpression};

use crate::dataset::Dataset;
use crate::literal::Literal;

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(IdentifierExpression),
    Aliased(AliasedExpression),
    Boolean(BooleanExpression),
    Ordered(OrderedExpression),
    Update(UpdateExpression),
    Function(SqlFunctionExpression),
    Cast(CastExpression),
    Compound(CompoundExpression),
    ColumnList(ColumnList),
    List(ExpressionList),
    Literal(LiteralExpression),
    /// A nested dataset, rendered as a parenthesized sub-query.
    Dataset(Box<Dataset>),
}

macro_rules! impl_node_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(v: $ty) -> Self {
                    Expression::$variant(v)
                }
            }

            impl From<$ty> for Literal {
                fn from(v: $ty) -> Self {
                    Literal::Expr(Expression::$variant(v))
                }
            }
        )*
    };
}

impl_node_conversions! {
    Identifier => IdentifierExpression,
    Aliased => AliasedExpression,
    Boolean => BooleanExpression,
    Ordered => OrderedExpression,
    Update => UpdateExpression,
    Function => SqlFunctionExpression,
    Cast => CastExpression,
    Compound => CompoundExpression,
    ColumnList => ColumnList,
    List => ExpressionList,
    Literal => LiteralExpression,
}

impl From<Dataset> for Expression {
    fn from(v: Dataset) -> Self {
        Expression::Dataset(Box::new(v))
    }
}

impl From<Dataset> for Literal {
    fn from(v: Dataset) -> Self {
        Literal::Expr(Expression::Dataset(Box::new(v)))
    }
}

impl From<Expression> for Literal {
    fn from(v: Expression) -> Self {
        Literal::Expr(v)
    }
}

/// Strings in column position name an identifier.
impl From<&str> for Expression {
    fn from(path: &str) -> Self {
        Expression::Identifier(IdentifierExpression::parse(path))
    }
}

impl From<String> for Expression {
    fn from(path: String) -> Self {
        Expression::Identifier(IdentifierExpression::parse(&path))
    }
}

/// Identifier from a dotted path: `i("schema.table.column")`, `i("table.*")`.
pub fn i(path: &str) -> IdentifierExpression {
    IdentifierExpression::parse(path)
}

/// A raw SQL fragment with `?` substitution markers.
///
/// The fragment is written verbatim: never pass untrusted input as `sql`.
pub fn literal(sql: impl Into<String>, args: Vec<Literal>) -> LiteralExpression {
    LiteralExpression::new(sql, args)
}

/// All conditions must hold: `(a AND b)`.
pub fn and(items: Vec<Literal>) -> ExpressionList {
    ExpressionList::new(ListKind::And, items)
}

/// At least one condition must hold: `(a OR b)`.
pub fn or(items: Vec<Literal>) -> ExpressionList {
    ExpressionList::new(ListKind::Or, items)
}

/// A comma-joined list of values or nodes.
pub fn list(items: Vec<Literal>) -> ExpressionList {
    ExpressionList::new(ListKind::Comma, items)
}

/// A comma-joined column list; strings become identifiers.
pub fn cols<I, E>(columns: I) -> ColumnList
where
    I: IntoIterator<Item = E>,
    E: Into<Expression>,
{
    ColumnList::new(columns)
}

/// ` UNION (<dataset>)`
pub fn union(ds: Dataset) -> CompoundExpression {
    CompoundExpression::new(CompoundType::Union, ds)
}

/// ` UNION ALL (<dataset>)`
pub fn union_all(ds: Dataset) -> CompoundExpression {
    CompoundExpression::new(CompoundType::UnionAll, ds)
}

/// ` INTERSECT (<dataset>)`
pub fn intersect(ds: Dataset) -> CompoundExpression {
    CompoundExpression::new(CompoundType::Intersect, ds)
}

/// ` INTERSECT ALL (<dataset>)`
pub fn intersect_all(ds: Dataset) -> CompoundExpression {
    CompoundExpression::new(CompoundType::IntersectAll, ds)
}

// Comparison, ordering, casting and aliasing for nodes usable as an operand.
macro_rules! impl_operand_methods {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(clippy::should_implement_trait)]
            impl $ty {
                /// `(self = v)`; booleans and NULL use `IS`, sequences use `IN`.
                pub fn eq(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Eq, self, v)
                }

                /// `(self != v)`; booleans and NULL use `IS NOT`, sequences use `NOT IN`.
                pub fn neq(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Neq, self, v)
                }

                /// `(self IS v)`
                pub fn is(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Is, self, v)
                }

                /// `(self IS NOT v)`
                pub fn is_not(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::IsNot, self, v)
                }

                pub fn is_null(self) -> BooleanExpression {
                    self.is(Literal::Null)
                }

                pub fn is_not_null(self) -> BooleanExpression {
                    self.is_not(Literal::Null)
                }

                pub fn is_true(self) -> BooleanExpression {
                    self.is(true)
                }

                pub fn is_false(self) -> BooleanExpression {
                    self.is(false)
                }

                pub fn gt(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Gt, self, v)
                }

                pub fn gte(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Gte, self, v)
                }

                pub fn lt(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Lt, self, v)
                }

                pub fn lte(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Lte, self, v)
                }

                /// `(self IN (...))`; accepts a sequence or a dataset.
                pub fn in_(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::In, self, v)
                }

                pub fn not_in(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::NotIn, self, v)
                }

                /// `(self LIKE v)`, or `~` when `v` is a regex.
                pub fn like(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::Like, self, v)
                }

                /// `(self NOT LIKE v)`, or `!~` when `v` is a regex.
                pub fn not_like(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::NotLike, self, v)
                }

                /// `(self ILIKE v)`, or `~*` when `v` is a regex.
                pub fn ilike(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::ILike, self, v)
                }

                /// `(self NOT ILIKE v)`, or `!~*` when `v` is a regex.
                pub fn not_ilike(self, v: impl Into<Literal>) -> BooleanExpression {
                    BooleanExpression::new(BooleanOperation::NotILike, self, v)
                }

                pub fn asc(self) -> OrderedExpression {
                    OrderedExpression::new(self, SortDirection::Asc)
                }

                pub fn desc(self) -> OrderedExpression {
                    OrderedExpression::new(self, SortDirection::Desc)
                }

                /// `CAST(self AS type_name)`
                pub fn cast(self, type_name: impl Into<String>) -> CastExpression {
                    CastExpression::new(self, type_name)
                }

                /// `self AS "alias"`
                pub fn as_(self, alias: impl Into<String>) -> AliasedExpression {
                    AliasedExpression::new(self, alias)
                }
            }
        )*
    };
}

impl_operand_methods!(
    IdentifierExpression,
    LiteralExpression,
    SqlFunctionExpression,
    CastExpression,
);

impl IdentifierExpression {
    /// `"col"=v` for UPDATE statements.
    pub fn set(self, v: impl Into<Literal>) -> UpdateExpression {
        UpdateExpression::new(self, v)
    }
}
