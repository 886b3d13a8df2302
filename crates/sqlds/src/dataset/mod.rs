//! Dataset: a persistent query value bound to a dialect adapter.
//!
//! A [`Dataset`] owns the clauses of a statement and the [`Adapter`] used to
//! render them. Every clause method takes `&self` and returns a new dataset;
//! the receiver is never modified. Clauses are shared behind an `Arc` and
//! copied only when a derived dataset changes them.
//!
//! # Example
//!
//! ```ignore
//! use sqlds::{from, i};
//!
//! let ds = from("users")
//!     .select(["id", "name"])
//!     .filter(i("active").eq(true))
//!     .order([i("id").desc()])
//!     .limit(10);
//!
//! let sql = ds.to_sql()?;
//! assert_eq!(
//!     sql.sql,
//!     r#"SELECT "id", "name" FROM "users" WHERE ("active" IS TRUE) ORDER BY "id" DESC LIMIT 10"#
//! );
//! ```

mod literal;
mod statement;


use crate::adapter::{Adapter, default_adapter};
use crate::expr::{
    ColumnList, CompoundExpression, CompoundType, Expression, IdentifierExpression,
    OrderedExpression,
};
use crate::literal::Literal;
use std::sync::Arc;

/// Statement clauses. Cloned only on write.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Clauses {
    pub(crate) from: ColumnList,
    pub(crate) select: ColumnList,
    pub(crate) distinct: bool,
    pub(crate) filter: Vec<Literal>,
    pub(crate) group_by: ColumnList,
    pub(crate) having: Vec<Literal>,
    pub(crate) order: ColumnList,
    pub(crate) limit: Option<Literal>,
    pub(crate) offset: Option<Literal>,
    pub(crate) compounds: Vec<CompoundExpression>,
    pub(crate) alias: Option<String>,
}

/// An immutable statement description plus the adapter that renders it.
#[derive(Debug, Clone)]
pub struct Dataset {
    adapter: Arc<dyn Adapter>,
    clauses: Arc<Clauses>,
    prepared: bool,
}

/// Start a dataset selecting from `table`.
///
/// Strings name a table (`"schema.table"` is split on dots); a dataset
/// becomes a sub-query source.
pub fn from(table: impl Into<Expression>) -> Dataset {
    Dataset::new(default_adapter(), table)
}

impl Dataset {
    pub fn new(adapter: Arc<dyn Adapter>, table: impl Into<Expression>) -> Self {
        Self {
            adapter,
            clauses: Arc::new(Clauses {
                from: ColumnList::new([table]),
                ..Clauses::default()
            }),
            prepared: false,
        }
    }

    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.adapter
    }

    /// Replace the adapter in place.
    pub fn set_adapter(&mut self, adapter: Arc<dyn Adapter>) {
        self.adapter = adapter;
    }

    /// Copy of this dataset rendered with another adapter.
    pub fn with_adapter(&self, adapter: Arc<dyn Adapter>) -> Self {
        Self {
            adapter,
            ..self.clone()
        }
    }

    /// Choose the default render mode of [`Dataset::to_sql`].
    pub fn prepared(&self, prepared: bool) -> Self {
        Self {
            prepared,
            ..self.clone()
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// The dataset as an expression node, for embedding as a sub-query.
    pub fn expression(&self) -> Expression {
        Expression::Dataset(Box::new(self.clone()))
    }

    /// Alias used when this dataset is nested: `(SELECT ...) AS "alias"`.
    pub fn as_(&self, alias: impl Into<String>) -> Self {
        self.update(|c| c.alias = Some(alias.into()))
    }

    pub fn alias(&self) -> Option<&str> {
        self.clauses.alias.as_deref()
    }

    /// Replace the selected columns. An empty list selects `*`.
    pub fn select<I, E>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let columns = ColumnList::new(columns);
        self.update(|c| c.select = columns)
    }

    /// Add columns to the current selection.
    pub fn select_append<I, E>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let columns = ColumnList::new(columns);
        self.update(|c| c.select = std::mem::take(&mut c.select).append(columns))
    }

    /// `SELECT DISTINCT`
    pub fn distinct(&self) -> Self {
        self.update(|c| c.distinct = true)
    }

    /// Replace the source tables.
    pub fn from<I, E>(&self, tables: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let tables = ColumnList::new(tables);
        self.update(|c| c.from = tables)
    }

    /// Add a WHERE condition; conditions are joined with AND.
    pub fn filter(&self, condition: impl Into<Literal>) -> Self {
        let condition = condition.into();
        self.update(|c| c.filter.push(condition))
    }

    /// Alias of [`Dataset::filter`].
    pub fn where_(&self, condition: impl Into<Literal>) -> Self {
        self.filter(condition)
    }

    /// Drop every WHERE condition.
    pub fn unfiltered(&self) -> Self {
        self.update(|c| c.filter.clear())
    }

    pub fn group_by<I, E>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let columns = ColumnList::new(columns);
        self.update(|c| c.group_by = columns)
    }

    /// Add a HAVING condition; conditions are joined with AND.
    pub fn having(&self, condition: impl Into<Literal>) -> Self {
        let condition = condition.into();
        self.update(|c| c.having.push(condition))
    }

    /// Replace the ordering.
    pub fn order<I>(&self, order: I) -> Self
    where
        I: IntoIterator<Item = OrderedExpression>,
    {
        let order = ColumnList::new(order);
        self.update(|c| c.order = order)
    }

    /// Add to the current ordering.
    pub fn order_append<I>(&self, order: I) -> Self
    where
        I: IntoIterator<Item = OrderedExpression>,
    {
        let order = ColumnList::new(order);
        self.update(|c| c.order = std::mem::take(&mut c.order).append(order))
    }

    pub fn unordered(&self) -> Self {
        self.update(|c| c.order = ColumnList::default())
    }

    /// `LIMIT n`; zero removes the limit.
    pub fn limit(&self, limit: u64) -> Self {
        self.update(|c| c.limit = (limit > 0).then(|| Literal::from(limit)))
    }

    /// `OFFSET n`; zero removes the offset.
    pub fn offset(&self, offset: u64) -> Self {
        self.update(|c| c.offset = (offset > 0).then(|| Literal::from(offset)))
    }

    /// ` UNION (<other>)`
    pub fn union(&self, other: Dataset) -> Self {
        self.compound(CompoundType::Union, other)
    }

    /// ` UNION ALL (<other>)`
    pub fn union_all(&self, other: Dataset) -> Self {
        self.compound(CompoundType::UnionAll, other)
    }

    /// ` INTERSECT (<other>)`
    pub fn intersect(&self, other: Dataset) -> Self {
        self.compound(CompoundType::Intersect, other)
    }

    /// ` INTERSECT ALL (<other>)`
    pub fn intersect_all(&self, other: Dataset) -> Self {
        self.compound(CompoundType::IntersectAll, other)
    }

    /// Column reference qualified by this dataset's alias, or by its first
    /// source table when it has no alias.
    pub fn col(&self, column: &str) -> IdentifierExpression {
        match (&self.clauses.alias, self.clauses.from.columns().first()) {
            (Some(alias), _) => IdentifierExpression::from_parts(None, Some(alias), Some(column)),
            (None, Some(Expression::Identifier(table))) => table.clone().col(column),
            _ => IdentifierExpression::parse(column),
        }
    }

    fn compound(&self, kind: CompoundType, other: Dataset) -> Self {
        let compound = CompoundExpression::new(kind, other);
        self.update(|c| c.compounds.push(compound))
    }

    fn update(&self, f: impl FnOnce(&mut Clauses)) -> Self {
        let mut next = self.clone();
        f(Arc::make_mut(&mut next.clauses));
        next
    }

    pub(crate) fn clauses(&self) -> &Clauses {
        &self.clauses
    }
}

/// Datasets are equal when they would render identically: same dialect,
/// same clauses, same default mode.
impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.adapter.name() == other.adapter.name()
            && self.prepared == other.prepared
            && self.clauses == other.clauses
    }
}
