//! # sqlds
//!
//! A composable SQL statement builder.
//!
//! Expressions and queries are plain immutable values. Rendering walks the
//! expression tree once and produces either fully inlined SQL or SQL with
//! placeholders plus the ordered list of bound values.
//!
//! ## Features
//!
//! - **Typed expression tree**: identifiers, comparisons, AND/OR lists,
//!   functions, casts, ordering, set operations, sub-queries
//! - **Two render modes**: inline literals, or placeholders with bound values
//! - **Dialect adapters**: `default` (`?`), `postgres` (`$1`), `mysql` (backticks)
//! - **Persistent datasets**: every clause method returns a new dataset
//! - **Custom values**: implement [`Valuer`] or `#[derive(SqlEnum)]`
//!
//! ## Example
//!
//! ```ignore
//! use sqlds::{from, i, new_adapter};
//!
//! let ds = from("users")
//!     .with_adapter(new_adapter("postgres")?)
//!     .select(["id", "name"])
//!     .filter(i("status").eq("active"))
//!     .filter(i("role").eq(vec!["admin", "owner"]))
//!     .limit(10);
//!
//! let sql = ds.prepared_sql()?;
//! assert_eq!(
//!     sql.sql,
//!     r#"SELECT "id", "name" FROM "users" WHERE (("status" = $1) AND ("role" IN ($2, $3))) LIMIT $4"#
//! );
//! let rows = client.query(&sql.sql, &sql.params_ref()).await?;
//! ```
//!
//! The raw fragment constructor [`literal`] writes its SQL verbatim: it is the
//! one place where untrusted input must never go.

extern crate self as sqlds;

pub mod adapter;
pub mod builder;
pub mod dataset;
pub mod error;
pub mod expr;
pub mod literal;
pub mod log;
pub mod prelude;
pub mod value;

pub use adapter::{
    Adapter, AdapterRegistration, DefaultAdapter, MysqlAdapter, PostgresAdapter, adapter_names,
    default_adapter, new_adapter,
};
pub use builder::{Rendered, SqlBuilder};
pub use dataset::{Dataset, from};
pub use error::{BoxError, SqlError, SqlResult};
pub use expr::{
    AliasedExpression, BooleanExpression, BooleanOperation, CastExpression, ColumnList,
    CompoundExpression, CompoundType, Expression, ExpressionList, IdentSegment,
    IdentifierExpression, ListKind, LiteralExpression, NullsOrder, OrderedExpression,
    SortDirection, SqlFunctionExpression, UpdateExpression, and, avg, coalesce, cols, count,
    distinct, first, func, i, intersect, intersect_all, last, list, literal, max, min, or, sum,
    union, union_all,
};
pub use literal::{CustomValue, DynLiteral, Literal, RegexLiteral, SqlText, Valuer};
pub use value::Value;

// Re-export inventory for adapter registration from other crates
pub use inventory;

#[cfg(feature = "derive")]
pub use sqlds_derive::SqlEnum;
