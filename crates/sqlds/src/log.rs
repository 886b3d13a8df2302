//! Render logging.
//!
//! With the `tracing` feature, every statement rendered through a dataset
//! emits a `DEBUG` event on target `sqlds.sql`, and failed renders emit a
//! `WARN` event. Without the feature these hooks do nothing.
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("sqlds.sql=debug")
//!     .init();
//! ```

use crate::builder::Rendered;
use crate::error::SqlError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default byte limit for logged SQL text.
pub const DEFAULT_MAX_LOGGED_SQL: usize = 200;

// Zero disables truncation.
static MAX_LOGGED_SQL: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_LOGGED_SQL);

/// Set the byte limit for logged SQL. `None` logs statements in full.
pub fn set_max_logged_sql(len: Option<usize>) {
    MAX_LOGGED_SQL.store(len.unwrap_or(0), Ordering::Relaxed);
}

/// The current byte limit for logged SQL, if any.
pub fn max_logged_sql() -> Option<usize> {
    match MAX_LOGGED_SQL.load(Ordering::Relaxed) {
        0 => None,
        n => Some(n),
    }
}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn display_sql(sql: &str) -> std::borrow::Cow<'_, str> {
    match max_logged_sql() {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)).into(),
        _ => sql.into(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(statement: &'static str, out: &Rendered) {
    tracing::debug!(
        target: "sqlds.sql",
        statement,
        param_count = out.args.len(),
        sql = %display_sql(&out.sql),
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rendered(_statement: &'static str, _out: &Rendered) {}

#[cfg(feature = "tracing")]
pub(crate) fn render_failed(statement: &'static str, err: &SqlError) {
    tracing::warn!(target: "sqlds.sql", statement, error = %err, "failed to render SQL");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn render_failed(_statement: &'static str, _err: &SqlError) {}
