//! Output accumulator for a single render.
//!
//! [`SqlBuilder`] pairs the SQL text with the ordered list of bound values.
//! The mode is fixed at construction:
//!
//! - inline (`parameterized = false`): every value is written into the text
//!   and the argument list stays empty.
//! - parameterized (`parameterized = true`): each [`SqlBuilder::bind`] writes
//!   one placeholder token and pushes exactly one value, so the token count
//!   always matches `args().len()`.
//!
//! # Example
//!
//! ```ignore
//! use sqlds::{from, i, SqlBuilder};
//!
//! let ds = from("test");
//! let mut buf = SqlBuilder::new(true);
//! ds.literal(&mut buf, i("a").eq(1))?;
//! assert_eq!(buf.sql(), r#"("a" = ?)"#);
//! assert_eq!(buf.args().len(), 1);
//! ```

use crate::value::Value;

/// Append-only SQL text plus bound values.
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    sql: String,
    args: Vec<Value>,
    parameterized: bool,
}

impl SqlBuilder {
    /// Create an empty accumulator in the given mode.
    pub fn new(parameterized: bool) -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
            parameterized,
        }
    }

    /// Create an inline-mode accumulator.
    pub fn inline() -> Self {
        Self::new(false)
    }

    /// Create a parameterized-mode accumulator.
    pub fn parameterized() -> Self {
        Self::new(true)
    }

    /// Whether values are bound instead of inlined.
    pub fn is_parameterized(&self) -> bool {
        self.parameterized
    }

    /// Append raw SQL. Nothing is escaped.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Append a single character.
    pub fn push_char(&mut self, ch: char) -> &mut Self {
        self.sql.push(ch);
        self
    }

    /// Direct access to the text, for writers that produce into a `String`.
    pub(crate) fn text_mut(&mut self) -> &mut String {
        &mut self.sql
    }

    /// Append a placeholder token and bind its value.
    ///
    /// Only meaningful in parameterized mode; inline callers write the value's
    /// text with [`SqlBuilder::push`] instead.
    pub fn bind(&mut self, placeholder: &str, value: Value) -> &mut Self {
        debug_assert!(self.parameterized, "bind called on an inline builder");
        self.sql.push_str(placeholder);
        self.args.push(value);
        self
    }

    /// Clear text and arguments, keeping the allocations and the mode.
    pub fn reset(&mut self) -> &mut Self {
        self.sql.clear();
        self.args.clear();
        self
    }

    /// The text written so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The values bound so far, in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Read-only view of text and arguments.
    pub fn render(&self) -> (&str, &[Value]) {
        (&self.sql, &self.args)
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Consume the accumulator.
    pub fn finish(self) -> Rendered {
        Rendered {
            sql: self.sql,
            args: self.args,
        }
    }
}

impl std::fmt::Display for SqlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}

/// A finished render: SQL text and, in parameterized mode, its arguments.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Rendered {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Rendered {
    /// Split into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Get arguments as references for tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}
