//! Dialect adapters.
//!
//! An [`Adapter`] supplies the engine-specific spelling the serializer needs:
//! identifier quoting, boolean and NULL keywords, and placeholder tokens.
//! Adapters are immutable and shared between datasets through `Arc`.
//!
//! Built-in adapters register themselves by name; third-party crates can add
//! their own with [`inventory::submit!`]:
//!
//! ```ignore
//! inventory::submit! {
//!     sqlds::AdapterRegistration { name: "sqlite", create: my_adapter }
//! }
//! let adapter = sqlds::new_adapter("sqlite")?;
//! ```

use crate::error::{SqlError, SqlResult};
use std::fmt;
use std::sync::Arc;

/// Dialect policy consumed by the serializer.
pub trait Adapter: fmt::Debug + Send + Sync {
    /// Registry name of the dialect.
    fn name(&self) -> &'static str;

    /// Character wrapped around identifier segments.
    fn quote_char(&self) -> char {
        '"'
    }

    /// Write one quoted identifier segment, doubling any embedded quote char.
    fn quote_identifier(&self, name: &str, out: &mut String) {
        let q = self.quote_char();
        out.push(q);
        for ch in name.chars() {
            if ch == q {
                out.push(q);
            }
            out.push(ch);
        }
        out.push(q);
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    fn null_literal(&self) -> &'static str {
        "NULL"
    }

    /// Placeholder for the bound value at 1-based `position`.
    fn placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }
}

/// Baseline dialect: double-quoted identifiers and `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAdapter;

impl Adapter for DefaultAdapter {
    fn name(&self) -> &'static str {
        "default"
    }
}

/// PostgreSQL: double-quoted identifiers and `$n` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAdapter;

impl Adapter for PostgresAdapter {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, position: usize) -> String {
        format!("${position}")
    }
}

/// MySQL: backtick-quoted identifiers and `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlAdapter;

impl Adapter for MysqlAdapter {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_char(&self) -> char {
        '`'
    }
}

/// Registration entry for looking up adapters by dialect name.
pub struct AdapterRegistration {
    /// Dialect name passed to [`new_adapter`].
    pub name: &'static str,
    /// Constructor for the adapter.
    pub create: fn() -> Arc<dyn Adapter>,
}

inventory::collect!(AdapterRegistration);

fn create_default() -> Arc<dyn Adapter> {
    Arc::new(DefaultAdapter)
}

fn create_postgres() -> Arc<dyn Adapter> {
    Arc::new(PostgresAdapter)
}

fn create_mysql() -> Arc<dyn Adapter> {
    Arc::new(MysqlAdapter)
}

inventory::submit! {
    AdapterRegistration { name: "default", create: create_default }
}

inventory::submit! {
    AdapterRegistration { name: "postgres", create: create_postgres }
}

inventory::submit! {
    AdapterRegistration { name: "mysql", create: create_mysql }
}

/// Look up a registered adapter by dialect name.
pub fn new_adapter(name: &str) -> SqlResult<Arc<dyn Adapter>> {
    inventory::iter::<AdapterRegistration>
        .into_iter()
        .find(|reg| reg.name == name)
        .map(|reg| (reg.create)())
        .ok_or_else(|| SqlError::validation(format!("unknown adapter: {name}")))
}

/// Names of every registered adapter, sorted.
pub fn adapter_names() -> Vec<&'static str> {
    let mut names: Vec<_> = inventory::iter::<AdapterRegistration>
        .into_iter()
        .map(|reg| reg.name)
        .collect();
    names.sort_unstable();
    names
}

/// The adapter assigned to new datasets.
pub fn default_adapter() -> Arc<dyn Adapter> {
    create_default()
}
