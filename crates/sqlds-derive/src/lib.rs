//! Derive macros for sqlds
//!
//! Provides `#[derive(SqlEnum)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod sql_enum;

/// Derive `sqlds::Valuer` and `Into<sqlds::Literal>` for a unit-only enum.
///
/// Each variant renders as a SQL string: quoted inline, bound as text when
/// parameterized.
///
/// # Example
///
/// ```ignore
/// use sqlds::{SqlEnum, from, i};
///
/// #[derive(SqlEnum)]
/// enum Status {
///     Active,
///     OnHold,
///     #[sqlds(rename = "gone")]
///     Deleted,
/// }
///
/// let sql = from("users").filter(i("status").eq(Status::OnHold)).to_sql()?;
/// // SELECT * FROM "users" WHERE ("status" = 'on_hold')
/// ```
///
/// # Attributes
///
/// - `#[sqlds(rename_all = "...")]` on the enum - `snake_case` (default),
///   `SCREAMING_SNAKE_CASE`, `kebab-case`, `camelCase`, `PascalCase`,
///   `lowercase`, `UPPERCASE`
/// - `#[sqlds(rename = "name")]` on a variant - Use an explicit SQL value
///
/// # Generated
///
/// - `fn as_sql_str(&self) -> &'static str`
/// - `impl sqlds::Valuer`
/// - `impl From<T> for sqlds::Literal` and `impl From<&T> for sqlds::Literal`
#[proc_macro_derive(SqlEnum, attributes(sqlds))]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    sql_enum::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
