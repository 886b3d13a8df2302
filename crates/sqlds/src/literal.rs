//! The literal value space accepted by the serializer.
//!
//! Anything that can appear as an operand in an expression tree converts into a
//! [`Literal`] through `From`. Integers of every width collapse to `i64`,
//! `f32` is widened to `f64`, `Option<T>` becomes [`Literal::Null`] when absent,
//! and collections become [`Literal::Seq`].
//!
//! Two escape hatches exist for values the conversions cannot see statically:
//!
//! - [`Valuer`]: a user type that knows its own SQL text (see `#[derive(SqlEnum)]`).
//! - [`Literal::any`]: an opaque value resolved by type at render time. Types
//!   without a SQL form fail with [`SqlError::UnsupportedLiteralType`].

use crate::dataset::Dataset;
use crate::error::{BoxError, SqlError, SqlResult};
use crate::expr::Expression;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use regex::Regex;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Textual result of a custom value conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlText {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<String> for SqlText {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlText {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlText {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

/// A type that produces its own SQL text.
///
/// The result is rendered exactly like a string: quoted inline, bound as text
/// when parameterized. Byte output must be valid UTF-8.
pub trait Valuer: Send + Sync {
    fn value(&self) -> Result<SqlText, BoxError>;

    /// Name used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a [`Valuer`].
#[derive(Clone)]
pub struct CustomValue(Arc<dyn Valuer>);

impl CustomValue {
    pub fn new<V: Valuer + 'static>(value: V) -> Self {
        Self(Arc::new(value))
    }

    /// Run the conversion, turning bytes into text.
    pub fn to_text(&self) -> SqlResult<String> {
        let name = self.0.type_name();
        match self.0.value() {
            Ok(SqlText::Text(s)) => Ok(s),
            Ok(SqlText::Bytes(b)) => {
                String::from_utf8(b).map_err(|e| SqlError::valuer(name, e.to_string()))
            }
            Err(e) => Err(SqlError::valuer(name, e.to_string())),
        }
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomValue").field(&self.0.type_name()).finish()
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// An opaque value whose SQL form is decided at render time.
#[derive(Clone)]
pub struct DynLiteral {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl DynLiteral {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolve to a concrete literal by probing the known types.
    pub fn resolve(&self) -> SqlResult<Literal> {
        let any: &(dyn Any + Send + Sync) = &*self.value;

        macro_rules! probe {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(v) = any.downcast_ref::<$ty>() {
                        return Ok(Literal::from(v.clone()));
                    }
                )*
            };
        }

        probe!(Literal, Expression, Dataset, bool, String, &'static str);
        probe!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
        probe!(DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime, Regex);
        probe!(
            Option<bool>,
            Option<String>,
            Option<&'static str>,
            Option<i32>,
            Option<i64>,
            Option<u32>,
            Option<u64>,
            Option<f32>,
            Option<f64>,
            Option<DateTime<Utc>>,
        );
        probe!(
            Vec<bool>,
            Vec<String>,
            Vec<&'static str>,
            Vec<i32>,
            Vec<i64>,
            Vec<u32>,
            Vec<u64>,
            Vec<f32>,
            Vec<f64>,
            Vec<Literal>,
        );

        Err(SqlError::unsupported_named(self.type_name))
    }
}

impl fmt::Debug for DynLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynLiteral").field(&self.type_name).finish()
    }
}

impl PartialEq for DynLiteral {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

/// A compiled regular expression used as a pattern operand.
#[derive(Debug, Clone)]
pub struct RegexLiteral(pub Regex);

impl RegexLiteral {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for RegexLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

/// Any value the serializer knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL / absent
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned 64-bit input, checked against `i64` when rendered
    UInt(u64),
    Float(f64),
    Text(String),
    /// Selects the POSIX regex operators in LIKE comparisons
    Regex(RegexLiteral),
    Timestamp(DateTime<FixedOffset>),
    /// A finite ordered sequence, rendered as `(a, b, c)`
    Seq(Vec<Literal>),
    Custom(CustomValue),
    Any(DynLiteral),
    Expr(Expression),
}

impl Literal {
    /// Wrap an arbitrary value to be resolved by type at render time.
    pub fn any<T: Any + Send + Sync>(value: T) -> Self {
        Self::Any(DynLiteral::new(value))
    }

    /// Wrap a [`Valuer`].
    pub fn custom<V: Valuer + 'static>(value: V) -> Self {
        Self::Custom(CustomValue::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }
}

macro_rules! impl_int_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(v: $ty) -> Self {
                    Literal::Int(i64::from(v))
                }
            }
            impl From<&$ty> for Literal {
                fn from(v: &$ty) -> Self {
                    Literal::Int(i64::from(*v))
                }
            }
        )*
    };
}

impl_int_literal!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_wide_int_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(v: $ty) -> Self {
                    match i64::try_from(v) {
                        Ok(v) => Literal::Int(v),
                        Err(_) => Literal::UInt(v as u64),
                    }
                }
            }
            impl From<&$ty> for Literal {
                fn from(v: &$ty) -> Self {
                    Literal::from(*v)
                }
            }
        )*
    };
}

impl_wide_int_literal!(u64, usize);

impl From<isize> for Literal {
    fn from(v: isize) -> Self {
        Literal::Int(v as i64)
    }
}

impl From<&isize> for Literal {
    fn from(v: &isize) -> Self {
        Literal::Int(*v as i64)
    }
}

impl From<f32> for Literal {
    fn from(v: f32) -> Self {
        // Exact single-to-double widening; never re-parse the shortest decimal.
        Literal::Float(f64::from(v))
    }
}

impl From<&f32> for Literal {
    fn from(v: &f32) -> Self {
        Literal::Float(f64::from(*v))
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

impl From<&f64> for Literal {
    fn from(v: &f64) -> Self {
        Literal::Float(*v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl From<&bool> for Literal {
    fn from(v: &bool) -> Self {
        Literal::Bool(*v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Text(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Text(v)
    }
}

impl From<&String> for Literal {
    fn from(v: &String) -> Self {
        Literal::Text(v.clone())
    }
}

impl From<char> for Literal {
    fn from(v: char) -> Self {
        Literal::Text(v.to_string())
    }
}

impl From<Regex> for Literal {
    fn from(v: Regex) -> Self {
        Literal::Regex(RegexLiteral(v))
    }
}

impl From<&Regex> for Literal {
    fn from(v: &Regex) -> Self {
        Literal::Regex(RegexLiteral(v.clone()))
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Literal::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(v: DateTime<Utc>) -> Self {
        Literal::Timestamp(v.fixed_offset())
    }
}

impl From<&DateTime<Utc>> for Literal {
    fn from(v: &DateTime<Utc>) -> Self {
        Literal::Timestamp(v.fixed_offset())
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(v: NaiveDateTime) -> Self {
        Literal::Timestamp(v.and_utc().fixed_offset())
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Literal::Null
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Literal::Null,
        }
    }
}

impl<T: Into<Literal>> From<Box<T>> for Literal {
    fn from(v: Box<T>) -> Self {
        (*v).into()
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(v: Vec<T>) -> Self {
        Literal::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Literal>> From<&[T]> for Literal {
    fn from(v: &[T]) -> Self {
        Literal::Seq(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Literal>, const N: usize> From<[T; N]> for Literal {
    fn from(v: [T; N]) -> Self {
        Literal::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl From<CustomValue> for Literal {
    fn from(v: CustomValue) -> Self {
        Literal::Custom(v)
    }
}

impl From<DynLiteral> for Literal {
    fn from(v: DynLiteral) -> Self {
        Literal::Any(v)
    }
}

#[cfg(feature = "uuid")]
impl Valuer for uuid::Uuid {
    fn value(&self) -> Result<SqlText, BoxError> {
        Ok(SqlText::Text(self.hyphenated().to_string()))
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Literal {
    fn from(v: uuid::Uuid) -> Self {
        Literal::custom(v)
    }
}
