//! Bound parameter values.
//!
//! A [`Value`] is what ends up in the argument list of a prepared statement.
//! Booleans never appear here: they are always rendered as keywords.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A scalar bound to a placeholder in parameterized mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Any integral input, normalized to 64 bits
    Int(i64),
    /// Any floating input, widened to 64 bits
    Float(f64),
    /// Text, including the output of custom value conversions
    Text(String),
    /// A timestamp with its original offset
    Timestamp(DateTime<FixedOffset>),
}

impl Value {
    /// Returns `true` if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(v)
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use super::Value;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type};

    // Integers and floats adapt to the column width the server asks for.
    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Int(v) => match *ty {
                    Type::INT2 => i16::try_from(*v)?.to_sql(ty, out),
                    Type::INT4 => i32::try_from(*v)?.to_sql(ty, out),
                    Type::INT8 => v.to_sql(ty, out),
                    _ => Err(format!("cannot bind integer to {ty}").into()),
                },
                Value::Float(v) => match *ty {
                    Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                    Type::FLOAT8 => v.to_sql(ty, out),
                    _ => Err(format!("cannot bind float to {ty}").into()),
                },
                Value::Text(v) => v.to_sql(ty, out),
                Value::Timestamp(v) => match *ty {
                    Type::TIMESTAMP => v.naive_utc().to_sql(ty, out),
                    _ => v.to_sql(ty, out),
                },
            }
        }

        fn accepts(ty: &Type) -> bool {
            matches!(
                *ty,
                Type::INT2
                    | Type::INT4
                    | Type::INT8
                    | Type::FLOAT4
                    | Type::FLOAT8
                    | Type::TEXT
                    | Type::VARCHAR
                    | Type::BPCHAR
                    | Type::NAME
                    | Type::UNKNOWN
                    | Type::TIMESTAMP
                    | Type::TIMESTAMPTZ
            )
        }

        tokio_postgres::types::to_sql_checked!();
    }

}
