//! Error types for sqlds

use thiserror::Error;

/// Result type alias for sqlds operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Boxed error returned by [`Valuer`](crate::Valuer) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types for rendering SQL
#[derive(Debug, Error)]
pub enum SqlError {
    /// A value that has no SQL literal form
    #[error("Unsupported literal type: {type_name}")]
    UnsupportedLiteralType { type_name: String },

    /// A custom value failed to produce its SQL representation
    #[error("Value conversion failed for {type_name}: {message}")]
    Valuer { type_name: String, message: String },

    /// An unsigned integer that does not fit in a signed 64-bit integer
    #[error("Integer out of range for BIGINT: {0}")]
    IntegerOverflow(u64),

    /// Malformed builder input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl SqlError {
    /// Create an unsupported literal error for `T`
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::unsupported_named(std::any::type_name::<T>())
    }

    /// Create an unsupported literal error from a type name
    pub fn unsupported_named(type_name: impl Into<String>) -> Self {
        Self::UnsupportedLiteralType {
            type_name: type_name.into(),
        }
    }

    /// Create a value conversion error
    pub fn valuer(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Valuer {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if the value itself could not be rendered as a literal.
    ///
    /// Failed custom conversions belong to the same class as unsupported types.
    pub fn is_unsupported_literal(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLiteralType { .. } | Self::Valuer { .. } | Self::IntegerOverflow(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
