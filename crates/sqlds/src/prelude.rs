//! Convenient imports for typical `sqlds` usage.
//!
//! ```ignore
//! use sqlds::prelude::*;
//! ```

pub use crate::{
    Dataset, Expression, Literal, Rendered, SqlBuilder, SqlError, SqlResult, Valuer, and, cols,
    from, func, i, literal, new_adapter, or,
};

#[cfg(feature = "derive")]
pub use crate::SqlEnum;
