//! Dotted SQL identifiers.
//!
//! An identifier is one to three segments (`schema.table.column`,
//! `table.column` or `column`). The last segment may be the wildcard `*`,
//! which is written unquoted; every other segment is quoted by the adapter.

/// One segment of an identifier path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentSegment {
    /// A name quoted by the adapter.
    Name(String),
    /// The unquoted `*` wildcard.
    Star,
}

impl IdentSegment {
    fn parse(part: &str) -> Self {
        if part == "*" {
            Self::Star
        } else {
            Self::Name(part.to_string())
        }
    }
}

/// A schema/table/column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpression {
    segments: Vec<IdentSegment>,
}

impl IdentifierExpression {
    /// Maximum number of segments.
    pub const MAX_SEGMENTS: usize = 3;

    /// Parse a dotted path.
    ///
    /// Splits from the right into at most three segments, so extra leading
    /// dots stay inside the schema name: `a.b.c.d` → `"a.b"."c"."d"`.
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<IdentSegment> = path
            .rsplitn(Self::MAX_SEGMENTS, '.')
            .map(IdentSegment::parse)
            .collect();
        segments.reverse();
        // Only the trailing segment may be a wildcard.
        let last = segments.len() - 1;
        for seg in &mut segments[..last] {
            if *seg == IdentSegment::Star {
                *seg = IdentSegment::Name("*".to_string());
            }
        }
        Self { segments }
    }

    /// Build from already separated parts; `None` parts are skipped.
    ///
    /// With every part `None` the identifier is empty and fails to render
    /// with a validation error.
    pub fn from_parts(schema: Option<&str>, table: Option<&str>, column: Option<&str>) -> Self {
        let mut segments = Vec::with_capacity(3);
        if let Some(s) = schema {
            segments.push(IdentSegment::Name(s.to_string()));
        }
        if let Some(t) = table {
            segments.push(IdentSegment::Name(t.to_string()));
        }
        if let Some(c) = column {
            segments.push(IdentSegment::parse(c));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[IdentSegment] {
        &self.segments
    }

    /// Check if the identifier ends in `*`.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(IdentSegment::Star))
    }

    /// Qualify with a column: `i("users").col("id")` → `"users"."id"`.
    pub fn col(mut self, column: &str) -> Self {
        if self.segments.len() < Self::MAX_SEGMENTS && !self.is_wildcard() {
            self.segments.push(IdentSegment::parse(column));
        }
        self
    }

    /// Qualify with `*`: `i("users").all()` → `"users".*`.
    pub fn all(self) -> Self {
        self.col("*")
    }
}

impl From<&str> for IdentifierExpression {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for IdentifierExpression {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}
