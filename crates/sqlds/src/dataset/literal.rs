//! Literal serializer.
//!
//! [`Dataset::literal`] is the single recursive entry point that turns a
//! [`Literal`] into SQL text inside a [`SqlBuilder`]. Scalars are either
//! written inline or bound as placeholders depending on the builder mode;
//! booleans are always written as keywords. Expression nodes recurse back
//! into the serializer for every operand.

use super::Dataset;
use crate::builder::SqlBuilder;
use crate::error::{SqlError, SqlResult};
use crate::expr::{
    AliasedExpression, BooleanExpression, CastExpression, ColumnList, CompoundExpression,
    Expression, ExpressionList, IdentSegment, IdentifierExpression, ListKind, LiteralExpression,
    OrderedExpression, SqlFunctionExpression, UpdateExpression,
};
use crate::literal::Literal;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, Timelike};
use std::sync::Arc;

impl Dataset {
    /// Serialize `value` into `buf` using this dataset's adapter.
    ///
    /// On error the builder holds partial output and must be reset before
    /// reuse.
    ///
    /// ```ignore
    /// let ds = sqlds::from("test");
    /// let mut buf = sqlds::SqlBuilder::inline();
    /// ds.literal(&mut buf, "hello'")?;
    /// assert_eq!(buf.sql(), "'hello'''");
    /// ```
    pub fn literal(&self, buf: &mut SqlBuilder, value: impl Into<Literal>) -> SqlResult<()> {
        self.write_literal(buf, &value.into())
    }

    pub(crate) fn write_literal(&self, buf: &mut SqlBuilder, value: &Literal) -> SqlResult<()> {
        match value {
            Literal::Null => {
                self.write_null(buf);
                Ok(())
            }
            Literal::Bool(v) => {
                buf.push(self.adapter.boolean_literal(*v));
                Ok(())
            }
            Literal::Int(v) => {
                self.write_int(buf, *v);
                Ok(())
            }
            Literal::UInt(v) => {
                let v = i64::try_from(*v).map_err(|_| SqlError::IntegerOverflow(*v))?;
                self.write_int(buf, v);
                Ok(())
            }
            Literal::Float(v) => {
                self.write_float(buf, *v);
                Ok(())
            }
            Literal::Text(v) => {
                self.write_string(buf, v);
                Ok(())
            }
            Literal::Regex(re) => {
                self.write_string(buf, re.as_str());
                Ok(())
            }
            Literal::Timestamp(ts) => {
                self.write_timestamp(buf, ts);
                Ok(())
            }
            Literal::Seq(items) => self.write_seq(buf, items),
            Literal::Custom(v) => {
                let text = v.to_text()?;
                self.write_string(buf, &text);
                Ok(())
            }
            Literal::Any(v) => self.write_literal(buf, &v.resolve()?),
            Literal::Expr(expr) => self.write_expression(buf, expr),
        }
    }

    fn bind(&self, buf: &mut SqlBuilder, value: Value) {
        let token = self.adapter.placeholder(buf.args().len() + 1);
        buf.bind(&token, value);
    }

    fn write_null(&self, buf: &mut SqlBuilder) {
        if buf.is_parameterized() {
            self.bind(buf, Value::Null);
        } else {
            buf.push(self.adapter.null_literal());
        }
    }

    fn write_int(&self, buf: &mut SqlBuilder, v: i64) {
        if buf.is_parameterized() {
            self.bind(buf, Value::Int(v));
        } else {
            buf.push(&v.to_string());
        }
    }

    fn write_float(&self, buf: &mut SqlBuilder, v: f64) {
        if buf.is_parameterized() {
            self.bind(buf, Value::Float(v));
        } else if v.is_nan() {
            buf.push("'NaN'");
        } else if v.is_infinite() {
            buf.push(if v > 0.0 { "'Infinity'" } else { "'-Infinity'" });
        } else {
            // Display is the shortest text that parses back to the same f64.
            buf.push(&v.to_string());
        }
    }

    fn write_string(&self, buf: &mut SqlBuilder, v: &str) {
        if buf.is_parameterized() {
            self.bind(buf, Value::Text(v.to_string()));
            return;
        }
        let out = buf.text_mut();
        out.reserve(v.len() + 2);
        out.push('\'');
        for ch in v.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
    }

    fn write_timestamp(&self, buf: &mut SqlBuilder, ts: &DateTime<FixedOffset>) {
        if buf.is_parameterized() {
            self.bind(buf, Value::Timestamp(*ts));
        } else {
            buf.push_char('\'')
                .push(&format_timestamp(ts))
                .push_char('\'');
        }
    }

    fn write_seq(&self, buf: &mut SqlBuilder, items: &[Literal]) -> SqlResult<()> {
        buf.push_char('(');
        self.write_joined(buf, items, ", ")?;
        buf.push_char(')');
        Ok(())
    }

    pub(super) fn write_joined(
        &self,
        buf: &mut SqlBuilder,
        items: &[Literal],
        sep: &str,
    ) -> SqlResult<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                buf.push(sep);
            }
            self.write_literal(buf, item)?;
        }
        Ok(())
    }

    pub(crate) fn write_expression(
        &self,
        buf: &mut SqlBuilder,
        expr: &Expression,
    ) -> SqlResult<()> {
        match expr {
            Expression::Identifier(e) => self.write_identifier(buf, e),
            Expression::Aliased(e) => self.write_aliased(buf, e),
            Expression::Boolean(e) => self.write_boolean(buf, e),
            Expression::Ordered(e) => self.write_ordered(buf, e),
            Expression::Update(e) => self.write_update(buf, e),
            Expression::Function(e) => self.write_function(buf, e),
            Expression::Cast(e) => self.write_cast(buf, e),
            Expression::Compound(e) => self.write_compound(buf, e),
            Expression::ColumnList(e) => self.write_columns(buf, e),
            Expression::List(e) => self.write_list(buf, e),
            Expression::Literal(e) => self.write_raw(buf, e),
            Expression::Dataset(ds) => self.write_subquery(buf, ds),
        }
    }

    pub(crate) fn write_identifier(
        &self,
        buf: &mut SqlBuilder,
        ident: &IdentifierExpression,
    ) -> SqlResult<()> {
        if ident.segments().is_empty() {
            return Err(SqlError::validation("identifier has no segments"));
        }
        let adapter = &*self.adapter;
        let out = buf.text_mut();
        for (i, segment) in ident.segments().iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match segment {
                IdentSegment::Name(name) => adapter.quote_identifier(name, out),
                IdentSegment::Star => out.push('*'),
            }
        }
        Ok(())
    }

    fn write_alias(&self, buf: &mut SqlBuilder, alias: &str) -> SqlResult<()> {
        if alias.is_empty() {
            return Err(SqlError::validation("alias cannot be empty"));
        }
        buf.push(" AS ");
        self.adapter.quote_identifier(alias, buf.text_mut());
        Ok(())
    }

    fn write_aliased(&self, buf: &mut SqlBuilder, e: &AliasedExpression) -> SqlResult<()> {
        self.write_expression(buf, e.expr())?;
        self.write_alias(buf, e.alias())
    }

    fn write_boolean(&self, buf: &mut SqlBuilder, e: &BooleanExpression) -> SqlResult<()> {
        // Opaque operands are resolved first so the operator rewrite sees
        // their real kind.
        let resolved;
        let rhs = match e.rhs() {
            Literal::Any(v) => {
                resolved = v.resolve()?;
                &resolved
            }
            other => other,
        };
        let op = e.op().resolve(rhs);

        buf.push_char('(');
        self.write_expression(buf, e.lhs())?;
        buf.push_char(' ').push(op.as_str()).push_char(' ');
        self.write_literal(buf, rhs)?;
        buf.push_char(')');
        Ok(())
    }

    fn write_ordered(&self, buf: &mut SqlBuilder, e: &OrderedExpression) -> SqlResult<()> {
        self.write_expression(buf, e.expr())?;
        buf.push_char(' ').push(e.direction().as_str());
        if let Some(nulls) = e.nulls() {
            buf.push_char(' ').push(nulls.as_str());
        }
        Ok(())
    }

    fn write_update(&self, buf: &mut SqlBuilder, e: &UpdateExpression) -> SqlResult<()> {
        self.write_identifier(buf, e.col())?;
        buf.push_char('=');
        self.write_literal(buf, e.val())
    }

    fn write_function(&self, buf: &mut SqlBuilder, e: &SqlFunctionExpression) -> SqlResult<()> {
        buf.push(e.name()).push_char('(');
        self.write_joined(buf, e.args(), ", ")?;
        buf.push_char(')');
        Ok(())
    }

    fn write_cast(&self, buf: &mut SqlBuilder, e: &CastExpression) -> SqlResult<()> {
        buf.push("CAST(");
        self.write_expression(buf, e.expr())?;
        buf.push(" AS ").push(e.type_name()).push_char(')');
        Ok(())
    }

    pub(super) fn write_compound(
        &self,
        buf: &mut SqlBuilder,
        e: &CompoundExpression,
    ) -> SqlResult<()> {
        buf.push_char(' ').push(e.kind().as_str()).push(" (");
        self.nested(e.rhs()).write_select(buf)?;
        buf.push_char(')');
        Ok(())
    }

    pub(crate) fn write_columns(&self, buf: &mut SqlBuilder, cols: &ColumnList) -> SqlResult<()> {
        for (i, col) in cols.columns().iter().enumerate() {
            if i > 0 {
                buf.push(", ");
            }
            self.write_expression(buf, col)?;
        }
        Ok(())
    }

    pub(crate) fn write_list(&self, buf: &mut SqlBuilder, list: &ExpressionList) -> SqlResult<()> {
        match (list.kind(), list.items()) {
            (ListKind::Comma, items) => self.write_joined(buf, items, ", "),
            (_, []) => Ok(()),
            (_, [single]) => self.write_literal(buf, single),
            (kind, items) => {
                buf.push_char('(');
                self.write_joined(buf, items, kind.separator())?;
                buf.push_char(')');
                Ok(())
            }
        }
    }

    fn write_raw(&self, buf: &mut SqlBuilder, e: &LiteralExpression) -> SqlResult<()> {
        let mut args = e.args().iter();
        let mut rest = e.sql();
        while let Some(pos) = rest.find('?') {
            buf.push(&rest[..pos]);
            match args.next() {
                Some(arg) => self.write_literal(buf, arg)?,
                None => {
                    buf.push_char('?');
                }
            }
            rest = &rest[pos + 1..];
        }
        buf.push(rest);
        Ok(())
    }

    /// `(SELECT ...)`, plus ` AS "alias"` when aliased.
    fn write_subquery(&self, buf: &mut SqlBuilder, sub: &Dataset) -> SqlResult<()> {
        let sub = self.nested(sub);
        buf.push_char('(');
        sub.write_select(buf)?;
        buf.push_char(')');
        if let Some(alias) = sub.alias() {
            self.write_alias(buf, alias)?;
        }
        Ok(())
    }

    /// A nested dataset rendered in this statement's dialect, so quoting and
    /// placeholder numbering stay uniform across the whole statement.
    fn nested(&self, sub: &Dataset) -> Dataset {
        sub.with_adapter(Arc::clone(&self.adapter))
    }
}

/// RFC3339 with the fraction trimmed of trailing zeros and omitted when
/// zero; UTC is written as `Z`.
fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let mut out = ts.format("%Y-%m-%dT%H:%M:%S").to_string();
    // Leap seconds carry nanos >= 1s; chrono already prints them as :60.
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let frac = format!("{nanos:09}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    if ts.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&ts.format("%:z").to_string());
    }
    out
}
