//! SELECT, UPDATE and DELETE assembly.

use super::Dataset;
use crate::builder::{Rendered, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::UpdateExpression;
use crate::literal::Literal;
use crate::log;

impl Dataset {
    /// Render the SELECT statement in this dataset's default mode.
    pub fn to_sql(&self) -> SqlResult<Rendered> {
        self.render("select", self.prepared, |ds, buf| ds.write_select(buf))
    }

    /// Render the SELECT statement with placeholders.
    pub fn prepared_sql(&self) -> SqlResult<Rendered> {
        self.render("select", true, |ds, buf| ds.write_select(buf))
    }

    /// Render `UPDATE <table> SET <assignments> [WHERE ...]`.
    ///
    /// ```ignore
    /// let sql = from("items").filter(i("id").eq(1)).update_sql([i("name").set("Test")])?;
    /// // UPDATE "items" SET "name"='Test' WHERE ("id" = 1)
    /// ```
    pub fn update_sql<I>(&self, assignments: I) -> SqlResult<Rendered>
    where
        I: IntoIterator<Item = UpdateExpression>,
    {
        let assignments: Vec<Literal> = assignments.into_iter().map(Literal::from).collect();
        self.render("update", self.prepared, |ds, buf| {
            if assignments.is_empty() {
                return Err(SqlError::validation(
                    "update requires at least one assignment",
                ));
            }
            buf.push("UPDATE ");
            ds.write_sources(buf)?;
            buf.push(" SET ");
            ds.write_joined(buf, &assignments, ", ")?;
            ds.write_conditions(buf, " WHERE ", &ds.clauses().filter)
        })
    }

    /// Render `DELETE FROM <table> [WHERE ...]`.
    pub fn delete_sql(&self) -> SqlResult<Rendered> {
        self.render("delete", self.prepared, |ds, buf| {
            buf.push("DELETE FROM ");
            ds.write_sources(buf)?;
            ds.write_conditions(buf, " WHERE ", &ds.clauses().filter)
        })
    }

    pub(crate) fn write_select(&self, buf: &mut SqlBuilder) -> SqlResult<()> {
        let c = self.clauses();

        buf.push("SELECT ");
        if c.distinct {
            buf.push("DISTINCT ");
        }
        if c.select.is_empty() {
            buf.push_char('*');
        } else {
            self.write_columns(buf, &c.select)?;
        }

        buf.push(" FROM ");
        self.write_sources(buf)?;
        self.write_conditions(buf, " WHERE ", &c.filter)?;

        if !c.group_by.is_empty() {
            buf.push(" GROUP BY ");
            self.write_columns(buf, &c.group_by)?;
        }
        self.write_conditions(buf, " HAVING ", &c.having)?;

        if !c.order.is_empty() {
            buf.push(" ORDER BY ");
            self.write_columns(buf, &c.order)?;
        }
        if let Some(limit) = &c.limit {
            buf.push(" LIMIT ");
            self.write_literal(buf, limit)?;
        }
        if let Some(offset) = &c.offset {
            buf.push(" OFFSET ");
            self.write_literal(buf, offset)?;
        }

        for compound in &c.compounds {
            self.write_compound(buf, compound)?;
        }
        Ok(())
    }

    fn write_sources(&self, buf: &mut SqlBuilder) -> SqlResult<()> {
        let from = &self.clauses().from;
        if from.is_empty() {
            return Err(SqlError::validation("dataset has no source table"));
        }
        self.write_columns(buf, from)
    }

    /// Conditions joined with AND; a single condition is written as is.
    fn write_conditions(
        &self,
        buf: &mut SqlBuilder,
        keyword: &str,
        conditions: &[Literal],
    ) -> SqlResult<()> {
        match conditions {
            [] => Ok(()),
            [single] => {
                buf.push(keyword);
                self.write_literal(buf, single)
            }
            many => {
                buf.push(keyword).push_char('(');
                self.write_joined(buf, many, " AND ")?;
                buf.push_char(')');
                Ok(())
            }
        }
    }

    fn render(
        &self,
        statement: &'static str,
        parameterized: bool,
        write: impl FnOnce(&Self, &mut SqlBuilder) -> SqlResult<()>,
    ) -> SqlResult<Rendered> {
        let mut buf = SqlBuilder::new(parameterized);
        match write(self, &mut buf) {
            Ok(()) => {
                let out = buf.finish();
                log::rendered(statement, &out);
                Ok(out)
            }
            Err(err) => {
                log::render_failed(statement, &err);
                Err(err)
            }
        }
    }
}
