//! SELECT rendering.

use super::{SqlWrapper, Statement, push_list};
use crate::clause::Keyword;
use crate::error::BuildResult;
use crate::value::Value;

impl SqlWrapper {
    /// Build the SELECT statement.
    pub fn to_query(&self) -> BuildResult<Statement> {
        self.logged("query", self.build_query())
    }

    fn build_query(&self) -> BuildResult<Statement> {
        let (mut sql, mut binds) = self.subquery();

        if !self.unions.is_empty() {
            let mut out = String::with_capacity(sql.len() * (self.unions.len() + 1) + 16);
            out.push('(');
            out.push_str(&sql);
            out.push(')');

            for u in &self.unions {
                out.push(' ');
                out.push_str(u.keyword().map_or("UNION", Keyword::as_str));
                out.push_str(" (");
                out.push_str(u.query());
                out.push(')');

                binds.extend_from_slice(u.binds());
            }
            sql = out;
        }

        self.finalize(sql, binds)
    }

    /// The bare SELECT, without unions, IN-expansion or rebinding.
    pub(crate) fn subquery(&self) -> (String, Vec<Value>) {
        let mut binds = Vec::new();
        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            push_list(&mut sql, &self.columns);
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join.keyword().map_or("INNER", Keyword::as_str));
            sql.push_str(" JOIN ");
            sql.push_str(join.table().unwrap_or_default());

            if !join.query().is_empty() {
                sql.push_str(" ON ");
                sql.push_str(join.query());
            }
            binds.extend_from_slice(join.binds());
        }

        self.push_where(&mut sql, &mut binds);

        if !self.groups.is_empty() {
            sql.push_str(" GROUP BY ");
            push_list(&mut sql, &self.groups);
        }

        if let Some(having) = &self.having {
            sql.push_str(" HAVING ");
            sql.push_str(having.query());
            binds.extend_from_slice(having.binds());
        }

        if !self.orders.is_empty() {
            sql.push_str(" ORDER BY ");
            push_list(&mut sql, &self.orders);
        }

        if self.limit != 0 {
            sql.push_str(" LIMIT ?");
            binds.push(Value::Int(self.limit));
        }

        if self.offset != 0 {
            sql.push_str(" OFFSET ?");
            binds.push(Value::Int(self.offset));
        }

        (sql, binds)
    }
}
