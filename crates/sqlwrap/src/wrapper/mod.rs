//! Statement assembly.
//!
//! A [`SqlWrapper`] is configured once by an ordered list of
//! [`QueryOption`]s and then rendered by one of its terminal methods:
//!
//! ```ignore
//! use sqlwrap::{SqlBuilder, table, where_in, order_by};
//!
//! let stmt = SqlBuilder::postgres()
//!     .wrap([table("users"), where_in("id IN (?)", [vec![1, 2, 3]]), order_by(["id"])])
//!     .to_query()?;
//!
//! assert_eq!(stmt.sql, "SELECT * FROM users WHERE id IN ($1, $2, $3) ORDER BY id");
//! ```
//!
//! Every terminal method assembles a `?`-placeholder statement, runs the
//! IN-expansion pass when a `where_in` option was applied, then rewrites the
//! placeholders for the wrapper's dialect.

mod delete;
mod insert;
mod options;
mod query;
mod update;


pub use options::{
    QueryOption, cross_join, distinct, full_join, group_by, having, join, left_join, limit,
    offset, order_by, right_join, select, table, union, union_all, where_clause, where_in,
};

use crate::clause::Clause;
use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::rebind;
use crate::value::Value;

/// A finished statement: dialect-native SQL and its positional binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<Value>,
}

impl Statement {
    pub fn new(sql: String, binds: Vec<Value>) -> Self {
        Self { sql, binds }
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.binds)
    }
}

/// Builder state for a single statement.
#[derive(Debug, Clone)]
pub struct SqlWrapper {
    dialect: Dialect,
    table: String,
    columns: Vec<String>,
    where_: Option<Clause>,
    joins: Vec<Clause>,
    groups: Vec<String>,
    having: Option<Clause>,
    orders: Vec<String>,
    offset: i64,
    limit: i64,
    unions: Vec<Clause>,
    distinct: bool,
    /// Some bind may be a list that needs IN-expansion.
    where_in: bool,
}

impl SqlWrapper {
    pub(crate) fn new(dialect: Dialect, options: impl IntoIterator<Item = QueryOption>) -> Self {
        let mut wrapper = Self {
            dialect,
            table: String::new(),
            columns: vec!["*".to_string()],
            where_: None,
            joins: Vec::new(),
            groups: Vec::new(),
            having: None,
            orders: Vec::new(),
            offset: 0,
            limit: 0,
            unions: Vec::new(),
            distinct: false,
            where_in: false,
        };

        for option in options {
            option.apply(&mut wrapper);
        }
        wrapper
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Whether an IN-expansion pass will run before rebinding.
    pub fn has_where_in(&self) -> bool {
        self.where_in
    }

    /// Append ` WHERE <expr>` and its binds.
    fn push_where(&self, sql: &mut String, binds: &mut Vec<Value>) {
        if let Some(w) = &self.where_ {
            sql.push_str(" WHERE ");
            sql.push_str(w.query());
            binds.extend_from_slice(w.binds());
        }
    }

    /// IN-expansion (when flagged) followed by dialect rebinding.
    fn finalize(&self, sql: String, binds: Vec<Value>) -> BuildResult<Statement> {
        let (sql, binds) = if self.where_in {
            rebind::expand_in(&sql, binds)?
        } else {
            (sql, binds)
        };

        Ok(Statement::new(self.dialect.rebind(&sql), binds))
    }

    fn logged(&self, op: &'static str, result: BuildResult<Statement>) -> BuildResult<Statement> {
        log_build(self.dialect, op, &result);
        result
    }
}

/// `a, b, c`
fn push_list(sql: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(item);
    }
}

/// `(?, ?, ?)`
fn push_value_group(sql: &mut String, n: usize) {
    sql.push('(');
    for i in 0..n {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('?');
    }
    sql.push(')');
}

#[cfg(feature = "tracing")]
fn log_build(dialect: Dialect, op: &'static str, result: &BuildResult<Statement>) {
    match result {
        Ok(stmt) => tracing::debug!(
            target: "sqlwrap.sql",
            %dialect,
            op,
            sql = %stmt.sql,
            binds = stmt.binds.len(),
            "built statement"
        ),
        Err(error) => tracing::debug!(
            target: "sqlwrap.sql",
            %dialect,
            op,
            %error,
            "statement build failed"
        ),
    }
}

#[cfg(not(feature = "tracing"))]
fn log_build(_dialect: Dialect, _op: &'static str, _result: &BuildResult<Statement>) {}
