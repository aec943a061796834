//! Query options.
//!
//! Options are applied in the order given. A later option of the same kind
//! replaces an earlier one, except joins and unions, which accumulate.

use super::SqlWrapper;
use crate::clause::{Clause, Keyword};
use crate::value::Value;

/// One configuration step for a [`SqlWrapper`].
#[derive(Debug, Clone)]
pub enum QueryOption {
    Table(String),
    Select(Vec<String>),
    Distinct(Vec<String>),
    Join(Clause),
    Where(Clause),
    WhereIn(Clause),
    GroupBy(Vec<String>),
    Having(Clause),
    OrderBy(Vec<String>),
    Offset(i64),
    Limit(i64),
    Union(Vec<SqlWrapper>),
    UnionAll(Vec<SqlWrapper>),
}

impl QueryOption {
    pub(crate) fn apply(self, w: &mut SqlWrapper) {
        match self {
            QueryOption::Table(name) => w.table = name,
            QueryOption::Select(columns) => w.columns = columns,
            QueryOption::Distinct(columns) => {
                w.columns = columns;
                w.distinct = true;
            }
            QueryOption::Join(join) => w.joins.push(join),
            QueryOption::Where(clause) => w.where_ = Some(clause),
            QueryOption::WhereIn(clause) => {
                w.where_ = Some(clause);
                w.where_in = true;
            }
            QueryOption::GroupBy(columns) => w.groups = columns,
            QueryOption::Having(clause) => w.having = Some(clause),
            QueryOption::OrderBy(columns) => w.orders = columns,
            QueryOption::Offset(n) => w.offset = n,
            QueryOption::Limit(n) => w.limit = n,
            QueryOption::Union(wrappers) => push_unions(w, Keyword::Union, wrappers),
            QueryOption::UnionAll(wrappers) => push_unions(w, Keyword::UnionAll, wrappers),
        }
    }
}

fn push_unions(w: &mut SqlWrapper, keyword: Keyword, wrappers: Vec<SqlWrapper>) {
    for sub in wrappers {
        w.where_in |= sub.where_in;

        let (query, binds) = sub.subquery();
        w.unions.push(Clause::union_member(keyword, query, binds));
    }
}

fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

/// Target table.
pub fn table(name: impl Into<String>) -> QueryOption {
    QueryOption::Table(name.into())
}

/// Selected columns, default `*`.
pub fn select<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> QueryOption {
    QueryOption::Select(strings(columns))
}

/// `SELECT DISTINCT` over the given columns.
pub fn distinct<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> QueryOption {
    QueryOption::Distinct(strings(columns))
}

/// `INNER JOIN <table> ON <on>`
pub fn join(table: impl Into<String>, on: impl Into<String>) -> QueryOption {
    QueryOption::Join(Clause::join(Keyword::Inner, table, on))
}

/// `LEFT JOIN <table> ON <on>`
pub fn left_join(table: impl Into<String>, on: impl Into<String>) -> QueryOption {
    QueryOption::Join(Clause::join(Keyword::Left, table, on))
}

/// `RIGHT JOIN <table> ON <on>`
pub fn right_join(table: impl Into<String>, on: impl Into<String>) -> QueryOption {
    QueryOption::Join(Clause::join(Keyword::Right, table, on))
}

/// `FULL JOIN <table> ON <on>`
pub fn full_join(table: impl Into<String>, on: impl Into<String>) -> QueryOption {
    QueryOption::Join(Clause::join(Keyword::Full, table, on))
}

/// `CROSS JOIN <table>`
pub fn cross_join(table: impl Into<String>) -> QueryOption {
    QueryOption::Join(Clause::join(Keyword::Cross, table, ""))
}

/// `WHERE` clause, eg: `where_clause("age > ? AND status = ?", binds![18, "active"])`.
pub fn where_clause<V: Into<Value>>(
    query: impl Into<String>,
    binds: impl IntoIterator<Item = V>,
) -> QueryOption {
    QueryOption::Where(Clause::new(query, binds))
}

/// `WHERE` clause whose binds may hold lists to expand, eg:
/// `where_in("id IN (?)", [vec![1, 2, 3]])`.
pub fn where_in<V: Into<Value>>(
    query: impl Into<String>,
    binds: impl IntoIterator<Item = V>,
) -> QueryOption {
    QueryOption::WhereIn(Clause::new(query, binds))
}

/// `GROUP BY` columns.
pub fn group_by<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> QueryOption {
    QueryOption::GroupBy(strings(columns))
}

/// `HAVING` clause.
pub fn having<V: Into<Value>>(
    query: impl Into<String>,
    binds: impl IntoIterator<Item = V>,
) -> QueryOption {
    QueryOption::Having(Clause::new(query, binds))
}

/// `ORDER BY` expressions, eg: `order_by(["age DESC", "id"])`.
pub fn order_by<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> QueryOption {
    QueryOption::OrderBy(strings(columns))
}

/// `OFFSET ?`; zero means no offset.
pub fn offset(n: i64) -> QueryOption {
    QueryOption::Offset(n)
}

/// `LIMIT ?`; zero means no limit.
pub fn limit(n: i64) -> QueryOption {
    QueryOption::Limit(n)
}

/// `(<self>) UNION (<sub>) ...`
///
/// Sub-queries are rendered when the option is applied; their own unions
/// and dialects are ignored.
pub fn union(wrappers: impl IntoIterator<Item = SqlWrapper>) -> QueryOption {
    QueryOption::Union(wrappers.into_iter().collect())
}

/// `(<self>) UNION ALL (<sub>) ...`
pub fn union_all(wrappers: impl IntoIterator<Item = SqlWrapper>) -> QueryOption {
    QueryOption::UnionAll(wrappers.into_iter().collect())
}
