//! Raw SQL fragments with their bind values.

use crate::value::Value;
use std::fmt;

/// Keyword a [`Clause`] is rendered with when it is a JOIN or a UNION member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Union,
    UnionAll,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Inner => "INNER",
            Keyword::Left => "LEFT",
            Keyword::Right => "RIGHT",
            Keyword::Full => "FULL",
            Keyword::Cross => "CROSS",
            Keyword::Union => "UNION",
            Keyword::UnionAll => "UNION ALL",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable SQL fragment plus its positional binds.
///
/// Used for WHERE/HAVING conditions, JOIN targets, UNION members, and as a
/// computed assignment in map-based updates:
///
/// ```ignore
/// use sqlwrap::{clause, row};
///
/// let data = row! { "stock" => clause("stock - ?", [1]) };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    table: Option<String>,
    keyword: Option<Keyword>,
    query: String,
    binds: Vec<Value>,
}

/// Build a [`Clause`], eg: `clause("price * ? + ?", [2, 100])`.
pub fn clause<V: Into<Value>>(
    query: impl Into<String>,
    binds: impl IntoIterator<Item = V>,
) -> Clause {
    Clause::new(query, binds)
}

impl Clause {
    pub fn new<V: Into<Value>>(
        query: impl Into<String>,
        binds: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            table: None,
            keyword: None,
            query: query.into(),
            binds: binds.into_iter().map(Into::into).collect(),
        }
    }

    /// JOIN target. `on` may be empty (CROSS JOIN).
    pub(crate) fn join(keyword: Keyword, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            keyword: Some(keyword),
            query: on.into(),
            binds: Vec::new(),
        }
    }

    /// UNION member built from an already rendered sub-query.
    pub(crate) fn union_member(keyword: Keyword, query: String, binds: Vec<Value>) -> Self {
        Self {
            table: None,
            keyword: Some(keyword),
            query,
            binds,
        }
    }

    /// SQL text of the fragment.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Positional binds of the fragment.
    pub fn binds(&self) -> &[Value] {
        &self.binds
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.keyword
    }
}
