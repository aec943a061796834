//! Ordered column/value maps.

use crate::clause::Clause;
use crate::error::BuildError;
use crate::value::Value;
use indexmap::IndexMap;

/// Right-hand side of a row entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// Bound as a single `?`.
    Literal(Value),
    /// Rendered verbatim with its own binds spliced in, eg: `stock = stock - ?`.
    /// Only UPDATE accepts expressions.
    Expression(Clause),
}

impl<T: Into<Value>> From<T> for Assignment {
    fn from(v: T) -> Self {
        Assignment::Literal(v.into())
    }
}

impl From<Clause> for Assignment {
    fn from(c: Clause) -> Self {
        Assignment::Expression(c)
    }
}

/// A column → value map that keeps insertion order.
///
/// # Example
/// ```ignore
/// use sqlwrap::{Row, clause};
///
/// let data = Row::new()
///     .set("name", "shenghui")
///     .set("stock", clause("stock - ?", [1]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: IndexMap<String, Assignment>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing any previous value in place.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Assignment>) -> Self {
        self.insert(column, value);
        self
    }

    /// Non-consuming counterpart of [`Row::set`].
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Assignment>) -> &mut Self {
        self.entries.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Assignment> {
        self.entries.get(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Assignment)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Assignment>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = BuildError;

    /// Build a row from a JSON object. Nested values stay JSON; scalars map to
    /// their native bind types. Columns keep the order of the JSON document.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let serde_json::Value::Object(map) = value else {
            return Err(BuildError::invalid_upsert("expected a JSON object"));
        };

        Ok(map.into_iter().map(|(k, v)| (k, json_scalar(v))).collect())
    }
}

fn json_scalar(v: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match v {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::String(s) => Value::Text(s),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                n.as_f64().map_or(Value::Null, Value::Float)
            }
        }
        other => Value::Json(other),
    }
}
