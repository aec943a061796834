//! Data handed to INSERT / batch INSERT / UPDATE.

use crate::record::Record;
use crate::row::Row;
use crate::value::Value;
use std::fmt;

/// The shape of a write payload, resolved once at the call boundary.
///
/// Single-row operations accept [`Payload::Record`] and [`Payload::Map`];
/// batch inserts accept [`Payload::Records`] and [`Payload::Maps`]. Any other
/// variant is rejected with the matching payload error.
pub enum Payload<'a> {
    Record(&'a dyn Record),
    Map(&'a Row),
    Records(Vec<&'a dyn Record>),
    Maps(Vec<&'a Row>),
    /// Anything that is neither a record nor a row.
    Scalar(Value),
}

impl<'a> Payload<'a> {
    pub fn scalar(value: impl Into<Value>) -> Self {
        Payload::Scalar(value.into())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Payload::Record(_) => "record",
            Payload::Map(_) => "row",
            Payload::Records(_) => "record batch",
            Payload::Maps(_) => "row batch",
            Payload::Scalar(_) => "scalar",
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Record(r) => f.debug_tuple("Record").field(&r.fields()).finish(),
            Payload::Map(row) => f.debug_tuple("Map").field(row).finish(),
            Payload::Records(rs) => f.debug_tuple("Records").field(&rs.len()).finish(),
            Payload::Maps(rows) => f.debug_tuple("Maps").field(&rows.len()).finish(),
            Payload::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
        }
    }
}

impl<'a, T: Record> From<&'a T> for Payload<'a> {
    fn from(record: &'a T) -> Self {
        Payload::Record(record)
    }
}

impl<'a, T: Record> From<&'a [T]> for Payload<'a> {
    fn from(records: &'a [T]) -> Self {
        Payload::Records(records.iter().map(|r| r as &dyn Record).collect())
    }
}

impl<'a, T: Record> From<&'a Vec<T>> for Payload<'a> {
    fn from(records: &'a Vec<T>) -> Self {
        Payload::from(records.as_slice())
    }
}

impl<'a> From<&'a Row> for Payload<'a> {
    fn from(row: &'a Row) -> Self {
        Payload::Map(row)
    }
}

impl<'a> From<&'a [Row]> for Payload<'a> {
    fn from(rows: &'a [Row]) -> Self {
        Payload::Maps(rows.iter().collect())
    }
}

impl<'a> From<&'a Vec<Row>> for Payload<'a> {
    fn from(rows: &'a Vec<Row>) -> Self {
        Payload::from(rows.as_slice())
    }
}

impl<'a> From<Value> for Payload<'a> {
    fn from(value: Value) -> Self {
        Payload::Scalar(value)
    }
}
