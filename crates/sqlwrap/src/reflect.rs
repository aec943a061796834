//! Payload → (columns, binds).
//!
//! Records contribute their mapped fields in declaration order, minus
//! `omitempty` fields holding a zero value. Rows contribute every entry in
//! insertion order. For batches the first element decides the column set and
//! every element then supplies exactly one bind per column, so the bind count
//! is always `rows × columns`.

use crate::error::{BuildError, BuildResult};
use crate::payload::Payload;
use crate::record::Record;
use crate::row::{Assignment, Row};
use crate::value::Value;

/// Columns and their flat bind list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reflected {
    pub columns: Vec<String>,
    pub binds: Vec<Value>,
}

impl Reflected {
    /// Number of value groups held by `binds`. Zero when there are no columns.
    pub fn rows(&self) -> usize {
        match self.columns.len() {
            0 => 0,
            n => self.binds.len() / n,
        }
    }
}

/// One `SET` item of an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SetItem {
    pub(crate) column: String,
    /// Raw expression rendered instead of `?`.
    pub(crate) expr: Option<String>,
}

/// Reflect a single record or row.
pub fn reflect_single(payload: &Payload<'_>) -> BuildResult<Reflected> {
    match payload {
        Payload::Record(record) => Ok(reflect_record(*record)),
        Payload::Map(row) => reflect_row(row),
        other => Err(BuildError::invalid_upsert(format!(
            "expects a record or a row, got {}",
            other.kind()
        ))),
    }
}

/// Reflect a homogeneous collection of records or rows.
pub fn reflect_batch(payload: &Payload<'_>) -> BuildResult<Reflected> {
    match payload {
        Payload::Records(records) => reflect_records(records),
        Payload::Maps(rows) => reflect_rows(rows),
        other => Err(BuildError::invalid_batch(format!(
            "expects a slice of records or rows, got {}",
            other.kind()
        ))),
    }
}

fn reflect_record(record: &dyn Record) -> Reflected {
    let fields = record.fields();
    let mut out = Reflected {
        columns: Vec::with_capacity(fields.len()),
        binds: Vec::with_capacity(fields.len()),
    };

    for field in fields {
        if field.is_omitted() {
            continue;
        }
        out.columns.push(field.column.to_string());
        out.binds.push(field.value);
    }
    out
}

fn reflect_row(row: &Row) -> BuildResult<Reflected> {
    let mut out = Reflected {
        columns: Vec::with_capacity(row.len()),
        binds: Vec::with_capacity(row.len()),
    };

    for (column, assignment) in row.iter() {
        match assignment {
            Assignment::Literal(v) => {
                out.columns.push(column.to_string());
                out.binds.push(v.clone());
            }
            Assignment::Expression(_) => {
                return Err(BuildError::invalid_upsert(format!(
                    "column '{column}' holds an expression, only UPDATE accepts expressions"
                )));
            }
        }
    }
    Ok(out)
}

fn reflect_records(records: &[&dyn Record]) -> BuildResult<Reflected> {
    let Some(first) = records.first() else {
        return Err(BuildError::EmptyBatchPayload);
    };

    // the first element's shape is authoritative for the whole batch
    let first = first.fields();
    let keep: Vec<bool> = first.iter().map(|f| !f.is_omitted()).collect();
    let columns: Vec<String> = first
        .iter()
        .filter(|f| !f.is_omitted())
        .map(|f| f.column.to_string())
        .collect();

    let mut binds = Vec::with_capacity(columns.len() * records.len());
    for (i, record) in records.iter().enumerate() {
        let fields = record.fields();
        if fields.len() != keep.len() {
            return Err(BuildError::invalid_batch(format!(
                "element {i} has {} fields, the first element has {}",
                fields.len(),
                keep.len()
            )));
        }

        binds.extend(
            fields
                .into_iter()
                .zip(&keep)
                .filter(|(_, keep)| **keep)
                .map(|(f, _)| f.value),
        );
    }

    Ok(Reflected { columns, binds })
}

fn reflect_rows(rows: &[&Row]) -> BuildResult<Reflected> {
    let Some(first) = rows.first() else {
        return Err(BuildError::EmptyBatchPayload);
    };

    let columns: Vec<String> = first.columns().map(str::to_string).collect();
    let mut binds = Vec::with_capacity(columns.len() * rows.len());

    for row in rows {
        for column in &columns {
            match row.get(column) {
                Some(Assignment::Literal(v)) => binds.push(v.clone()),
                Some(Assignment::Expression(_)) => {
                    return Err(BuildError::invalid_batch(format!(
                        "column '{column}' holds an expression, only UPDATE accepts expressions"
                    )));
                }
                None => binds.push(Value::Null),
            }
        }
    }

    Ok(Reflected { columns, binds })
}

/// Reflect an UPDATE payload. Row expressions become raw assignments with
/// their binds spliced in at their position.
pub(crate) fn reflect_update(payload: &Payload<'_>) -> BuildResult<(Vec<SetItem>, Vec<Value>)> {
    match payload {
        Payload::Record(record) => {
            let Reflected { columns, binds } = reflect_record(*record);
            let sets = columns
                .into_iter()
                .map(|column| SetItem { column, expr: None })
                .collect();
            Ok((sets, binds))
        }
        Payload::Map(row) => {
            let mut sets = Vec::with_capacity(row.len());
            let mut binds = Vec::with_capacity(row.len());

            for (column, assignment) in row.iter() {
                match assignment {
                    Assignment::Literal(v) => {
                        sets.push(SetItem { column: column.to_string(), expr: None });
                        binds.push(v.clone());
                    }
                    Assignment::Expression(c) => {
                        sets.push(SetItem {
                            column: column.to_string(),
                            expr: Some(c.query().to_string()),
                        });
                        binds.extend_from_slice(c.binds());
                    }
                }
            }
            Ok((sets, binds))
        }
        other => Err(BuildError::invalid_upsert(format!(
            "expects a record or a row, got {}",
            other.kind()
        ))),
    }
}
