//! Placeholder post-processing: IN-expansion and dialect rebinding.
//!
//! Statements are assembled with `?` placeholders only. These two passes run
//! last, in this order:
//!
//! 1. [`expand_in`]: a `?` bound to a [`Value::List`] becomes `?, ?, ...`
//!    and the list is flattened into the bind list at the same position.
//! 2. [`rebind`]: every `?` is rewritten into the dialect's native syntax.
//!
//! Both passes see the same placeholders: a `?` inside a single-quoted string
//! literal or a double-quoted identifier is text, not a placeholder.

use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;

/// Byte offsets of the `?` placeholders in `sql`.
fn placeholders(sql: &str) -> Vec<usize> {
    let mut out = Vec::new();
    let mut quote: Option<u8> = None;

    for (i, &b) in sql.as_bytes().iter().enumerate() {
        match quote {
            // a doubled quote closes and reopens, which is exactly the escape
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'\'' | b'"' => quote = Some(b),
                b'?' => out.push(i),
                _ => {}
            },
        }
    }
    out
}

/// Expand every placeholder bound to a list into one placeholder per element.
///
/// When no bind is a list, the statement is returned untouched. Otherwise the
/// placeholder count must match the bind count exactly, and lists must not be
/// empty.
pub fn expand_in(sql: &str, binds: Vec<Value>) -> BuildResult<(String, Vec<Value>)> {
    let mut has_list = false;
    for bind in &binds {
        if let Value::List(items) = bind {
            if items.is_empty() {
                return Err(BuildError::rebind("empty list passed to IN query"));
            }
            has_list = true;
        }
    }

    if !has_list {
        return Ok((sql.to_string(), binds));
    }

    let positions = placeholders(sql);
    if positions.len() > binds.len() {
        return Err(BuildError::rebind(format!(
            "number of placeholders ({}) exceeds binds ({})",
            positions.len(),
            binds.len()
        )));
    }
    if positions.len() < binds.len() {
        return Err(BuildError::rebind(format!(
            "number of placeholders ({}) less than binds ({})",
            positions.len(),
            binds.len()
        )));
    }

    let mut out = String::with_capacity(sql.len() + binds.len() * 3);
    let mut flat = Vec::with_capacity(binds.len());
    let mut last = 0;

    for (pos, bind) in positions.into_iter().zip(binds) {
        out.push_str(&sql[last..pos]);
        match bind {
            Value::List(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('?');
                    flat.push(item);
                }
            }
            other => {
                out.push('?');
                flat.push(other);
            }
        }
        last = pos + 1;
    }
    out.push_str(&sql[last..]);

    Ok((out, flat))
}

/// Rewrite `?` placeholders into `dialect`'s native syntax.
pub fn rebind(dialect: Dialect, sql: &str) -> String {
    if !matches!(dialect, Dialect::Postgres) {
        return sql.to_string();
    }

    let positions = placeholders(sql);
    let mut out = String::with_capacity(sql.len() + positions.len() * 2);
    let mut last = 0;

    for (i, pos) in positions.into_iter().enumerate() {
        out.push_str(&sql[last..pos]);
        dialect.write_placeholder(i + 1, &mut out);
        last = pos + 1;
    }
    out.push_str(&sql[last..]);
    out
}
