//! SQL dialects.

use crate::error::BuildError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder and statement-shape convention of a target database.
///
/// - MySQL: `?` placeholders.
/// - Postgres: `$1, $2, ...` placeholders, single-row inserts return `id`.
/// - SQLite: `?` placeholders (SQLite also understands `$N`, `?` is emitted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Whether single-row inserts append `RETURNING id`.
    pub fn returns_generated_key(self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    /// Write the placeholder for the 1-based bind `index`.
    pub(crate) fn write_placeholder(self, index: usize, out: &mut String) {
        match self {
            Dialect::MySql | Dialect::Sqlite => out.push('?'),
            Dialect::Postgres => {
                use std::fmt::Write;
                let _ = write!(out, "${index}");
            }
        }
    }

    /// Rewrite `?` placeholders into this dialect's native form.
    ///
    /// Binds are untouched; only the text changes.
    pub fn rebind(self, sql: &str) -> String {
        crate::rebind::rebind(self, sql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = BuildError;

    /// Parse a dialect or driver name (`mysql`, `postgres`, `pgx`, `sqlite3`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" | "pgx" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(BuildError::UnknownDialect(s.to_string())),
        }
    }
}

/// Accepts the same names as [`FromStr`], so a config file may name the driver.
impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
