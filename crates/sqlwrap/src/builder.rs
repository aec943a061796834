//! Dialect-bound entry point.

use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::wrapper::{QueryOption, SqlWrapper};

/// Produces [`SqlWrapper`]s for one dialect.
///
/// Holds nothing but the dialect, so it is `Copy` and can be shared freely
/// across threads; every [`wrap`](SqlBuilder::wrap) starts from fresh state.
///
/// # Example
/// ```ignore
/// use sqlwrap::{SqlBuilder, table, where_clause};
///
/// let builder = SqlBuilder::mysql();
/// let stmt = builder
///     .wrap([table("user"), where_clause("id = ?", [1])])
///     .to_query()?;
///
/// assert_eq!(stmt.sql, "SELECT * FROM user WHERE id = ?");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlBuilder {
    dialect: Dialect,
}

impl SqlBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn mysql() -> Self {
        Self::new(Dialect::MySql)
    }

    pub fn postgres() -> Self {
        Self::new(Dialect::Postgres)
    }

    pub fn sqlite() -> Self {
        Self::new(Dialect::Sqlite)
    }

    /// Resolve the dialect from a driver or dialect name, eg: a config value.
    pub fn from_driver(name: &str) -> BuildResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Apply `options` in order to a fresh wrapper.
    pub fn wrap(&self, options: impl IntoIterator<Item = QueryOption>) -> SqlWrapper {
        SqlWrapper::new(self.dialect, options)
    }
}

impl From<Dialect> for SqlBuilder {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}
