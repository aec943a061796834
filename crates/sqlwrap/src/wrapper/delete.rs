//! DELETE and TRUNCATE rendering.

use super::{SqlWrapper, Statement};
use crate::error::BuildResult;

impl SqlWrapper {
    /// Build a DELETE. Without a `where_clause` option every row is deleted.
    pub fn to_delete(&self) -> BuildResult<Statement> {
        self.logged("delete", self.build_delete())
    }

    fn build_delete(&self) -> BuildResult<Statement> {
        let mut binds = Vec::new();
        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.table);

        self.push_where(&mut sql, &mut binds);

        self.finalize(sql, binds)
    }

    /// `TRUNCATE <table>`. No binds, same text for every dialect.
    pub fn to_truncate(&self) -> String {
        let mut sql = String::from("TRUNCATE ");
        sql.push_str(&self.table);
        sql
    }
}
