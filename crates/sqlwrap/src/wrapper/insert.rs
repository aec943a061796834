//! INSERT and batch INSERT rendering.

use super::{SqlWrapper, Statement, push_list, push_value_group};
use crate::error::BuildResult;
use crate::payload::Payload;
use crate::reflect::{Reflected, reflect_batch, reflect_single};

impl SqlWrapper {
    /// Build an INSERT for a single record or row.
    ///
    /// On Postgres the statement ends with `RETURNING id`.
    pub fn to_insert<'a>(&self, data: impl Into<Payload<'a>>) -> BuildResult<Statement> {
        let payload = data.into();
        self.logged("insert", self.build_insert(&payload))
    }

    /// Build a multi-row INSERT for a collection of records or rows.
    ///
    /// Columns come from the first element. A batch whose first element maps
    /// no column at all renders as a bare `INSERT INTO <table>`.
    pub fn to_batch_insert<'a>(&self, data: impl Into<Payload<'a>>) -> BuildResult<Statement> {
        let payload = data.into();
        self.logged("batch_insert", self.build_batch_insert(&payload))
    }

    fn build_insert(&self, payload: &Payload<'_>) -> BuildResult<Statement> {
        let Reflected { columns, binds } = reflect_single(payload)?;

        let mut sql = self.insert_head(&columns);
        if !columns.is_empty() {
            push_value_group(&mut sql, columns.len());
        }

        if self.dialect.returns_generated_key() {
            sql.push_str(" RETURNING id");
        }

        Ok(Statement::new(self.dialect.rebind(&sql), binds))
    }

    fn build_batch_insert(&self, payload: &Payload<'_>) -> BuildResult<Statement> {
        let reflected = reflect_batch(payload)?;
        let rows = reflected.rows();
        let Reflected { columns, binds } = reflected;

        let mut sql = self.insert_head(&columns);
        for i in 0..rows {
            if i > 0 {
                sql.push_str(", ");
            }
            push_value_group(&mut sql, columns.len());
        }

        Ok(Statement::new(self.dialect.rebind(&sql), binds))
    }

    /// `INSERT INTO <table>`, plus ` (<columns>) VALUES ` when there are columns.
    fn insert_head(&self, columns: &[String]) -> String {
        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&self.table);

        if !columns.is_empty() {
            sql.push_str(" (");
            push_list(&mut sql, columns);
            sql.push_str(") VALUES ");
        }
        sql
    }
}
