//! UPDATE rendering.

use super::{SqlWrapper, Statement};
use crate::error::BuildResult;
use crate::payload::Payload;
use crate::reflect::reflect_update;

impl SqlWrapper {
    /// Build an UPDATE from a single record or row.
    ///
    /// Row entries holding a [`Clause`](crate::Clause) are rendered as raw
    /// assignments (`stock = stock - ?`) with the clause binds in place.
    pub fn to_update<'a>(&self, data: impl Into<Payload<'a>>) -> BuildResult<Statement> {
        let payload = data.into();
        self.logged("update", self.build_update(&payload))
    }

    fn build_update(&self, payload: &Payload<'_>) -> BuildResult<Statement> {
        let (sets, mut binds) = reflect_update(payload)?;

        let mut sql = String::from("UPDATE ");
        sql.push_str(&self.table);

        for (i, set) in sets.iter().enumerate() {
            sql.push_str(if i == 0 { " SET " } else { ", " });
            sql.push_str(&set.column);
            sql.push_str(" = ");
            sql.push_str(set.expr.as_deref().unwrap_or("?"));
        }

        self.push_where(&mut sql, &mut binds);

        self.finalize(sql, binds)
    }
}
