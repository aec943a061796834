//! `tokio-postgres` parameter encoding for [`Value`].
//!
//! Lets a [`Statement`] built for [`Dialect::Postgres`](crate::Dialect) run
//! as-is:
//!
//! ```ignore
//! let stmt = SqlBuilder::postgres().wrap([table("users")]).to_query()?;
//! let rows = client.query(&stmt.sql, &stmt.params_ref()).await?;
//! ```

use crate::value::Value;
use crate::wrapper::Statement;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

impl Statement {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.binds.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Int(v) => encode_int(*v, ty, out),
            Value::UInt(v) => encode_int(i64::try_from(*v)?, ty, out),
            Value::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                _ => v.to_sql(ty, out),
            },
            Value::Text(v) => v.to_sql(ty, out),
            Value::Bytes(v) => v.to_sql(ty, out),
            Value::Uuid(v) => v.to_sql(ty, out),
            Value::DateTime(v) => v.to_sql(ty, out),
            Value::NaiveDateTime(v) => v.to_sql(ty, out),
            Value::Date(v) => v.to_sql(ty, out),
            Value::Json(v) => v.to_sql(ty, out),
            Value::List(_) => Err("list value reached the driver unexpanded, use where_in".into()),
        }
    }

    // The variant decides the wire format; mismatches surface from `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

/// Encode an integer at the width the server expects.
fn encode_int(
    v: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql(ty, out),
        Type::FLOAT8 => (v as f64).to_sql(ty, out),
        _ => v.to_sql(ty, out),
    }
}
