//! # sqlwrap
//!
//! A dialect-aware SQL statement builder for MySQL, Postgres and SQLite.
//!
//! ## Features
//!
//! - **Options, not chains**: a statement is described by an ordered list of
//!   options (`table`, `where_clause`, `join`, `order_by`, ...)
//! - **Records and rows**: INSERT/UPDATE data comes from `#[derive(Record)]`
//!   structs or ordered [`Row`] maps
//! - **One placeholder style in, native style out**: fragments are written
//!   with `?`, the final pass renders `?` or `$1, $2, ...`
//! - **IN-expansion**: `where_in("id IN (?)", [vec![1, 2, 3]])` binds one
//!   placeholder per element
//! - **No I/O**: builds are pure, synchronous computations
//!
//! ## Example
//!
//! ```ignore
//! use sqlwrap::prelude::*;
//!
//! #[derive(Record)]
//! struct User {
//!     #[db("name")]
//!     name: String,
//!     #[db("age,omitempty")]
//!     age: i32,
//! }
//!
//! let builder = SqlBuilder::postgres();
//!
//! // SELECT
//! let stmt = builder
//!     .wrap([
//!         table("user"),
//!         where_clause("age > ?", [20]),
//!         order_by(["id DESC"]),
//!         limit(10),
//!     ])
//!     .to_query()?;
//! // SELECT * FROM user WHERE age > $1 ORDER BY id DESC LIMIT $2
//!
//! // INSERT
//! let stmt = builder
//!     .wrap([table("user")])
//!     .to_insert(&User { name: "shenghui".into(), age: 29 })?;
//! // INSERT INTO user (name, age) VALUES ($1, $2) RETURNING id
//!
//! // UPDATE with a computed assignment
//! let stmt = builder
//!     .wrap([table("product"), where_clause("id = ?", [42])])
//!     .to_update(&row! { "stock" => clause("stock - ?", [1]) })?;
//! // UPDATE product SET stock = stock - $1 WHERE id = $2
//! ```

// Lets `#[derive(Record)]` output (`::sqlwrap::...`) resolve inside this crate.
extern crate self as sqlwrap;

#[macro_use]
mod macros;

pub mod builder;
pub mod clause;
pub mod dialect;
pub mod error;
pub mod payload;
pub mod rebind;
pub mod record;
pub mod reflect;
pub mod row;
pub mod value;
pub mod wrapper;

#[cfg(feature = "postgres")]
pub mod postgres;

pub mod prelude;

pub use builder::SqlBuilder;
pub use clause::{Clause, Keyword, clause};
pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use payload::Payload;
pub use record::{FieldValue, Record};
pub use reflect::{Reflected, reflect_batch, reflect_single};
pub use row::{Assignment, Row};
pub use value::{IsZero, ToValue, Value};
pub use wrapper::{
    QueryOption, SqlWrapper, Statement, cross_join, distinct, full_join, group_by, having, join,
    left_join, limit, offset, order_by, right_join, select, table, union, union_all,
    where_clause, where_in,
};

#[cfg(feature = "derive")]
pub use sqlwrap_derive::Record;
