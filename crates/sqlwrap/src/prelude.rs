//! Convenient imports for typical `sqlwrap` usage.
//!
//! ```ignore
//! use sqlwrap::prelude::*;
//! ```

pub use crate::{
    Assignment, BuildError, BuildResult, Clause, Dialect, Payload, Record, Row, SqlBuilder,
    SqlWrapper, Statement, Value, binds, clause, row,
};

pub use crate::{
    cross_join, distinct, full_join, group_by, having, join, left_join, limit, offset, order_by,
    right_join, select, table, union, union_all, where_clause, where_in,
};
