/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```ignore
/// use sqlwrap::{binds, where_clause};
///
/// let opt = where_clause("age > ? AND name = ?", binds![18, "alice"]);
/// let none = where_clause("deleted_at IS NULL", binds![]);
/// ```
#[macro_export]
macro_rules! binds {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Build a [`Row`](crate::Row) from `column => value` pairs, in order.
///
/// ```ignore
/// use sqlwrap::{clause, row};
///
/// let data = row! {
///     "name" => "shenghui",
///     "stock" => clause("stock - ?", [1]),
/// };
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {
        $crate::Row::new()$(.set($column, $value))+
    };
}
