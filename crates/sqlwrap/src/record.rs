//! Structured records: the static replacement for reading struct tags at runtime.

use crate::value::Value;

/// One mapped field of a record, read from a concrete instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// Column the field maps to.
    pub column: &'static str,
    /// The field carries the `omitempty` option.
    pub omit_empty: bool,
    /// The field holds its zero value. Only computed for `omitempty` fields.
    pub is_zero: bool,
    pub value: Value,
}

impl FieldValue {
    /// Whether the reflector drops this field for the instance it was read from.
    pub fn is_omitted(&self) -> bool {
        self.omit_empty && self.is_zero
    }
}

/// A struct whose fields map to table columns.
///
/// Usually derived:
///
/// ```ignore
/// use sqlwrap::Record;
///
/// #[derive(Record)]
/// struct User {
///     #[db("name")]
///     name: String,
///     #[db("nickname,omitempty")]
///     nickname: Option<String>,
///     #[db("-")]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Excluded (`-`) fields are never returned. The remaining fields come back in
/// declaration order, every time, whatever their values.
pub trait Record {
    fn fields(&self) -> Vec<FieldValue>;
}

impl<T: Record + ?Sized> Record for &T {
    fn fields(&self) -> Vec<FieldValue> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn fields(&self) -> Vec<FieldValue> {
        (**self).fields()
    }
}
