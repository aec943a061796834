//! Bind values.
//!
//! `Value` is the closed set of values a statement can carry next to its SQL
//! text. Everything that ends up in a bind list (clause binds, record fields,
//! row entries, LIMIT/OFFSET) is converted into one of these variants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

/// A single positional bind value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    NaiveDateTime(NaiveDateTime),
    Date(NaiveDate),
    Json(serde_json::Value),
    /// A sequence of values. Only `where_in` statements expand it into
    /// one placeholder per element.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// A byte string. `Vec<u8>` itself converts to a [`Value::List`] of
    /// integers, which `where_in` would expand.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(v.into())
    }

    /// Returns the elements when this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize, u8, u16, u32);
impl_from_int!(UInt as u64: u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Value::Text(v.into_owned())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::NaiveDateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Conversion used by `#[derive(Record)]` to read a field without moving it.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl<T: Clone + Into<Value>> ToValue for T {
    fn to_value(&self) -> Value {
        self.clone().into()
    }
}

/// Zero/empty test behind the `omitempty` field option.
///
/// Empty strings and collections, `false`, numeric zero and `None` are zero.
/// `Some(_)`, boxed values, UUIDs and timestamps never are, whatever they hold.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_num {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_is_zero_num!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_is_zero_num!(0.0 => f32, f64);

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for Cow<'_, str> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsZero for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        N == 0
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for IndexMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// Pointer-like wrappers are never nil.
impl<T: ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: ?Sized> IsZero for Rc<T> {
    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: ?Sized> IsZero for Arc<T> {
    fn is_zero(&self) -> bool {
        false
    }
}

macro_rules! impl_never_zero {
    ($($t:ty),*) => {
        $(
            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_zero!(Uuid, DateTime<Utc>, NaiveDateTime, NaiveDate);

impl IsZero for serde_json::Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl IsZero for Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_to_i64() {
        assert_eq!(Value::from(7_i32), Value::Int(7));
        assert_eq!(Value::from(7_u8), Value::Int(7));
        assert_eq!(Value::from(7_u64), Value::UInt(7));
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }

    #[test]
    fn collections_become_lists() {
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(Value::from(["a"]).as_list().map(<[Value]>::len), Some(1));
        assert_eq!(Value::from(&[1_i64, 2, 3][..]).as_list().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn bytes_are_not_a_list() {
        let v = Value::bytes(&b"abc"[..]);
        assert_eq!(v, Value::Bytes(b"abc".to_vec()));
        assert!(v.as_list().is_none());
    }

    #[test]
    fn zero_values() {
        assert!(0_i64.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(false.is_zero());
        assert!(String::new().is_zero());
        assert!(Vec::<i32>::new().is_zero());
        assert!(None::<i32>.is_zero());
        assert!(serde_json::Value::Null.is_zero());
    }

    #[test]
    fn non_zero_values() {
        assert!(!1_u8.is_zero());
        assert!(!true.is_zero());
        assert!(!"x".is_zero());
        // a present option is never empty, even around a zero
        assert!(!Some(0).is_zero());
        assert!(!Box::new(0).is_zero());
        assert!(!Uuid::nil().is_zero());
        assert!(!serde_json::json!({}).is_zero());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![Value::Int(1), Value::Null, "a".into()]).unwrap();
        assert_eq!(json, r#"[1,null,"a"]"#);
    }
}
