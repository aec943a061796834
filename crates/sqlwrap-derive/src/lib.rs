//! Derive macros for sqlwrap
//!
//! Provides `#[derive(Record)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod record;
mod syn_types;

/// Derive `Record` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use sqlwrap::Record;
///
/// #[derive(Record)]
/// struct User {
///     id: i64,
///     #[db("name")]
///     username: String,
///     #[db("email,omitempty")]
///     email: Option<String>,
///     #[db(column = "age", omitempty)]
///     age: i32,
///     #[db("-")]
///     session: String,
/// }
/// ```
///
/// # Attributes
///
/// Tag form, one string:
///
/// - `#[db("name")]` - Map field to a different column name
/// - `#[db("name,omitempty")]` - Also skip the field when it holds its zero value
/// - `#[db(",omitempty")]` - Keep the field name, skip when zero
/// - `#[db("-")]` - Never map the field
///
/// Key form, combinable:
///
/// - `#[db(column = "name")]`
/// - `#[db(omitempty)]`
/// - `#[db(skip)]`
///
/// Fields without a column name map to the field identifier. Byte strings
/// (`Vec<u8>`, `&[u8]`, `[u8; N]`, `Box<[u8]>` and their `Option`s) bind as a
/// single bytes value.
#[proc_macro_derive(Record, attributes(db))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
