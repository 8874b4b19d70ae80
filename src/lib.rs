//! # lax_json
//!
//! A lenient JSON parser and pretty-printing serializer with a dynamic
//! value tree and typed field binding.
//!
//! ## What does "lenient" mean?
//!
//! The grammar accepted here is JSON-shaped but deliberately relaxed:
//!
//! - String escapes are limited to `\n \t \r \b \f \" \\`; any other
//!   escaped character is kept verbatim (no `\u` sequences)
//! - The comma between object entries is optional
//! - Duplicate object keys are not an error — the last write wins
//! - A document may be a bare primitive, not just an object or array
//!
//! Two things are stricter than the leniency above suggests: number
//! literals are validated during tokenization (so `1-2.3.4` fails
//! immediately with a useful message), and a trailing comma directly
//! before `}` or `]` is rejected.
//!
//! ## Key Features
//!
//! - **Dynamic values**: parse into a [`Value`] tree when the document
//!   shape isn't known at compile time
//! - **Depth-first key search**: [`Value::find_by_key`] returns the first
//!   binding of a key at any nesting depth
//! - **Typed coercion**: bridge a `Value` onto numeric primitives,
//!   strings, vectors, or your own structs via [`FromValue`] and the
//!   [`json_record!`] macro, with truncating numeric narrowing
//! - **Serde-powered serialization**: any `#[derive(Serialize)]` type
//!   renders to pretty text through [`to_string`], private fields
//!   included, in field declaration order
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lax_json = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Parsing into dynamic values
//!
//! ```rust
//! use lax_json::from_str;
//!
//! let doc = from_str("{\"user\": {\"name\": \"Alice\", \"id\": 7}}").unwrap();
//!
//! assert_eq!(doc.find_by_key("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(doc.find_by_key("id").and_then(|v| v.as_i64()), Some(7));
//! ```
//!
//! ### Typed extraction with coercion
//!
//! ```rust
//! use lax_json::parse_by_key;
//!
//! // the value is a float; the i32 target truncates it
//! let port: i32 = parse_by_key("{\"net\": {\"port\": 8080.9}}", "port").unwrap();
//! assert_eq!(port, 8080);
//! ```
//!
//! ### Serializing records
//!
//! ```rust
//! use lax_json::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let text = to_string(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(text, "{\n  \"x\": 1,\n  \"y\": 2\n}");
//! ```
//!
//! ## A caveat on round-tripping
//!
//! Output strings are quoted but never escaped, while input strings are
//! unescaped. `parse(serialize(v))` therefore reconstructs `v` only when
//! its strings contain no `"` or `\`. This asymmetry is intentional; see
//! the [`ser`] module docs.
//!
//! ## Concurrency
//!
//! Every operation is synchronous and self-contained: a [`Tokenizer`] or
//! [`Parser`] owns its cursor, nothing is shared across calls, and
//! independent parses may run on independent threads without locking.

pub mod coerce;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use coerce::{from_value, FromValue};
pub use error::{Error, Result};
pub use lexer::Tokenizer;
pub use map::Map;
pub use parser::Parser;
pub use ser::ValueSerializer;
pub use token::{Token, TokenKind};
pub use value::Value;

use serde::Serialize;
use std::io;

/// Tokenizes text into an ordered token sequence.
///
/// # Examples
///
/// ```rust
/// use lax_json::{tokenize, TokenKind};
///
/// let tokens = tokenize("[1, 2]").unwrap();
/// assert_eq!(tokens[0].kind(), TokenKind::ArrayOpen);
/// assert_eq!(tokens.len(), 5);
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] on a malformed literal or illegal character.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Tokenizer::new(input).tokenize()
}

/// Parses a string of document text into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use lax_json::{from_str, Value};
///
/// assert_eq!(from_str("[1, 2, 3]").unwrap().as_array().unwrap().len(), 3);
/// assert_eq!(from_str("null").unwrap(), Value::Null);
/// ```
///
/// # Errors
///
/// Returns an error if tokenization or parsing fails. No partial tree is
/// ever returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Value> {
    Parser::from_str(input)?.parse()
}

/// Parses a byte slice of document text into a [`Value`] tree.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(input: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(input).map_err(|e| Error::custom(e.to_string()))?;
    from_str(text)
}

/// Parses a [`Value`] tree from an I/O stream of document text.
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Parses the document, searches it depth-first for `key`, and coerces
/// the first match into `T`.
///
/// # Examples
///
/// ```rust
/// use lax_json::parse_by_key;
///
/// let doc = "{\"a\": {\"b\": {\"c\": 41.5}}}";
/// let c: f64 = parse_by_key(doc, "c").unwrap();
/// assert_eq!(c, 41.5);
/// ```
///
/// # Errors
///
/// Propagates lex/parse errors, returns [`Error::KeyNotFound`] when no
/// binding of `key` exists at any depth, or a coercion error when the
/// found value cannot become a `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_by_key<T: FromValue>(input: &str, key: &str) -> Result<T> {
    Parser::from_str(input)?.parse_by_key(key)
}

/// Serializes any `T: Serialize` to pretty-printed document text.
///
/// The output uses a 2-space indent per nesting level; there is no
/// compact mode. Struct fields appear in declaration order.
///
/// # Examples
///
/// ```rust
/// use lax_json::{from_str, to_string};
///
/// let value = from_str("[1, 2]").unwrap();
/// assert_eq!(to_string(&value).unwrap(), "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails; the
/// failure is propagated, never swallowed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    Ok(ser::render(&tree))
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Useful for manipulating data dynamically before rendering it.
///
/// # Examples
///
/// ```rust
/// use lax_json::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serializes any `T: Serialize` as document text to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer
/// fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
