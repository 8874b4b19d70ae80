//! Coercion of dynamic values into statically-typed targets.
//!
//! The [`FromValue`] trait is the bridge from a parsed [`Value`] to a
//! concrete Rust type. Conversion rules, checked in order:
//!
//! 1. A value that already matches the target shape is returned
//!    unchanged.
//! 2. A numeric value converts to any numeric primitive target through a
//!    floating-point intermediate, truncating (never rounding) when the
//!    target is integral: coercing `3.7` to `i32` yields `3`.
//! 3. Strings convert to `String`, booleans to `bool`, as-is.
//! 4. An object converts to a struct registered with
//!    [`json_record!`](crate::json_record): each target field looks up
//!    the same-named entry and coerces it recursively; a missing entry
//!    leaves the field at its `Default` value rather than failing.
//! 5. Anything else fails with a coercion error naming the source and
//!    target kinds.
//!
//! Arrays additionally coerce elementwise into `Vec<T>`, and `Null`
//! coerces into `Option<T>` as `None`.
//!
//! ## Examples
//!
//! ```rust
//! use lax_json::{from_str, from_value};
//!
//! let value = from_str("3.7").unwrap();
//! let truncated: i32 = from_value(value).unwrap();
//! assert_eq!(truncated, 3);
//! ```

use crate::{Error, Result, Value};

/// Conversion from a dynamic [`Value`] into `Self`.
///
/// Implemented for the numeric primitives (`i8`–`i64`, `f32`, `f64`),
/// `bool`, `String`, `Value` itself, `Vec<T>`, `Option<T>`, and any
/// struct registered through [`json_record!`](crate::json_record).
pub trait FromValue: Sized {
    /// Coerces `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coerce`] when no conversion path exists.
    fn from_value(value: Value) -> Result<Self>;
}

/// Coerces a value into any [`FromValue`] target.
///
/// The free-function form of [`FromValue::from_value`], convenient with a
/// turbofish:
///
/// ```rust
/// use lax_json::{from_str, from_value};
///
/// let value = from_str("true").unwrap();
/// assert!(from_value::<bool>(value).unwrap());
/// ```
pub fn from_value<T: FromValue>(value: Value) -> Result<T> {
    T::from_value(value)
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::coerce(other.kind_name(), "bool")),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::coerce(other.kind_name(), "String")),
        }
    }
}

impl FromValue for i8 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok((i as f64) as i8),
            Value::Float(f) => Ok(f as i8),
            other => Err(Error::coerce(other.kind_name(), "i8")),
        }
    }
}

impl FromValue for i16 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok((i as f64) as i16),
            Value::Float(f) => Ok(f as i16),
            other => Err(Error::coerce(other.kind_name(), "i16")),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok((i as f64) as i32),
            Value::Float(f) => Ok(f as i32),
            other => Err(Error::coerce(other.kind_name(), "i32")),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            // Identity; no float intermediate, so the full i64 range survives.
            Value::Integer(i) => Ok(i),
            Value::Float(f) => Ok(f as i64),
            other => Err(Error::coerce(other.kind_name(), "i64")),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok((i as f64) as f32),
            Value::Float(f) => Ok(f as f32),
            other => Err(Error::coerce(other.kind_name(), "f32")),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            other => Err(Error::coerce(other.kind_name(), "f64")),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(Error::coerce(other.kind_name(), "array")),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
