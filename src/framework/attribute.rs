//! # Attribute Coercion
//!
//! Plain attributes (`attributes.<name>` in a resource object) are read through the
//! [`Attribute`] trait, which coerces one JSON value into a Rust primitive.
//!
//! | Rust type | JSON | Notes |
//! |-----------|------|-------|
//! | `String` | string | |
//! | `bool` | boolean | |
//! | `i64` | number | integer literal within range; `1.0` is rejected |
//! | `f64` | number | |
//! | [`time::Date`] | string | calendar date, `YYYY-MM-DD` |
//! | [`url::Url`] | string | absolute URL |
//! | `Option<A>` | any of the above, or `null` | absent or `null` decode to `None` |

use crate::framework::error::{DecodeError, DecodeErrors, FieldPath};
use serde_json::{Map, Value};
use time::macros::format_description;
use time::Date;
use url::Url;

/// A primitive that can be read out of a resource object's `attributes`.
pub trait Attribute: Sized {
    /// Coerce a present value.
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError>;

    /// Called when the key is absent. Required attributes fail; `Option` overrides this.
    fn absent(path: &FieldPath) -> Result<Self, DecodeError> {
        Err(DecodeError::missing(path.clone()))
    }
}

/// Reads `<parent>.<name>` out of an optional JSON object as an `A`.
///
/// A missing parent object behaves exactly like a missing key.
pub(crate) fn member<A: Attribute>(
    parent: Option<&Map<String, Value>>,
    name: &str,
    parent_path: &FieldPath,
) -> Result<A, DecodeErrors> {
    let path = parent_path.key(name);
    let result = match parent.and_then(|object| object.get(name)) {
        Some(value) => A::from_json(value, &path),
        None => A::absent(&path),
    };
    result.map_err(DecodeErrors::from)
}

impl Attribute for String {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::mismatch(path.clone(), "string", other)),
        }
    }
}

impl Attribute for bool {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeError::mismatch(path.clone(), "boolean", other)),
        }
    }
}

impl Attribute for i64 {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(i),
                None if n.is_u64() => {
                    Err(DecodeError::invalid(path.clone(), format!("{n} is out of range")))
                }
                None => Err(DecodeError::invalid(path.clone(), format!("{n} is not an integer"))),
            },
            other => Err(DecodeError::mismatch(path.clone(), "number", other)),
        }
    }
}

impl Attribute for f64 {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| DecodeError::invalid(path.clone(), format!("{n} is out of range"))),
            other => Err(DecodeError::mismatch(path.clone(), "number", other)),
        }
    }
}

impl Attribute for Date {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let text = String::from_json(value, path)?;
        Date::parse(&text, format_description!("[year]-[month]-[day]"))
            .map_err(|e| DecodeError::invalid(path.clone(), format!("`{text}` is not a date: {e}")))
    }
}

impl Attribute for Url {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let text = String::from_json(value, path)?;
        Url::parse(&text)
            .map_err(|e| DecodeError::invalid(path.clone(), format!("`{text}` is not a URL: {e}")))
    }
}

impl<A: Attribute> Attribute for Option<A> {
    fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => A::from_json(other, path).map(Some),
        }
    }

    fn absent(_path: &FieldPath) -> Result<Self, DecodeError> {
        Ok(None)
    }
}
