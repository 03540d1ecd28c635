//! # Decode Errors
//!
//! This module defines the error types produced while turning a JSON resource object
//! into a typed [`Resource`](crate::framework::Resource).
//!
//! Field-level rules return a single [`DecodeError`]. Entity-level decoding never stops at the
//! first failure: it collects every field error into a [`DecodeErrors`] aggregate, so a caller
//! gets the full diagnostic for a document in one pass.
//!
//! Every error carries a [`FieldPath`] pointing at the offending value, rendered the way it is
//! addressed in the document (`attributes.name`, `relationships.books.data[3].type`).

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The kind of a JSON value, used to report what was found where something else was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a resource object.
///
/// Paths are immutable; [`FieldPath::key`] and [`FieldPath::index`] return extended copies.
/// The empty path (the resource object itself) renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extends the path with an object member.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    /// Extends the path with an array position.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Re-roots this path under `prefix`.
    ///
    /// Used when a nested resource (decoded relative to its own root) is embedded in an outer
    /// document.
    pub fn prefixed(&self, prefix: &FieldPath) -> Self {
        let mut segments = prefix.segments.clone();
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if position == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required key is absent.
    MissingField,
    /// A present key holds the wrong JSON kind.
    TypeMismatch,
    /// A relationship's `data` does not have the shape its cardinality requires.
    MalformedRelationship,
    /// The JSON kind is right but the value cannot be used (bad date, bad URL, unknown type tag).
    InvalidValue,
}

/// A single field that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing required field `{path}`")]
    MissingField { path: FieldPath },

    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        found: JsonKind,
    },

    #[error("malformed relationship at `{path}`: expected {expected}, found {found}")]
    MalformedRelationship {
        path: FieldPath,
        expected: &'static str,
        found: JsonKind,
    },

    #[error("invalid value at `{path}`: {reason}")]
    InvalidValue { path: FieldPath, reason: String },
}

impl DecodeError {
    pub fn missing(path: FieldPath) -> Self {
        DecodeError::MissingField { path }
    }

    pub fn mismatch(path: FieldPath, expected: &'static str, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            path,
            expected,
            found: JsonKind::of(found),
        }
    }

    pub fn malformed(path: FieldPath, expected: &'static str, found: &Value) -> Self {
        DecodeError::MalformedRelationship {
            path,
            expected,
            found: JsonKind::of(found),
        }
    }

    pub fn invalid(path: FieldPath, reason: impl fmt::Display) -> Self {
        DecodeError::InvalidValue {
            path,
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MissingField { .. } => ErrorKind::MissingField,
            DecodeError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            DecodeError::MalformedRelationship { .. } => ErrorKind::MalformedRelationship,
            DecodeError::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            DecodeError::MissingField { path }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::MalformedRelationship { path, .. }
            | DecodeError::InvalidValue { path, .. } => path,
        }
    }

    /// Re-roots the error's path under `prefix`.
    pub fn prefixed(mut self, prefix: &FieldPath) -> Self {
        let path = match &mut self {
            DecodeError::MissingField { path }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::MalformedRelationship { path, .. }
            | DecodeError::InvalidValue { path, .. } => path,
        };
        *path = path.prefixed(prefix);
        self
    }
}

/// Every field failure found while decoding one entity (or one document).
///
/// # Accumulation
///
/// Decoders feed each field result through [`DecodeErrors::absorb`], which keeps the value on
/// success and records the failures otherwise. Nothing short-circuits: once all fields have been
/// visited the aggregate either is empty (the entity can be built) or lists every problem in
/// field order.
///
/// A `DecodeErrors` returned as an `Err` is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed to decode: {}", .errors.len(), summary(.errors))]
pub struct DecodeErrors {
    errors: Vec<DecodeError>,
}

fn summary(errors: &[DecodeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DecodeErrors {
    pub fn errors(&self) -> &[DecodeError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecodeError> {
        self.errors.iter()
    }

    pub fn push(&mut self, error: DecodeError) {
        self.errors.push(error);
    }

    /// Records the failures of `result`, returning its value if it succeeded.
    pub fn absorb<T>(&mut self, result: Result<T, DecodeErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.errors.extend(errors.errors);
                None
            }
        }
    }

    /// `Ok(value)` if nothing was recorded, otherwise the collected failures.
    pub fn into_result<T>(self, value: T) -> Result<T, DecodeErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Re-roots every recorded path under `prefix`.
    pub fn prefixed(self, prefix: &FieldPath) -> Self {
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|error| error.prefixed(prefix))
                .collect(),
        }
    }
}

impl From<DecodeError> for DecodeErrors {
    fn from(error: DecodeError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = std::slice::Iter<'a, DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_rendering() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "$");
        assert!(root.is_root());

        let path = root.key("relationships").key("books").key("data").index(3).key("type");
        assert_eq!(path.to_string(), "relationships.books.data[3].type");
    }

    #[test]
    fn test_prefixed_path() {
        let nested = FieldPath::root().key("attributes").key("title");
        let prefix = FieldPath::root().key("relationships").key("author").key("data");
        assert_eq!(
            nested.prefixed(&prefix).to_string(),
            "relationships.author.data.attributes.title"
        );
        assert_eq!(FieldPath::root().prefixed(&prefix), prefix);
    }

    #[test]
    fn test_error_kind_and_path() {
        let path = FieldPath::root().key("attributes").key("name");
        let error = DecodeError::mismatch(path.clone(), "string", &json!(42));
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        assert_eq!(error.path(), &path);
        assert_eq!(
            error.to_string(),
            "type mismatch at `attributes.name`: expected string, found number"
        );
    }

    #[test]
    fn test_absorb_collects_every_failure() {
        let mut errors = DecodeErrors::default();
        let first: Result<u8, DecodeErrors> =
            Err(DecodeError::missing(FieldPath::root().key("id")).into());
        let second: Result<u8, DecodeErrors> = Ok(7);
        let third: Result<u8, DecodeErrors> =
            Err(DecodeError::missing(FieldPath::root().key("attributes").key("name")).into());

        assert_eq!(errors.absorb(first), None);
        assert_eq!(errors.absorb(second), Some(7));
        assert_eq!(errors.absorb(third), None);

        assert_eq!(errors.len(), 2);
        let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, vec!["id", "attributes.name"]);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_into_result_when_empty() {
        assert_eq!(DecodeErrors::default().into_result(5), Ok(5));
    }

    #[test]
    fn test_aggregate_display_lists_all() {
        let mut errors = DecodeErrors::default();
        errors.push(DecodeError::missing(FieldPath::root().key("id")));
        errors.push(DecodeError::invalid(
            FieldPath::root().key("attributes").key("birth"),
            "bad date",
        ));
        assert_eq!(
            errors.to_string(),
            "2 field(s) failed to decode: missing required field `id`; invalid value at `attributes.birth`: bad date"
        );
    }
}
