//! Resource identity: the [`Head`] of a decoded resource and the [`Pointer`] used to refer to
//! another one.

use crate::framework::attribute::member;
use crate::framework::error::{DecodeError, DecodeErrors, FieldPath};
use serde_json::Value;
use std::fmt;

/// The head matter for a resource.
///
/// Holds the `id` and, when the document supplies one, the `type` tag. This is also the place
/// for further metadata (timestamps, versions) shared by every resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Head {
    pub id: String,
    /// The resource `type` tag.
    pub kind: Option<String>,
}

impl Head {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// A pointer to this resource, if its type is known.
    pub fn pointer(&self) -> Option<Pointer> {
        self.kind
            .as_ref()
            .map(|kind| Pointer::new(self.id.clone(), kind.clone()))
    }
}

/// A bare reference to a resource: `{ "id": ..., "type": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pointer {
    pub id: String,
    pub kind: String,
}

impl Pointer {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Reads a resource identifier object located at `path`.
    ///
    /// Anything other than an object is a malformed relationship; inside the object both `id`
    /// and `type` are required strings, and both are checked before failing.
    pub fn from_json(value: &Value, path: &FieldPath) -> Result<Self, DecodeErrors> {
        let Value::Object(object) = value else {
            return Err(
                DecodeError::malformed(path.clone(), "resource identifier object", value).into(),
            );
        };

        let id = member::<String>(Some(object), "id", path);
        let kind = member::<String>(Some(object), "type", path);
        let (id, kind) = crate::accumulate!(id, kind)?;
        Ok(Self { id, kind })
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::error::ErrorKind;
    use serde_json::json;

    fn data() -> FieldPath {
        FieldPath::root().key("relationships").key("author").key("data")
    }

    #[test]
    fn test_pointer_from_object() {
        let pointer = Pointer::from_json(&json!({"id": "9", "type": "authors"}), &data()).unwrap();
        assert_eq!(pointer, Pointer::new("9", "authors"));
        assert_eq!(pointer.to_string(), "authors/9");
    }

    #[test]
    fn test_pointer_reports_both_members() {
        let errors = Pointer::from_json(&json!({"id": 9}), &data()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            errors.errors()[0].path().to_string(),
            "relationships.author.data.id"
        );
        assert_eq!(errors.errors()[1].kind(), ErrorKind::MissingField);
        assert_eq!(
            errors.errors()[1].path().to_string(),
            "relationships.author.data.type"
        );
    }

    #[test]
    fn test_pointer_rejects_non_object() {
        let errors = Pointer::from_json(&json!([{"id": "1", "type": "authors"}]), &data()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind(), ErrorKind::MalformedRelationship);
    }

    #[test]
    fn test_head_pointer() {
        assert_eq!(Head::new("1").pointer(), None);
        assert_eq!(
            Head::new("1").with_kind("stores").pointer(),
            Some(Pointer::new("1", "stores"))
        );
    }
}
