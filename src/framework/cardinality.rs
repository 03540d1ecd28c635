//! # Relationship Cardinality
//!
//! A relationship is exactly one of three shapes. Each shape is a type-level marker that fixes
//! what a *reference* to the relationship looks like and what its *materialized* data looks
//! like:
//!
//! | Marker | `Pointer` | `Element` | Meaning |
//! |--------|-----------|-----------|---------|
//! | [`One<T>`] | [`Pointer`] | `T` | exactly one related resource |
//! | [`Many<T>`] | `Vec<Pointer>` | `Vec<T>` | zero or more related resources |
//! | [`Maybe<T>`] | `Option<Pointer>` | `Option<T>` | zero or one related resource |
//!
//! # Architecture Note
//! The markers are never constructed; they only parametrize
//! [`Related`](crate::framework::Related) and [`To`](crate::framework::To). Because the payload
//! types are associated types, a `Related<Many<Book>>` in the `Unfetched` state can only ever
//! hold a `Vec<Pointer>`; the compiler rules out a mismatched payload.
//!
//! The set is closed. [`Cardinality`] is sealed, so the decode rules below are the complete
//! rule table.
//!
//! # Decode Rules
//!
//! `decode_pointer` receives the relationship's `data` member (`None` when the key is absent):
//!
//! | `data` | `One` | `Many` | `Maybe` |
//! |--------|-------|--------|---------|
//! | absent | `None` | `None` | `None` |
//! | `null` | malformed | `Some(vec![])` | `Some(None)` |
//! | object | `Some(pointer)` | malformed | `Some(Some(pointer))` |
//! | array | malformed | `Some(pointers)` | malformed |

use crate::framework::decode::Resource;
use crate::framework::error::{DecodeError, DecodeErrors, FieldPath};
use crate::framework::identity::Pointer;
use serde_json::Value;
use std::fmt::Debug;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Shape descriptor for a relationship.
pub trait Cardinality: sealed::Sealed {
    /// Short name used in logs.
    const NAME: &'static str;

    /// What a reference-only relationship holds.
    type Pointer: Clone + Debug + PartialEq;

    /// What a fully materialized relationship holds.
    type Element: Clone + Debug + PartialEq;

    /// Reads the reference-only representation out of a relationship's `data` member.
    ///
    /// Returns `Ok(None)` when `data` is absent.
    fn decode_pointer(
        data: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Self::Pointer>, DecodeErrors>;

    /// Reads the fully materialized representation (complete resource objects).
    fn decode_element(data: &Value, path: &FieldPath) -> Result<Self::Element, DecodeErrors>;
}

/// Exactly one related resource.
pub struct One<T>(PhantomData<fn() -> T>);

/// Zero or more related resources, in document order.
pub struct Many<T>(PhantomData<fn() -> T>);

/// Zero or one related resource.
pub struct Maybe<T>(PhantomData<fn() -> T>);

impl<T> sealed::Sealed for One<T> {}
impl<T> sealed::Sealed for Many<T> {}
impl<T> sealed::Sealed for Maybe<T> {}

/// Decodes a nested resource, re-rooting its error paths under `path`.
fn element<T: Resource>(data: &Value, path: &FieldPath) -> Result<T, DecodeErrors> {
    T::decode(data).map_err(|errors| errors.prefixed(path))
}

impl<T: Resource> Cardinality for One<T> {
    const NAME: &'static str = "one";
    type Pointer = Pointer;
    type Element = T;

    fn decode_pointer(data: Option<&Value>, path: &FieldPath) -> Result<Option<Pointer>, DecodeErrors> {
        match data {
            None => Ok(None),
            Some(value) => Pointer::from_json(value, path).map(Some),
        }
    }

    fn decode_element(data: &Value, path: &FieldPath) -> Result<T, DecodeErrors> {
        match data {
            Value::Object(_) => element(data, path),
            other => Err(DecodeError::malformed(path.clone(), "resource object", other).into()),
        }
    }
}

impl<T: Resource> Cardinality for Many<T> {
    const NAME: &'static str = "many";
    type Pointer = Vec<Pointer>;
    type Element = Vec<T>;

    fn decode_pointer(
        data: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Vec<Pointer>>, DecodeErrors> {
        match data {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(Vec::new())),
            Some(Value::Array(items)) => {
                let mut errors = DecodeErrors::default();
                let pointers: Vec<Pointer> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| errors.absorb(Pointer::from_json(item, &path.index(i))))
                    .collect();
                errors.into_result(Some(pointers))
            }
            Some(other) => Err(DecodeError::malformed(
                path.clone(),
                "array of resource identifier objects",
                other,
            )
            .into()),
        }
    }

    fn decode_element(data: &Value, path: &FieldPath) -> Result<Vec<T>, DecodeErrors> {
        match data {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => {
                let mut errors = DecodeErrors::default();
                let elements: Vec<T> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| {
                        errors.absorb(One::<T>::decode_element(item, &path.index(i)))
                    })
                    .collect();
                errors.into_result(elements)
            }
            other => Err(
                DecodeError::malformed(path.clone(), "array of resource objects", other).into(),
            ),
        }
    }
}

impl<T: Resource> Cardinality for Maybe<T> {
    const NAME: &'static str = "maybe";
    type Pointer = Option<Pointer>;
    type Element = Option<T>;

    fn decode_pointer(
        data: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Option<Pointer>>, DecodeErrors> {
        match data {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(value) => Pointer::from_json(value, path).map(|pointer| Some(Some(pointer))),
        }
    }

    fn decode_element(data: &Value, path: &FieldPath) -> Result<Option<T>, DecodeErrors> {
        match data {
            Value::Null => Ok(None),
            other => One::<T>::decode_element(other, path).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::decode::ResourceObject;
    use crate::framework::error::ErrorKind;
    use crate::framework::identity::Head;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        head: Head,
        label: String,
    }

    impl Resource for Tag {
        fn head(&self) -> &Head {
            &self.head
        }

        fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
            let object = ResourceObject::parse(json)?;
            let head = object.head();
            let label = object.attribute("label");
            let (head, label) = crate::accumulate!(head, label)?;
            Ok(Tag { head, label })
        }
    }

    fn data() -> FieldPath {
        FieldPath::root().key("relationships").key("tags").key("data")
    }

    fn pointer(id: &str) -> Value {
        json!({"id": id, "type": "tags"})
    }

    fn kinds(errors: &DecodeErrors) -> Vec<ErrorKind> {
        errors.iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_absent_data_is_none_for_every_cardinality() {
        assert_eq!(One::<Tag>::decode_pointer(None, &data()).unwrap(), None);
        assert_eq!(Many::<Tag>::decode_pointer(None, &data()).unwrap(), None);
        assert_eq!(Maybe::<Tag>::decode_pointer(None, &data()).unwrap(), None);
    }

    #[test]
    fn test_one_rules() {
        assert_eq!(
            One::<Tag>::decode_pointer(Some(&pointer("1")), &data()).unwrap(),
            Some(Pointer::new("1", "tags"))
        );

        let null = One::<Tag>::decode_pointer(Some(&json!(null)), &data()).unwrap_err();
        assert_eq!(kinds(&null), vec![ErrorKind::MalformedRelationship]);

        let array = One::<Tag>::decode_pointer(Some(&json!([pointer("1")])), &data()).unwrap_err();
        assert_eq!(kinds(&array), vec![ErrorKind::MalformedRelationship]);
    }

    #[test]
    fn test_many_rules() {
        let pointers = Many::<Tag>::decode_pointer(
            Some(&json!([pointer("3"), pointer("1"), pointer("2")])),
            &data(),
        )
        .unwrap()
        .unwrap();
        let ids: Vec<&str> = pointers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);

        assert_eq!(
            Many::<Tag>::decode_pointer(Some(&json!(null)), &data()).unwrap(),
            Some(vec![])
        );
        assert_eq!(
            Many::<Tag>::decode_pointer(Some(&json!([])), &data()).unwrap(),
            Some(vec![])
        );

        let object = Many::<Tag>::decode_pointer(Some(&pointer("1")), &data()).unwrap_err();
        assert_eq!(kinds(&object), vec![ErrorKind::MalformedRelationship]);
        assert_eq!(object.errors()[0].path().to_string(), "relationships.tags.data");
    }

    #[test]
    fn test_many_reports_every_bad_element() {
        let errors = Many::<Tag>::decode_pointer(
            Some(&json!([pointer("1"), "2", {"id": "3"}, pointer("4")])),
            &data(),
        )
        .unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ErrorKind::MalformedRelationship, ErrorKind::MissingField]
        );
        assert_eq!(errors.errors()[0].path().to_string(), "relationships.tags.data[1]");
        assert_eq!(
            errors.errors()[1].path().to_string(),
            "relationships.tags.data[2].type"
        );
    }

    #[test]
    fn test_maybe_rules() {
        assert_eq!(
            Maybe::<Tag>::decode_pointer(Some(&json!(null)), &data()).unwrap(),
            Some(None)
        );
        assert_eq!(
            Maybe::<Tag>::decode_pointer(Some(&pointer("5")), &data()).unwrap(),
            Some(Some(Pointer::new("5", "tags")))
        );
        let array = Maybe::<Tag>::decode_pointer(Some(&json!([])), &data()).unwrap_err();
        assert_eq!(kinds(&array), vec![ErrorKind::MalformedRelationship]);
    }

    #[test]
    fn test_decode_element() {
        let tag = json!({"id": "1", "type": "tags", "attributes": {"label": "rust"}});

        let one = One::<Tag>::decode_element(&tag, &data()).unwrap();
        assert_eq!(one.label, "rust");
        assert_eq!(one.head.kind.as_deref(), Some("tags"));

        let many = Many::<Tag>::decode_element(&json!([tag.clone(), tag.clone()]), &data()).unwrap();
        assert_eq!(many.len(), 2);

        assert_eq!(Maybe::<Tag>::decode_element(&json!(null), &data()).unwrap(), None);
        assert_eq!(
            Maybe::<Tag>::decode_element(&tag, &data()).unwrap(),
            Some(one)
        );
    }

    #[test]
    fn test_decode_element_prefixes_nested_errors() {
        let broken = json!([
            {"id": "1", "attributes": {"label": "ok"}},
            {"attributes": {"label": 7}},
        ]);
        let errors = Many::<Tag>::decode_element(&broken, &data()).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "relationships.tags.data[1].id",
                "relationships.tags.data[1].attributes.label",
            ]
        );
    }

    #[test]
    fn test_decode_element_shape_mismatch() {
        let errors = One::<Tag>::decode_element(&json!([]), &data()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ErrorKind::MalformedRelationship]);
        let errors = Many::<Tag>::decode_element(&json!({"id": "1"}), &data()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ErrorKind::MalformedRelationship]);
    }
}
