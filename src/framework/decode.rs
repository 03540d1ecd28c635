//! # Decode Pipeline
//!
//! Turns one JSON resource object into one typed resource:
//!
//! ```text
//! { "id": "2", "type": "stores",
//!   "attributes":    { "name": "full store" },
//!   "relationships": { "books": { "data": [ { "id": "1", "type": "books" }, ... ] } } }
//! ```
//!
//! 1. [`ResourceObject::parse`] checks the envelope (an object whose `attributes` and
//!    `relationships`, when present, are objects).
//! 2. [`ResourceObject::head`] reads `id` and the optional `type`.
//! 3. [`ResourceObject::attribute`] reads each plain attribute through
//!    [`Attribute`](crate::framework::Attribute).
//! 4. [`ResourceObject::relationship`] routes each relationship into
//!    [`Related::Unknown`](crate::framework::Related::Unknown) or
//!    [`Related::Unfetched`](crate::framework::Related::Unfetched) using the field's
//!    [`Cardinality`] rules. Primary decoding never produces `Fetched`.
//! 5. [`accumulate!`](crate::accumulate) combines every field result. The resource is built
//!    only if all of them succeeded; otherwise every failure is returned together.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use endpoints::accumulate;
//! use endpoints::framework::{DecodeErrors, Head, Many, Resource, ResourceObject, To};
//! use endpoints::model::Book;
//! use serde_json::{json, Value};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Library {
//!     head: Head,
//!     city: String,
//!     books: To<Many<Book>>,
//! }
//!
//! impl Resource for Library {
//!     fn head(&self) -> &Head {
//!         &self.head
//!     }
//!
//!     fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
//!         let object = ResourceObject::parse(json)?;
//!         let head = object.head();
//!         let city = object.attribute("city");
//!         let books = object.relationship("books");
//!         let (head, city, books) = accumulate!(head, city, books)?;
//!         Ok(Library { head, city, books })
//!     }
//! }
//!
//! let library = Library::decode(&json!({"id": "1", "attributes": {"city": "Oslo"}})).unwrap();
//! assert!(library.books.is_unknown());
//!
//! let errors = Library::decode(&json!({"attributes": {"city": 3}})).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use crate::framework::attribute::{member, Attribute};
use crate::framework::cardinality::Cardinality;
use crate::framework::error::{DecodeError, DecodeErrors, FieldPath};
use crate::framework::identity::Head;
use crate::framework::related::To;
use serde_json::{Map, Value};
use std::fmt::Debug;
use tracing::{debug, trace};

/// Combines field decode results without short-circuiting.
///
/// Each argument must be a local binding of type `Result<T, DecodeErrors>`. The macro evaluates
/// to `Ok((a, b, ...))` when every result is `Ok`, and to `Err(DecodeErrors)` holding the
/// failures of *all* the `Err` results, in argument order, otherwise.
///
/// ```rust
/// use endpoints::accumulate;
/// use endpoints::framework::{DecodeError, DecodeErrors, FieldPath};
///
/// let id: Result<String, DecodeErrors> = Err(DecodeError::missing(FieldPath::root().key("id")).into());
/// let name: Result<String, DecodeErrors> = Ok("store".into());
/// let count: Result<i64, DecodeErrors> =
///     Err(DecodeError::missing(FieldPath::root().key("count")).into());
///
/// let errors = accumulate!(id, name, count).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[macro_export]
macro_rules! accumulate {
    ($($field:ident),+ $(,)?) => {{
        let mut errors = $crate::framework::DecodeErrors::default();
        $( let $field = errors.absorb($field); )+
        match ($($field,)+) {
            ($(::core::option::Option::Some($field),)+) => ::core::result::Result::Ok(($($field,)+)),
            _ => ::core::result::Result::Err(errors),
        }
    }};
}

/// Extracts just the type name (e.g. "Store" instead of "endpoints::model::store::Store").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

/// Trait that every decodable resource type implements.
///
/// # Architecture Note
/// Each resource writes its field list *once*, in [`Resource::from_json`], as a sequence of
/// [`ResourceObject`] reads joined by [`accumulate!`](crate::accumulate). The generic machinery
/// ([`Cardinality`] rules, [`Attribute`] coercion, error accumulation) is shared by every type.
///
/// # Provided Methods
/// - [`Resource::decode`] wraps `from_json` with logging. Call it instead of `from_json`.
pub trait Resource: Clone + Debug + PartialEq {
    /// The identity of this resource.
    fn head(&self) -> &Head;

    /// Decodes one resource object. Errors are reported relative to the object itself.
    fn from_json(json: &Value) -> Result<Self, DecodeErrors>;

    /// Decodes one resource object, logging the outcome.
    fn decode(json: &Value) -> Result<Self, DecodeErrors> {
        let entity_type = entity_type::<Self>();
        let result = Self::from_json(json);
        match &result {
            Ok(resource) => debug!(entity_type, id = %resource.head().id, "Decoded"),
            Err(errors) => debug!(entity_type, errors = errors.len(), "Decode failed"),
        }
        result
    }
}

/// A read-only view over a JSON resource object.
#[derive(Debug, Clone, Copy)]
pub struct ResourceObject<'a> {
    object: &'a Map<String, Value>,
    attributes: Option<&'a Map<String, Value>>,
    relationships: Option<&'a Map<String, Value>>,
}

/// Looks up `name` on `object`, requiring an object if the member is present.
fn sub_object<'a>(
    object: &'a Map<String, Value>,
    name: &str,
) -> Result<Option<&'a Map<String, Value>>, DecodeErrors> {
    match object.get(name) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(other) => {
            Err(DecodeError::mismatch(FieldPath::root().key(name), "object", other).into())
        }
    }
}

impl<'a> ResourceObject<'a> {
    /// Checks the envelope of a resource object.
    ///
    /// Fails if `json` is not an object, or if `attributes` / `relationships` are present but
    /// not objects. Both members are checked before failing.
    pub fn parse(json: &'a Value) -> Result<Self, DecodeErrors> {
        let Value::Object(object) = json else {
            return Err(DecodeError::mismatch(FieldPath::root(), "resource object", json).into());
        };

        let attributes = sub_object(object, "attributes");
        let relationships = sub_object(object, "relationships");
        let (attributes, relationships) = crate::accumulate!(attributes, relationships)?;

        Ok(Self {
            object,
            attributes,
            relationships,
        })
    }

    /// The raw `type` tag, if it is a string.
    pub fn kind(&self) -> Option<&'a str> {
        self.object.get("type").and_then(Value::as_str)
    }

    /// Reads the resource identity: `id` is required, `type` is optional.
    pub fn head(&self) -> Result<Head, DecodeErrors> {
        let root = FieldPath::root();
        let id = member::<String>(Some(self.object), "id", &root);
        let kind = member::<Option<String>>(Some(self.object), "type", &root);
        let (id, kind) = crate::accumulate!(id, kind)?;
        Ok(Head { id, kind })
    }

    /// Reads `attributes.<name>`.
    ///
    /// An absent `attributes` member is treated like an empty one, so required attributes
    /// report `MissingField` and optional ones decode to `None`.
    pub fn attribute<A: Attribute>(&self, name: &str) -> Result<A, DecodeErrors> {
        member(self.attributes, name, &FieldPath::root().key("attributes"))
    }

    /// Reads `relationships.<name>` into a relationship field.
    ///
    /// Absence of `relationships`, of `<name>`, or of `<name>.data` yields `Unknown`. A present
    /// `data` is handed to `C::decode_pointer` and yields `Unfetched`.
    pub fn relationship<C: Cardinality>(&self, name: &str) -> Result<To<C>, DecodeErrors> {
        let path = FieldPath::root().key("relationships").key(name);

        let Some(relationship) = self.relationships.and_then(|r| r.get(name)) else {
            trace!(relationship = name, cardinality = C::NAME, "Relationship absent");
            return Ok(To::unknown());
        };
        let Value::Object(relationship) = relationship else {
            return Err(DecodeError::malformed(path, "relationship object", relationship).into());
        };

        let to = match C::decode_pointer(relationship.get("data"), &path.key("data"))? {
            Some(pointer) => To::unfetched(pointer),
            None => To::unknown(),
        };
        trace!(
            relationship = name,
            cardinality = C::NAME,
            state = to.related().state(),
            "Relationship decoded"
        );
        Ok(to)
    }
}
