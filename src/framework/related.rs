//! # Relationship State
//!
//! [`Related<C>`] records how much is known about a relationship at a point in time, and
//! [`To<C>`] is the field type a resource declares for each of its relationships.
//!
//! - **Unknown**: the document said nothing about the relationship.
//! - **Unfetched**: we know the pointer(s) to the related resource(s).
//! - **Fetched**: we hold the related resource(s) themselves.
//!
//! There is deliberately no intermediate state: either all of the related resources are
//! materialized, or only their pointers are.
//!
//! Resources are immutable values. Moving a relationship from `Unfetched` to `Fetched` means
//! building a new `To<C>` (for example with [`To::fetched`] or [`To::fetched_from_json`]) and a
//! new resource around it.

use crate::framework::cardinality::Cardinality;
use crate::framework::error::{DecodeErrors, FieldPath};
use serde_json::Value;
use std::fmt;

/// The three possible states of a relationship with cardinality `C`.
pub enum Related<C: Cardinality> {
    /// No information is available about the relationship.
    Unknown,
    /// Only references to the related resource(s) are known.
    Unfetched(C::Pointer),
    /// The related resource(s) are known in full.
    Fetched(C::Element),
}

impl<C: Cardinality> Related<C> {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Related::Unknown)
    }

    pub fn as_unfetched(&self) -> Option<&C::Pointer> {
        match self {
            Related::Unfetched(pointer) => Some(pointer),
            _ => None,
        }
    }

    pub fn as_fetched(&self) -> Option<&C::Element> {
        match self {
            Related::Fetched(element) => Some(element),
            _ => None,
        }
    }

    /// Name of the current state, for logs.
    pub fn state(&self) -> &'static str {
        match self {
            Related::Unknown => "unknown",
            Related::Unfetched(_) => "unfetched",
            Related::Fetched(_) => "fetched",
        }
    }
}

// Manual impls: a derive would demand `C: Clone` etc. on the marker type itself.

impl<C: Cardinality> Clone for Related<C> {
    fn clone(&self) -> Self {
        match self {
            Related::Unknown => Related::Unknown,
            Related::Unfetched(pointer) => Related::Unfetched(pointer.clone()),
            Related::Fetched(element) => Related::Fetched(element.clone()),
        }
    }
}

impl<C: Cardinality> PartialEq for Related<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Related::Unknown, Related::Unknown) => true,
            (Related::Unfetched(a), Related::Unfetched(b)) => a == b,
            (Related::Fetched(a), Related::Fetched(b)) => a == b,
            _ => false,
        }
    }
}

impl<C: Cardinality> fmt::Debug for Related<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Related::Unknown => f.write_str("Unknown"),
            Related::Unfetched(pointer) => f.debug_tuple("Unfetched").field(pointer).finish(),
            Related::Fetched(element) => f.debug_tuple("Fetched").field(element).finish(),
        }
    }
}

impl<C: Cardinality> Default for Related<C> {
    fn default() -> Self {
        Related::Unknown
    }
}

/// A relationship field on a resource.
///
/// Wraps exactly one [`Related<C>`] value; links and relationship-level metadata belong here
/// too if they are ever modelled.
///
/// # Example
///
/// ```rust
/// use endpoints::framework::{Many, Pointer, Related, To};
/// use endpoints::model::Book;
///
/// let books: To<Many<Book>> = To::unfetched(vec![Pointer::new("1", "books")]);
/// assert_eq!(books.as_unfetched().map(Vec::len), Some(1));
/// assert!(books.as_fetched().is_none());
///
/// let unknown: To<Many<Book>> = To::new(Related::Unknown);
/// assert!(unknown.as_unfetched().is_none());
/// assert!(unknown.as_fetched().is_none());
/// ```
pub struct To<C: Cardinality> {
    related: Related<C>,
}

impl<C: Cardinality> To<C> {
    /// Wraps a state verbatim, `Unknown` included.
    pub fn new(related: Related<C>) -> Self {
        Self { related }
    }

    pub fn unknown() -> Self {
        Self::new(Related::Unknown)
    }

    pub fn unfetched(pointer: C::Pointer) -> Self {
        Self::new(Related::Unfetched(pointer))
    }

    pub fn fetched(element: C::Element) -> Self {
        Self::new(Related::Fetched(element))
    }

    /// Builds a `Fetched` field from fully materialized relationship data located at `path`.
    pub fn fetched_from_json(data: &Value, path: &FieldPath) -> Result<Self, DecodeErrors> {
        C::decode_element(data, path).map(Self::fetched)
    }

    pub fn related(&self) -> &Related<C> {
        &self.related
    }

    pub fn into_related(self) -> Related<C> {
        self.related
    }

    pub fn is_unknown(&self) -> bool {
        self.related.is_unknown()
    }

    /// The pointer shape if the relationship is `Unfetched`, otherwise `None`.
    pub fn as_unfetched(&self) -> Option<&C::Pointer> {
        self.related.as_unfetched()
    }

    /// The element shape if the relationship is `Fetched`, otherwise `None`.
    pub fn as_fetched(&self) -> Option<&C::Element> {
        self.related.as_fetched()
    }
}

impl<C: Cardinality> From<Related<C>> for To<C> {
    fn from(related: Related<C>) -> Self {
        Self::new(related)
    }
}

impl<C: Cardinality> Default for To<C> {
    fn default() -> Self {
        Self::unknown()
    }
}

impl<C: Cardinality> Clone for To<C> {
    fn clone(&self) -> Self {
        Self::new(self.related.clone())
    }
}

impl<C: Cardinality> PartialEq for To<C> {
    fn eq(&self, other: &Self) -> bool {
        self.related == other.related
    }
}

impl<C: Cardinality> fmt::Debug for To<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("To").field(&self.related).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::cardinality::{Many, Maybe, One};
    use crate::framework::decode::{Resource, ResourceObject};
    use crate::framework::identity::{Head, Pointer};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Shelf {
        head: Head,
    }

    impl Resource for Shelf {
        fn head(&self) -> &Head {
            &self.head
        }

        fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
            let head = ResourceObject::parse(json)?.head()?;
            Ok(Shelf { head })
        }
    }

    fn shelf(id: &str) -> Shelf {
        Shelf {
            head: Head::new(id).with_kind("shelves"),
        }
    }

    #[test]
    fn test_unfetched_accessors() {
        let to: To<One<Shelf>> = To::unfetched(Pointer::new("1", "shelves"));
        assert_eq!(to.as_unfetched(), Some(&Pointer::new("1", "shelves")));
        assert_eq!(to.as_fetched(), None);
        assert!(!to.is_unknown());
        assert_eq!(to.related().state(), "unfetched");
    }

    #[test]
    fn test_fetched_accessors() {
        let to: To<Many<Shelf>> = To::fetched(vec![shelf("1"), shelf("2")]);
        assert_eq!(to.as_fetched().map(Vec::len), Some(2));
        assert_eq!(to.as_unfetched(), None);
        assert_eq!(to.related().state(), "fetched");
    }

    #[test]
    fn test_unknown_accessors() {
        let to: To<Maybe<Shelf>> = To::new(Related::Unknown);
        assert!(to.is_unknown());
        assert_eq!(to.as_unfetched(), None);
        assert_eq!(to.as_fetched(), None);
        assert_eq!(to, To::default());
    }

    #[test]
    fn test_from_related_is_verbatim() {
        let related: Related<Maybe<Shelf>> = Related::Unfetched(None);
        let to = To::from(related.clone());
        assert_eq!(to.as_unfetched(), Some(&None));
        assert_eq!(to.into_related(), related);
    }

    #[test]
    fn test_states_are_distinct() {
        let unfetched: To<Many<Shelf>> = To::unfetched(vec![]);
        let fetched: To<Many<Shelf>> = To::fetched(vec![]);
        assert_ne!(unfetched, fetched);
        assert_ne!(unfetched, To::unknown());
    }

    #[test]
    fn test_fetched_from_json_leaves_original_untouched() {
        let original: To<One<Shelf>> = To::unfetched(Pointer::new("7", "shelves"));
        let resolved =
            To::<One<Shelf>>::fetched_from_json(&json!({"id": "7", "type": "shelves"}), &FieldPath::root())
                .unwrap();

        assert_eq!(resolved.as_fetched(), Some(&shelf("7")));
        assert_eq!(original.as_unfetched(), Some(&Pointer::new("7", "shelves")));
    }

    #[test]
    fn test_debug_output() {
        let to: To<One<Shelf>> = To::unknown();
        assert_eq!(format!("{to:?}"), "To(Unknown)");
    }
}
