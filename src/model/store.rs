use crate::framework::{DecodeErrors, Head, Many, Resource, ResourceObject, To};
use crate::model::Book;
use serde_json::Value;

/// Represents a store that stocks books.
///
/// # Resource
/// Published under the `stores` type.
///
/// | Member | Field |
/// |--------|-------|
/// | `attributes.name` | [`Store::name`] (required) |
/// | `relationships.books` | [`Store::books`] |
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub head: Head,
    pub name: String,
    pub books: To<Many<Book>>,
}

impl Store {
    /// Creates a store whose stock is not yet known.
    ///
    /// # Arguments
    /// * `head` - Identity of the store
    /// * `name` - Display name
    pub fn new(head: Head, name: impl Into<String>) -> Self {
        Self {
            head,
            name: name.into(),
            books: To::unknown(),
        }
    }

    /// Returns a copy of this store with its `books` relationship replaced.
    pub fn with_books(&self, books: To<Many<Book>>) -> Self {
        Self {
            books,
            ..self.clone()
        }
    }
}

impl Resource for Store {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let name = object.attribute("name");
        let books = object.relationship("books");
        let (head, name, books) = crate::accumulate!(head, name, books)?;
        Ok(Self { head, name, books })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Pointer;

    #[test]
    fn test_with_books_leaves_original_untouched() {
        let store = Store::new(Head::new("1").with_kind("stores"), "corner store");
        let stocked = store.with_books(To::unfetched(vec![Pointer::new("3", "books")]));

        assert!(store.books.is_unknown());
        assert_eq!(stocked.books.as_unfetched().map(Vec::len), Some(1));
        assert_eq!(stocked.name, store.name);
    }
}
