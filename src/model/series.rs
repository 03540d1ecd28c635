use crate::framework::{DecodeErrors, Head, Many, Resource, ResourceObject, To};
use crate::model::Book;
use serde_json::Value;

/// A named series of books.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub head: Head,
    pub title: String,
    pub books: To<Many<Book>>,
}

impl Resource for Series {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let title = object.attribute("title");
        let books = object.relationship("books");
        let (head, title, books) = crate::accumulate!(head, title, books)?;
        Ok(Self { head, title, books })
    }
}
