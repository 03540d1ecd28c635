use crate::framework::{DecodeErrors, Head, One, Resource, ResourceObject, To};
use crate::model::Book;
use serde_json::Value;

/// One chapter of a [`Book`].
///
/// `ordering` is the chapter's position within the book; the document is not required to list
/// chapters in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub head: Head,
    pub title: String,
    pub ordering: i64,
    pub book: To<One<Book>>,
}

impl Resource for Chapter {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let title = object.attribute("title");
        let ordering = object.attribute("ordering");
        let book = object.relationship("book");
        let (head, title, ordering, book) = crate::accumulate!(head, title, ordering, book)?;
        Ok(Self {
            head,
            title,
            ordering,
            book,
        })
    }
}
