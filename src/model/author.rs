use crate::framework::{DecodeErrors, Head, Many, Resource, ResourceObject, To};
use crate::model::{Book, Photo};
use serde_json::Value;
use time::Date;

/// Represents the author of one or more books.
///
/// `death` is optional; every other attribute is required.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub head: Head,
    pub name: String,
    pub birth: Date,
    pub death: Option<Date>,
    pub books: To<Many<Book>>,
    pub photos: To<Many<Photo>>,
}

impl Author {
    /// Whether the document records a date of death.
    pub fn is_living(&self) -> bool {
        self.death.is_none()
    }
}

impl Resource for Author {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let name = object.attribute("name");
        let birth = object.attribute("birth");
        let death = object.attribute("death");
        let books = object.relationship("books");
        let photos = object.relationship("photos");

        let (head, name, birth, death, books, photos) =
            crate::accumulate!(head, name, birth, death, books, photos)?;

        Ok(Self {
            head,
            name,
            birth,
            death,
            books,
            photos,
        })
    }
}
