//! The [`Photo`] resource and the polymorphic [`Imageable`] it belongs to.

use crate::framework::attribute::member;
use crate::framework::{
    DecodeError, DecodeErrors, FieldPath, Head, One, Resource, ResourceObject, To,
};
use crate::model::{Author, Book};
use serde_json::Value;
use url::Url;

/// A photo of an author or of a book.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub head: Head,
    pub title: String,
    pub uri: Url,
    pub imageable: To<One<Imageable>>,
}

impl Resource for Photo {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let title = object.attribute("title");
        let uri = object.attribute("uri");
        let imageable = object.relationship("imageable");
        let (head, title, uri, imageable) = crate::accumulate!(head, title, uri, imageable)?;
        Ok(Self {
            head,
            title,
            uri,
            imageable,
        })
    }
}

/// Anything a [`Photo`] can depict.
///
/// # Polymorphism
/// Unlike the other resources, the concrete shape is chosen by the resource object's `type`
/// tag, so the tag is required here:
///
/// | `type` | Variant |
/// |--------|---------|
/// | `authors` | [`Imageable::Author`] |
/// | `books` | [`Imageable::Book`] |
///
/// While `Unfetched`, a photo's `imageable` relationship is just a [`Pointer`](crate::framework::Pointer)
/// whose `kind` tells the two cases apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Imageable {
    Author(Author),
    Book(Book),
}

impl Imageable {
    pub const AUTHORS: &'static str = "authors";
    pub const BOOKS: &'static str = "books";
}

impl Resource for Imageable {
    fn head(&self) -> &Head {
        match self {
            Imageable::Author(author) => author.head(),
            Imageable::Book(book) => book.head(),
        }
    }

    /// Checks `id` and the `type` tag together, then decodes the variant the tag names.
    ///
    /// Attributes and relationships are only read once the variant is known.
    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let id = member::<String>(json.as_object(), "id", &FieldPath::root());
        let tag = Self::tag(object.kind(), json.get("type"));
        let (_id, tag) = crate::accumulate!(id, tag)?;
        match tag {
            Self::AUTHORS => Author::decode(json).map(Imageable::Author),
            _ => Book::decode(json).map(Imageable::Book),
        }
    }
}

impl Imageable {
    /// Resolves the `type` tag to one of [`Imageable::AUTHORS`] or [`Imageable::BOOKS`].
    fn tag(kind: Option<&str>, raw: Option<&Value>) -> Result<&'static str, DecodeErrors> {
        let path = FieldPath::root().key("type");
        match (kind, raw) {
            (Some(Self::AUTHORS), _) => Ok(Self::AUTHORS),
            (Some(Self::BOOKS), _) => Ok(Self::BOOKS),
            (Some(other), _) => Err(DecodeError::invalid(
                path,
                format!("`{other}` is not an imageable type (expected `authors` or `books`)"),
            )
            .into()),
            (None, None) => Err(DecodeError::missing(path).into()),
            (None, Some(found)) => Err(DecodeError::mismatch(path, "string", found).into()),
        }
    }
}
