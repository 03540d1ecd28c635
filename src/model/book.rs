//! The [`Book`] resource.

use crate::framework::{DecodeErrors, Head, Many, Maybe, One, Resource, ResourceObject, To};
use crate::model::{Author, Chapter, Photo, Series, Store};
use serde_json::Value;
use time::Date;

/// Represents a published book.
///
/// # Resource
/// Published under the `books` type. `title` and `published` (`YYYY-MM-DD`) are required
/// attributes. A book always has an `author`, may belong to a `series`, and has any number of
/// `chapters`, `photos` and `stores` carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub head: Head,
    pub title: String,
    pub published: Date,
    pub author: To<One<Author>>,
    pub series: To<Maybe<Series>>,
    pub chapters: To<Many<Chapter>>,
    pub photos: To<Many<Photo>>,
    pub stores: To<Many<Store>>,
}

impl Resource for Book {
    fn head(&self) -> &Head {
        &self.head
    }

    fn from_json(json: &Value) -> Result<Self, DecodeErrors> {
        let object = ResourceObject::parse(json)?;
        let head = object.head();
        let title = object.attribute("title");
        let published = object.attribute("published");
        let author = object.relationship("author");
        let series = object.relationship("series");
        let chapters = object.relationship("chapters");
        let photos = object.relationship("photos");
        let stores = object.relationship("stores");

        let (head, title, published, author, series, chapters, photos, stores) = crate::accumulate!(
            head, title, published, author, series, chapters, photos, stores
        )?;

        Ok(Self {
            head,
            title,
            published,
            author,
            series,
            chapters,
            photos,
            stores,
        })
    }
}
