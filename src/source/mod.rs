//! # Document Sources
//!
//! Where documents come from is not the decoder's concern. This module defines the seam
//! ([`DocumentSource`]) and two implementations:
//!
//! - [`FixtureDir`] - reads `<root>/<name>.json` from disk
//! - [`MemorySource`] - serves documents held in memory, for tests
//!
//! A network-backed source would implement the same trait.
//!
//! ## Usage
//!
//! ```rust
//! use endpoints::model::Store;
//! use endpoints::source::{DocumentSource, MemorySource};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = MemorySource::new().with_document(
//!         "EmptyStore",
//!         json!({"data": {"id": "1", "type": "stores", "attributes": {"name": "empty store"}}}),
//!     );
//!
//!     let store: Store = source.fetch_resource("EmptyStore").await.unwrap();
//!     assert_eq!(store.name, "empty store");
//! }
//! ```

pub mod document;
pub mod fixture;
pub mod memory;

pub use document::Document;
pub use fixture::FixtureDir;
pub use memory::MemorySource;

use crate::framework::{DecodeErrors, Resource};
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while retrieving or decoding a document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No document is stored under the requested name.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The document exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or not a JSON object.
    #[error("Invalid document {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its primary data did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeErrors),
}

/// Trait for anything that can hand out documents by name.
///
/// Implementors provide [`DocumentSource::fetch`]; [`DocumentSource::fetch_resource`] and
/// [`DocumentSource::fetch_collection`] are built on top of it.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve and parse the document stored under `name`.
    async fn fetch(&self, name: &str) -> Result<Document, SourceError>;

    /// Retrieve a document and decode its primary data as one resource.
    #[tracing::instrument(skip(self))]
    async fn fetch_resource<R>(&self, name: &str) -> Result<R, SourceError>
    where
        R: Resource + Send + 'static,
    {
        tracing::debug!("Fetching document");
        let document = self.fetch(name).await?;
        Ok(document.decode::<R>()?)
    }

    /// Retrieve a document and decode its primary data as a collection.
    #[tracing::instrument(skip(self))]
    async fn fetch_collection<R>(&self, name: &str) -> Result<Vec<R>, SourceError>
    where
        R: Resource + Send + 'static,
    {
        tracing::debug!("Fetching document");
        let document = self.fetch(name).await?;
        Ok(document.decode_all::<R>()?)
    }
}
