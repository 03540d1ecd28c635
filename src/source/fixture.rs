//! # Fixture Directory
//!
//! Serves documents stored as `<root>/<name>.json`, read with `tokio::fs`.

use super::{Document, DocumentSource, SourceError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A directory of JSON documents.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the document named `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl DocumentSource for FixtureDir {
    #[instrument(skip(self))]
    async fn fetch(&self, name: &str) -> Result<Document, SourceError> {
        // Names are plain file stems; anything that could leave the directory is not a fixture.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(SourceError::NotFound(name.to_string()));
        }

        let path = self.path_for(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(name.to_string()))
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };
        debug!(path = %path.display(), size = bytes.len(), "Read fixture");

        Document::from_slice(&bytes).map_err(|source| SourceError::Parse {
            name: name.to_string(),
            source,
        })
    }
}
