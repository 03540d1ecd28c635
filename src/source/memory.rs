//! # In-Memory Source
//!
//! [`MemorySource`] holds documents as JSON values. It is the test double for
//! [`DocumentSource`]: fast, deterministic, and able to serve malformed documents that would be
//! awkward to keep on disk.

use super::{Document, DocumentSource, SourceError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Documents keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemorySource::insert`].
    pub fn with_document(mut self, name: impl Into<String>, json: Value) -> Self {
        self.insert(name, json);
        self
    }

    /// Stores `json` under `name`, replacing any previous document.
    pub fn insert(&mut self, name: impl Into<String>, json: Value) {
        self.documents.insert(name.into(), json);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Document, SourceError> {
        let json = self
            .documents
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))?;
        debug!(name, "Serving document from memory");
        Document::from_value(json).map_err(|source| SourceError::Parse {
            name: name.to_string(),
            source,
        })
    }
}
