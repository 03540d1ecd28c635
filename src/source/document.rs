//! # Documents
//!
//! A document is the top-level JSON envelope a resource arrives in. Its primary data sits under
//! `data`, either as a single resource object or as an array of them:
//!
//! ```json
//! { "data": { "id": "1", "type": "stores", "attributes": { "name": "empty store" } } }
//! ```
//!
//! Parsing the envelope is serde's job; decoding `data` goes through the
//! [`Resource`](crate::framework::Resource) pipeline. Error paths from a document are rooted at
//! the document, so they start with `data`.

use crate::framework::decode::entity_type;
use crate::framework::{DecodeError, DecodeErrors, FieldPath, Resource};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

/// A parsed top-level document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Primary data. A missing member reads as `null`.
    #[serde(default)]
    data: Value,
}

impl Document {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Decodes the primary data as a single resource.
    pub fn decode<R: Resource>(&self) -> Result<R, DecodeErrors> {
        let data = FieldPath::root().key("data");
        R::decode(&self.data).map_err(|errors| {
            warn!(entity_type = entity_type::<R>(), errors = errors.len(), "Document rejected");
            errors.prefixed(&data)
        })
    }

    /// Decodes the primary data as a collection of resources.
    ///
    /// `null` is an empty collection. Every element is decoded; failures from all of them are
    /// reported together, each under its `data[i]` path.
    pub fn decode_all<R: Resource>(&self) -> Result<Vec<R>, DecodeErrors> {
        let entity_type = entity_type::<R>();
        let data = FieldPath::root().key("data");
        let items = match &self.data {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => {
                return Err(DecodeError::mismatch(data, "array of resource objects", other).into())
            }
        };

        let mut errors = DecodeErrors::default();
        let resources: Vec<R> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                errors.absorb(R::decode(item).map_err(|e| e.prefixed(&data.index(i))))
            })
            .collect();

        match errors.into_result(resources) {
            Ok(resources) => {
                debug!(entity_type, count = resources.len(), "Decoded collection");
                Ok(resources)
            }
            Err(errors) => {
                warn!(entity_type, errors = errors.len(), "Document rejected");
                Err(errors)
            }
        }
    }
}

impl FromStr for Document {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ErrorKind;
    use crate::model::Store;
    use serde_json::json;

    #[test]
    fn test_decode_single() {
        let document: Document =
            r#"{"data": {"id": "1", "type": "stores", "attributes": {"name": "empty store"}}}"#
                .parse()
                .unwrap();
        let store: Store = document.decode().unwrap();
        assert_eq!(store.head.id, "1");
        assert!(store.books.is_unknown());
    }

    #[test]
    fn test_decode_paths_are_rooted_at_data() {
        let document = Document::new(json!({"id": "1", "type": "stores"}));
        let errors = document.decode::<Store>().unwrap_err();
        assert_eq!(errors.errors()[0].path().to_string(), "data.attributes.name");
    }

    #[test]
    fn test_missing_data_reads_as_null() {
        let document: Document = r#"{"meta": {"count": 0}}"#.parse().unwrap();
        assert_eq!(document.data(), &Value::Null);
        assert_eq!(document.decode_all::<Store>().unwrap(), vec![]);

        let errors = document.decode::<Store>().unwrap_err();
        assert_eq!(errors.errors()[0].kind(), ErrorKind::TypeMismatch);
        assert_eq!(errors.errors()[0].path().to_string(), "data");
    }

    #[test]
    fn test_decode_all_accumulates_across_elements() {
        let document = Document::new(json!([
            {"id": "1", "attributes": {"name": "one"}},
            {"attributes": {"name": "two"}},
            {"id": "3", "attributes": {}},
        ]));
        let errors = document.decode_all::<Store>().unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, vec!["data[1].id", "data[2].attributes.name"]);
    }

    #[test]
    fn test_decode_all_rejects_single_object() {
        let document = Document::new(json!({"id": "1", "attributes": {"name": "one"}}));
        let errors = document.decode_all::<Store>().unwrap_err();
        assert_eq!(errors.errors()[0].kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Document::from_slice(b"{\"data\": ").is_err());
    }
}
