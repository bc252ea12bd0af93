//! In-memory OpenAPI document.
//!
//! JSON shape (only `paths` is read):
//! {
//!   "paths": {
//!     "/videos/{video_id}": {
//!       "get": { ... },          // operation descriptor, contents ignored
//!       "post": { ... }
//!     },
//!     ...
//!   }
//! }
//!
//! `paths` keeps document order (serde_json `preserve_order`), so the scan
//! visits endpoints in the order the server lists them.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The only method probed.
pub const RETRIEVAL_METHOD: &str = "get";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecDocument {
    /// Path template -> method name -> operation descriptor.
    #[serde(default)]
    pub paths: Map<String, Value>,
}

impl SpecDocument {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Number of declared paths, whatever their methods.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Path templates that declare a GET operation, in document order.
    pub fn retrieval_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.paths
            .iter()
            .filter(|(_, operations)| has_retrieval(operations))
            .map(|(path, _)| path.as_str())
    }
}

fn has_retrieval(operations: &Value) -> bool {
    operations
        .as_object()
        .is_some_and(|methods| methods.contains_key(RETRIEVAL_METHOD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_document_order() {
        let doc = SpecDocument::from_json(
            r#"{"paths": {
                "/zeta": {"get": {}},
                "/alpha": {"get": {}},
                "/mid": {"get": {}}
            }}"#,
        )
        .unwrap();
        let paths: Vec<&str> = doc.retrieval_paths().collect();
        assert_eq!(paths, vec!["/zeta", "/alpha", "/mid"]);
    }

    #[test]
    fn skips_paths_without_get() {
        let doc = SpecDocument::from_json(
            r#"{"paths": {
                "/upload": {"post": {}},
                "/videos": {"get": {}, "post": {}},
                "/items/{id}": {"delete": {}, "put": {}},
                "/ref": "not-an-object"
            }}"#,
        )
        .unwrap();
        assert_eq!(doc.path_count(), 4);
        let paths: Vec<&str> = doc.retrieval_paths().collect();
        assert_eq!(paths, vec!["/videos"]);
    }

    #[test]
    fn missing_paths_is_empty() {
        let doc = SpecDocument::from_json(r#"{"openapi": "3.1.0"}"#).unwrap();
        assert_eq!(doc.path_count(), 0);
        assert_eq!(doc.retrieval_paths().count(), 0);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(SpecDocument::from_json("[1, 2]").is_err());
        assert!(SpecDocument::from_json(r#"{"paths": []}"#).is_err());
        assert!(SpecDocument::from_json("<html>").is_err());
    }
}
