//! Immutable mapping from document keys to HTML fragments.
//!
//! DESIGN
//! ======
//! The registry is built once at startup and handed to the router by value,
//! so alternate content (test fixtures, another page's docs) never touches
//! router logic. Fragments are trusted markup and are stored verbatim.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

/// Fragment rendered when a link names a key the registry does not hold.
pub const NOT_FOUND_FRAGMENT: &str = "<h1>Documento no encontrado</h1>";

/// Key-to-fragment mapping consulted on every selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentRegistry {
    documents: HashMap<String, String>,
}

impl DocumentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any fragment already stored under `key`.
    #[must_use]
    pub fn with_document(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.documents.insert(key.into(), fragment.into());
        self
    }

    /// The fragment stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }

    /// The fragment to render for a link's key, falling back to
    /// [`NOT_FOUND_FRAGMENT`] for unknown or missing keys.
    #[must_use]
    pub fn resolve(&self, key: Option<&str>) -> &str {
        key.and_then(|key| self.get(key)).unwrap_or(NOT_FOUND_FRAGMENT)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
