//! The user-editable connection to the store.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared, mutable base URL of the vector-store service.
///
/// Clones share the same value. Clients call [`Connection::endpoint`] when a
/// request is built, so an edit is seen by the very next request and never
/// by one already in flight. The URL is not validated.
#[derive(Debug, Clone)]
pub struct Connection {
    base_url: Arc<RwLock<String>>,
}

impl Connection {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Arc::new(RwLock::new(base_url.into())),
        }
    }

    /// Current base URL.
    pub fn base_url(&self) -> String {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the base URL. Returns `true` if the value changed.
    pub fn set_base_url(&self, base_url: impl Into<String>) -> bool {
        let base_url = base_url.into();
        let mut current = self
            .base_url
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if *current == base_url {
            return false;
        }
        *current = base_url;
        true
    }

    /// Join the current base URL with an absolute route path.
    ///
    /// Plain concatenation: a trailing slash on the base is kept as typed.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_reads_current_value() {
        let connection = Connection::new("http://a:8008");
        let shared = connection.clone();

        assert_eq!(
            connection.endpoint("/api/v1/list-collections"),
            "http://a:8008/api/v1/list-collections"
        );

        assert!(shared.set_base_url("http://b:9000"));
        assert_eq!(
            connection.endpoint("/api/v1/list-collections"),
            "http://b:9000/api/v1/list-collections"
        );
    }

    #[test]
    fn test_set_same_url_reports_unchanged() {
        let connection = Connection::new("http://a:8008");
        assert!(!connection.set_base_url("http://a:8008"));
    }

    #[test]
    fn test_endpoint_does_not_normalize() {
        let connection = Connection::new("http://a:8008/");
        assert_eq!(connection.endpoint("/api"), "http://a:8008//api");
    }
}
