//! Wire types of the store API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document payloads are never interpreted, only pretty-printed.
pub type DocumentSet = Value;

/// One entry of `list-collections`.
///
/// Only `name` is read; every other field the service sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A validated kNN search: non-empty query, `k >= 1`.
///
/// Built per search action and dropped once the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub k: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, k: u32) -> Self {
        Self {
            query: query.into(),
            k,
        }
    }

    /// JSON body of the nearest-neighbors POST.
    pub fn body(&self) -> QueryBody<'_> {
        QueryBody { query: &self.query }
    }
}

/// `{"query": ...}`
#[derive(Debug, Serialize)]
pub struct QueryBody<'a> {
    pub query: &'a str,
}

/// `{"data": ...}`, the body of the embeddings endpoint.
#[derive(Debug, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub data: &'a str,
}
