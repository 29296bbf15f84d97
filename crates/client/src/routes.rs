//! Route paths of the store API, relative to the base URL.
//!
//! Names and counts are interpolated verbatim; any percent-encoding is left
//! to the URL parser of the transport.

pub const LIST_COLLECTIONS: &str = "/api/v1/list-collections";
pub const SUPPORTED_MODELS: &str = "/api/v1/supported_models";
pub const EMBEDDINGS: &str = "/api/v1/embeddings";

pub fn documents(collection: &str) -> String {
    format!("/api/v1/collections/{}/documents", collection)
}

/// Documents route with the optional `limit` query (0 asks for everything).
pub fn documents_with_limit(collection: &str, limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("{}?limit={}", documents(collection), limit),
        None => documents(collection),
    }
}

pub fn nearest_neighbors(collection: &str, k: u32) -> String {
    format!(
        "/api/v1/collections/{}/{}/get_nearest_neighbors",
        collection, k
    )
}
