//! Store client abstraction.

use crate::connection::Connection;
use crate::types::{Collection, DocumentSet, SearchRequest};
use serde_json::Value;
use vecview_core::AppResult;

/// Trait for talking to a vector-store service.
///
/// Every method resolves its URL from [`StoreClient::connection`] at call
/// time. Any non-2xx answer is `AppError::Status`; a request that never got
/// a status is `AppError::Transport`. Response bodies of failed requests are
/// not read.
#[async_trait::async_trait]
pub trait StoreClient: Send + Sync {
    /// The connection whose base URL this client targets.
    fn connection(&self) -> &Connection;

    /// `GET /api/v1/list-collections`, in service order.
    async fn list_collections(&self) -> AppResult<Vec<Collection>>;

    /// `GET /api/v1/collections/{name}/documents`, with `?limit=` when set.
    async fn get_documents(&self, collection: &str, limit: Option<u32>)
        -> AppResult<DocumentSet>;

    /// `POST /api/v1/collections/{name}/{k}/get_nearest_neighbors`.
    async fn nearest_neighbors(
        &self,
        collection: &str,
        request: &SearchRequest,
    ) -> AppResult<DocumentSet>;

    /// `GET /api/v1/supported_models`
    async fn supported_models(&self) -> AppResult<Value>;

    /// `POST /api/v1/embeddings`
    async fn embeddings(&self, data: &str) -> AppResult<Value>;
}
