//! reqwest-backed store client.

use crate::client::StoreClient;
use crate::connection::Connection;
use crate::routes;
use crate::types::{Collection, DocumentSet, EmbeddingRequest, SearchRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use vecview_core::{AppError, AppResult};

/// Store client speaking JSON over HTTP.
pub struct HttpStoreClient {
    /// Shared base URL, read per request
    connection: Connection,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpStoreClient {
    /// Create a client with the transport's default timeouts.
    pub fn new(connection: Connection) -> Self {
        Self {
            connection,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(connection: Connection, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { connection, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = self.connection.endpoint(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::read_json(response, &url).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.connection.endpoint(path);
        tracing::debug!("POST {}", url);

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to reach {}: {}", url, e)))?;

        Self::read_json(response, &url).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response, url: &str) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered {}", url, status);
            return Err(AppError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read body from {}: {}", url, e)))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Serialization(format!("Invalid JSON from {}: {}", url, e))
        })
    }
}

#[async_trait::async_trait]
impl StoreClient for HttpStoreClient {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn list_collections(&self) -> AppResult<Vec<Collection>> {
        let collections: Vec<Collection> = self.get_json(routes::LIST_COLLECTIONS).await?;
        tracing::info!("Fetched {} collections", collections.len());
        Ok(collections)
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<u32>,
    ) -> AppResult<DocumentSet> {
        self.get_json(&routes::documents_with_limit(collection, limit))
            .await
    }

    async fn nearest_neighbors(
        &self,
        collection: &str,
        request: &SearchRequest,
    ) -> AppResult<DocumentSet> {
        tracing::info!(
            "Searching '{}' for {} nearest neighbors",
            collection,
            request.k
        );
        self.post_json(
            &routes::nearest_neighbors(collection, request.k),
            &request.body(),
        )
        .await
    }

    async fn supported_models(&self) -> AppResult<Value> {
        self.get_json(routes::SUPPORTED_MODELS).await
    }

    async fn embeddings(&self, data: &str) -> AppResult<Value> {
        self.post_json(routes::EMBEDDINGS, &EmbeddingRequest { data })
            .await
    }
}
