//! Scriptable in-memory store client for tests and offline demos.

use crate::client::StoreClient;
use crate::connection::Connection;
use crate::routes;
use crate::types::{Collection, DocumentSet, EmbeddingRequest, SearchRequest};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use vecview_core::{AppError, AppResult};

/// What the mock answers for one URL.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with this body
    Json(Value),
    /// A non-2xx status
    Status(u16),
    /// A failure before any status existed
    Transport(String),
}

/// A request as the mock saw it, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Holds back one response until released.
///
/// Dropping the gate releases it as well.
#[derive(Debug)]
pub struct ResponseGate {
    tx: oneshot::Sender<()>,
}

impl ResponseGate {
    pub fn release(self) {
        let _ = self.tx.send(());
    }
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, MockReply>,
    gates: HashMap<String, VecDeque<oneshot::Receiver<()>>>,
    requests: Vec<RecordedRequest>,
}

/// Mock store for testing and development.
///
/// Replies are keyed on the full request URL, so a base-URL change routes to
/// a different set of answers. Unknown URLs answer 404. The reply is looked
/// up when the response is produced, after any gate has opened.
pub struct MockStoreClient {
    connection: Connection,
    state: Mutex<MockState>,
}

impl MockStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_connection(Connection::new(base_url))
    }

    pub fn with_connection(connection: Connection) -> Self {
        Self {
            connection,
            state: Mutex::new(MockState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `path` under the current base URL.
    pub fn reply(&self, path: &str, reply: MockReply) -> &Self {
        self.reply_at(self.connection.endpoint(path), reply)
    }

    /// Answer an absolute URL.
    pub fn reply_at(&self, url: impl Into<String>, reply: MockReply) -> &Self {
        self.lock().replies.insert(url.into(), reply);
        self
    }

    /// Serve `names` from `list-collections`.
    pub fn with_collections(&self, names: &[&str]) -> &Self {
        let body = Value::Array(
            names
                .iter()
                .map(|name| serde_json::json!({ "name": name }))
                .collect(),
        );
        self.reply(routes::LIST_COLLECTIONS, MockReply::Json(body))
    }

    /// Serve `documents` for one collection.
    pub fn with_documents(&self, collection: &str, documents: Value) -> &Self {
        self.reply(&routes::documents(collection), MockReply::Json(documents))
    }

    /// Serve search results for one collection and `k`.
    pub fn with_search(&self, collection: &str, k: u32, results: Value) -> &Self {
        self.reply(
            &routes::nearest_neighbors(collection, k),
            MockReply::Json(results),
        )
    }

    /// Hold the next response for `path` (current base URL) until released.
    ///
    /// Gates queue per URL: the first request to that URL waits on the first
    /// gate taken, the second on the second, and so on.
    pub fn hold(&self, path: &str) -> ResponseGate {
        let url = self.connection.endpoint(path);
        let (tx, rx) = oneshot::channel();
        self.lock().gates.entry(url).or_default().push_back(rx);
        ResponseGate { tx }
    }

    /// Every request issued so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    async fn respond(
        &self,
        method: &'static str,
        url: String,
        body: Option<Value>,
    ) -> AppResult<Value> {
        tracing::debug!("mock {} {}", method, url);

        let gate = {
            let mut state = self.lock();
            state.requests.push(RecordedRequest {
                method,
                url: url.clone(),
                body,
            });
            state.gates.get_mut(&url).and_then(VecDeque::pop_front)
        };

        if let Some(gate) = gate {
            // A dropped sender counts as a release
            let _ = gate.await;
        }

        let reply = self.lock().replies.get(&url).cloned();
        match reply.unwrap_or(MockReply::Status(404)) {
            MockReply::Json(value) => Ok(value),
            MockReply::Status(status) => Err(AppError::Status { status, url }),
            MockReply::Transport(message) => Err(AppError::Transport(message)),
        }
    }
}

#[async_trait::async_trait]
impl StoreClient for MockStoreClient {
    fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn list_collections(&self) -> AppResult<Vec<Collection>> {
        let url = self.connection.endpoint(routes::LIST_COLLECTIONS);
        let value = self.respond("GET", url, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<u32>,
    ) -> AppResult<DocumentSet> {
        let url = self
            .connection
            .endpoint(&routes::documents_with_limit(collection, limit));
        self.respond("GET", url, None).await
    }

    async fn nearest_neighbors(
        &self,
        collection: &str,
        request: &SearchRequest,
    ) -> AppResult<DocumentSet> {
        let url = self
            .connection
            .endpoint(&routes::nearest_neighbors(collection, request.k));
        let body = serde_json::to_value(request.body())?;
        self.respond("POST", url, Some(body)).await
    }

    async fn supported_models(&self) -> AppResult<Value> {
        let url = self.connection.endpoint(routes::SUPPORTED_MODELS);
        self.respond("GET", url, None).await
    }

    async fn embeddings(&self, data: &str) -> AppResult<Value> {
        let url = self.connection.endpoint(routes::EMBEDDINGS);
        let body = serde_json::to_value(EmbeddingRequest { data })?;
        self.respond("POST", url, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mock_serves_scripted_collections() {
        let mock = MockStoreClient::new("http://mock");
        mock.with_collections(&["b", "a"]);

        let names: Vec<String> = mock
            .list_collections()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(
            mock.requests()[0],
            RecordedRequest {
                method: "GET",
                url: "http://mock/api/v1/list-collections".to_string(),
                body: None,
            }
        );
    }

    #[tokio::test]
    async fn test_mock_unknown_url_is_404() {
        let mock = MockStoreClient::new("http://mock");
        let err = mock.get_documents("missing", None).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_mock_records_search_body() {
        let mock = MockStoreClient::new("http://mock");
        mock.with_search("notes", 2, json!([["doc"]]));

        let result = mock
            .nearest_neighbors("notes", &SearchRequest::new("hi", 2))
            .await
            .unwrap();
        assert_eq!(result, json!([["doc"]]));

        let request = &mock.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(
            request.url,
            "http://mock/api/v1/collections/notes/2/get_nearest_neighbors"
        );
        assert_eq!(request.body, Some(json!({"query": "hi"})));
    }

    #[tokio::test]
    async fn test_mock_transport_reply() {
        let mock = MockStoreClient::new("http://mock");
        mock.reply(
            routes::SUPPORTED_MODELS,
            MockReply::Transport("connection refused".to_string()),
        );
        let err = mock.supported_models().await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[tokio::test]
    async fn test_gate_holds_response_until_released() {
        let mock = Arc::new(MockStoreClient::new("http://mock"));
        mock.with_documents("a", json!(["first"]));
        let gate = mock.hold(&routes::documents("a"));

        let task = {
            let mock = Arc::clone(&mock);
            tokio::spawn(async move { mock.get_documents("a", None).await })
        };

        tokio::task::yield_now().await;
        assert_eq!(mock.request_count(), 1);
        assert!(!task.is_finished());

        gate.release();
        assert_eq!(task.await.unwrap().unwrap(), json!(["first"]));
    }
}
