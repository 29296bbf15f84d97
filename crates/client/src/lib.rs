//! HTTP client crate for the vecview vector-store browser.
//!
//! This crate wraps the store's REST surface behind the [`StoreClient`]
//! trait so the browser state machine can run against the real service or
//! against a scripted [`MockStoreClient`].
//!
//! # Endpoints
//! - `GET  /api/v1/list-collections`
//! - `GET  /api/v1/collections/{name}/documents`
//! - `POST /api/v1/collections/{name}/{k}/get_nearest_neighbors`
//! - `GET  /api/v1/supported_models`
//! - `POST /api/v1/embeddings`
//!
//! # Example
//! ```no_run
//! use vecview_client::{Connection, HttpStoreClient, StoreClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpStoreClient::new(Connection::new("http://localhost:8008"));
//! for collection in client.list_collections().await? {
//!     println!("{}", collection.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connection;
pub mod factory;
pub mod providers;
pub mod routes;
pub mod types;

// Re-export main types
pub use client::StoreClient;
pub use connection::Connection;
pub use factory::create_client;
pub use providers::{HttpStoreClient, MockReply, MockStoreClient, RecordedRequest, ResponseGate};
pub use types::{Collection, DocumentSet, EmbeddingRequest, QueryBody, SearchRequest};
