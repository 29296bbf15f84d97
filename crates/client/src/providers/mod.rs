//! Store client implementations.

pub mod http;
pub mod mock;

pub use http::HttpStoreClient;
pub use mock::{MockReply, MockStoreClient, RecordedRequest, ResponseGate};
