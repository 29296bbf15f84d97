//! Store client factory.
//!
//! Builds the HTTP client the CLI uses from the merged configuration.

use crate::client::StoreClient;
use crate::connection::Connection;
use crate::providers::HttpStoreClient;
use std::sync::Arc;
use std::time::Duration;
use vecview_core::{AppConfig, AppResult};

/// Create a store client targeting `config.base_url`.
///
/// The returned client owns a fresh [`Connection`]; edit it through
/// `client.connection()` to retarget every later request.
///
/// # Errors
/// Returns an error if the configuration is invalid or the HTTP client
/// cannot be built.
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn StoreClient>> {
    config.validate()?;

    let connection = Connection::new(config.base_url.clone());
    let client = match config.request_timeout_secs {
        Some(secs) => HttpStoreClient::with_timeout(connection, Duration::from_secs(secs))?,
        None => HttpStoreClient::new(connection),
    };

    tracing::debug!("Created store client for {}", config.base_url);
    Ok(Arc::new(client))
}
