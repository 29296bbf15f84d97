//! Error types for the vecview client.
//!
//! This module defines a unified error enum that covers every error category
//! the client can hit: configuration, I/O, transport failures, non-2xx
//! responses from the store, and search input validation.

use thiserror::Error;

/// Unified error type for the vecview client.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// The interactive browser never lets one of these escape: it renders the
/// `Display` text inline instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request never produced a status (connection refused, bad URL, ...)
    #[error("{0}")]
    Transport(String),

    /// The store answered with a status outside 2xx
    #[error("HTTP error! status: {status}")]
    Status { status: u16, url: String },

    /// Search input rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// The HTTP status carried by a `Status` error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Reasons a search is refused before it reaches the network.
///
/// Variants are checked in declaration order; the first failing check wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a collection first")]
    NoActiveCollection,

    #[error("Please enter a search query")]
    EmptyQuery,

    #[error("Please enter a valid k (a whole number of at least 1)")]
    InvalidK,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
