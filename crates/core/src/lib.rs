//! vecview Core Library
//!
//! This crate provides the foundational utilities for the vecview client:
//! - Error handling (`AppError`, `AppResult`, `ValidationError`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, StalePolicy};
pub use logging::LogFormat;
pub use error::{AppError, AppResult, ValidationError};
