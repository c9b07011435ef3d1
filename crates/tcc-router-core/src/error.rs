//! Unified error types for TCC Router Core.

use serde::Serialize;
use tcc_router_types::{ConfigError, RoutingError};
use thiserror::Error;

/// Main error type for operations outside the per-call selection path
/// (configuration loading, router assembly).
///
/// Selection itself returns [`RoutingError`] directly.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Invoker selection failed.
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for router operations.
pub type AppResult<T> = Result<T, AppError>;
