//! Typed error definitions for the TCC router.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for diagnostics via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod config;
mod policy;
mod routing;

pub use config::ConfigError;
pub use policy::PolicyError;
pub use routing::RoutingError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when you need a single error type that can represent
/// any router error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps an invoker-selection error
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Routing(RoutingError::TargetNotFound {
            host: "10.0.0.9".to_string(),
            port: 9999,
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Routing"));
        assert!(json.contains("10.0.0.9"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_policy_error_passes_through_routing_error() {
        let policy_err = PolicyError::EmptyCandidates { policy: "random".to_string() };
        let err: RoutingError = policy_err.clone().into();

        assert_eq!(err, RoutingError::Policy(policy_err));
        assert!(format!("{}", err).contains("random"));
    }
}
