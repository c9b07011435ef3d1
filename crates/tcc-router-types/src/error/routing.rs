//! Invoker-selection errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PolicyError;

/// Errors that can occur while choosing an invoker for a call.
///
/// Every variant is a hard stop for the current call. The router never retries;
/// the RPC call path decides whether to re-run selection with a refreshed
/// candidate list.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RoutingError {
    /// Candidate list was empty on the ordinary (non-pinned) path
    #[error("No invoker is available for selection")]
    NoCandidates,

    /// A pinned routing context named an instance that is not among the candidates
    #[error("Pinned invoker {host}:{port} is not found among candidates")]
    TargetNotFound {
        /// Host recorded in the routing context
        host: String,
        /// Port recorded in the routing context
        port: u16,
    },

    /// Fallback was required but no policy could be resolved for the configured name
    #[error("No fallback load-balance policy could be resolved for '{name}'")]
    NoPolicy {
        /// Configured policy name that failed to resolve
        name: String,
    },

    /// Error raised by the delegated fallback policy, passed through unchanged
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

impl RoutingError {
    /// `host:port` of the unreachable pinned target, if this is a `TargetNotFound`.
    pub fn target(&self) -> Option<String> {
        match self {
            Self::TargetNotFound { host, port } => Some(format!("{}:{}", host, port)),
            _ => None,
        }
    }

    /// Whether re-running selection might succeed without operator action.
    ///
    /// Router-originated failures are never retryable on their own; policy
    /// failures report their own classification.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Policy(e) => e.is_retryable(),
            Self::NoCandidates | Self::TargetNotFound { .. } | Self::NoPolicy { .. } => false,
        }
    }

    /// Whether the failure points at configuration rather than topology.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::NoPolicy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_carries_address() {
        let err = RoutingError::TargetNotFound { host: "10.0.0.9".to_string(), port: 9999 };

        assert_eq!(err.target().as_deref(), Some("10.0.0.9:9999"));
        assert!(format!("{}", err).contains("10.0.0.9:9999"));
        assert_eq!(RoutingError::NoCandidates.target(), None);
    }

    #[test]
    fn test_classification() {
        let no_policy = RoutingError::NoPolicy { name: "weighted".to_string() };
        assert!(no_policy.is_misconfiguration());
        assert!(!no_policy.is_retryable());
        assert!(!RoutingError::NoCandidates.is_retryable());

        let transient: RoutingError = PolicyError::NoEligibleCandidate {
            policy: "least_active".to_string(),
            reason: "all saturated".to_string(),
        }
        .into();
        assert!(transient.is_retryable());
        assert!(!transient.is_misconfiguration());
    }
}
