//! Fallback-policy errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a fallback load-balance policy may raise from `select`.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum PolicyError {
    /// Policy was handed an empty candidate list
    #[error("Policy {policy} cannot select from an empty candidate list")]
    EmptyCandidates { policy: String },

    /// Candidates exist but the policy rejected all of them (may clear up on retry)
    #[error("Policy {policy} found no eligible candidate: {reason}")]
    NoEligibleCandidate { policy: String, reason: String },

    /// Policy-internal failure
    #[error("Policy {policy} failed: {message}")]
    Internal { policy: String, message: String },
}

impl PolicyError {
    /// Name of the policy that raised the error.
    pub fn policy(&self) -> &str {
        match self {
            Self::EmptyCandidates { policy }
            | Self::NoEligibleCandidate { policy, .. }
            | Self::Internal { policy, .. } => policy,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoEligibleCandidate { .. })
    }
}
