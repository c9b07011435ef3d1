//! Router configuration model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Policy name used when nothing is configured.
pub const DEFAULT_POLICY_NAME: &str = "default";

/// Router configuration.
///
/// Read once: the fallback policy name is resolved on first delegation and kept
/// for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RouterConfig {
    /// Name of the fallback load-balance policy
    #[validate(length(min = 1, max = 64, message = "policy name must be 1-64 characters"))]
    #[serde(default = "default_loadbalance")]
    pub loadbalance: String,
    /// Prefer candidates that already host an enlisted participant of the active transaction.
    /// When disabled, ordinary calls always go to the fallback policy.
    #[serde(default = "default_true")]
    pub participant_affinity: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { loadbalance: default_loadbalance(), participant_affinity: true }
    }
}

fn default_loadbalance() -> String {
    DEFAULT_POLICY_NAME.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: RouterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, RouterConfig::default());
        assert_eq!(cfg.loadbalance, "default");
        assert!(cfg.participant_affinity);
    }

    #[test]
    fn test_empty_policy_name_fails_validation() {
        let cfg = RouterConfig { loadbalance: String::new(), participant_affinity: true };
        assert!(cfg.validate().is_err());
        assert!(RouterConfig::default().validate().is_ok());
    }
}
