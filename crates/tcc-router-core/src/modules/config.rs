//! Router configuration: key/value sources and the JSON config file.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tcc_router_types::{ConfigError, RouterConfig};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Key holding the fallback load-balance policy name.
pub const LOADBALANCE_KEY: &str = "tcc.router.loadbalance";

/// Key toggling participant affinity on the ordinary path.
pub const PARTICIPANT_AFFINITY_KEY: &str = "tcc.router.participant-affinity";

/// Read-only key/value configuration lookup.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Boolean lookup accepting `true/false/1/0/yes/no` (case-insensitive).
    fn get_bool(&self, key: &str) -> Option<bool> {
        let raw = self.get(key)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => {
                tracing::warn!(key = %key, value = %raw, "Ignoring non-boolean config value");
                None
            },
        }
    }
}

impl ConfigSource for RouterConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LOADBALANCE_KEY => Some(self.loadbalance.clone()),
            PARTICIPANT_AFFINITY_KEY => Some(self.participant_affinity.to_string()),
            _ => None,
        }
    }
}

/// Environment-variable source: `tcc.router.loadbalance` → `TCC_ROUTER_LOADBALANCE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    pub fn env_var_name(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect()
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(Self::env_var_name(key)).ok().filter(|v| !v.trim().is_empty())
    }
}

/// In-memory source, mostly for embedding and tests.
#[derive(Debug, Default)]
pub struct MapConfigSource {
    values: RwLock<HashMap<String, String>>,
}

impl MapConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }
}

impl ConfigSource for MapConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

/// Load router configuration from a JSON file.
///
/// A missing file yields defaults. Parse and validation failures are reported,
/// never silently defaulted.
pub fn load_config(path: &Path) -> AppResult<RouterConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Router config not found, using defaults");
            return Ok(RouterConfig::default());
        },
        Err(e) => {
            return Err(AppError::Config(ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            }))
        },
    };

    let config: RouterConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

    tracing::debug!(
        path = %path.display(),
        loadbalance = %config.loadbalance,
        participant_affinity = config.participant_affinity,
        "Router config loaded"
    );
    Ok(config)
}

/// Save router configuration atomically (temp file + rename).
pub fn save_config(path: &Path, config: &RouterConfig) -> AppResult<()> {
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

    let content = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp config file");
        }
        return Err(ConfigError::from_io_error(&e).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_name_mapping() {
        assert_eq!(EnvConfigSource::env_var_name(LOADBALANCE_KEY), "TCC_ROUTER_LOADBALANCE");
        assert_eq!(
            EnvConfigSource::env_var_name(PARTICIPANT_AFFINITY_KEY),
            "TCC_ROUTER_PARTICIPANT_AFFINITY"
        );
    }

    #[test]
    fn test_router_config_as_source() {
        let cfg = RouterConfig { loadbalance: "round_robin".to_string(), participant_affinity: false };
        assert_eq!(cfg.get(LOADBALANCE_KEY).as_deref(), Some("round_robin"));
        assert_eq!(cfg.get_bool(PARTICIPANT_AFFINITY_KEY), Some(false));
        assert_eq!(cfg.get("unknown.key"), None);
    }

    #[test]
    fn test_map_source_bool_parsing() {
        let source = MapConfigSource::new().with("a", "YES").with("b", "off").with("c", "maybe");
        assert_eq!(source.get_bool("a"), Some(true));
        assert_eq!(source.get_bool("b"), Some(false));
        assert_eq!(source.get_bool("c"), None);
        assert_eq!(source.get_bool("d"), None);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("router.json")).unwrap();
        assert_eq!(cfg, RouterConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("router.json");
        let cfg =
            RouterConfig { loadbalance: "consistent_hash".to_string(), participant_affinity: true };

        save_config(&path, &cfg).unwrap();
        assert_eq!(load_config(&path).unwrap(), cfg);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let path = dir.path().join("router.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        match save_config(&path, &RouterConfig::default()) {
            Err(AppError::Config(ConfigError::WriteError { .. })) => {},
            other => panic!("expected write error, got {other:?}"),
        }
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_rejects_invalid_json_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("router.json");

        fs::write(&path, "{ not json").unwrap();
        match load_config(&path) {
            Err(AppError::Config(ConfigError::ParseError { .. })) => {},
            other => panic!("expected parse error, got {other:?}"),
        }

        fs::write(&path, r#"{"loadbalance": ""}"#).unwrap();
        match load_config(&path) {
            Err(AppError::Config(ConfigError::ValidationError { field, .. })) => {
                assert_eq!(field, "loadbalance");
            },
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
