//! Write-once, lazily resolved fallback policy handle.

use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};
use tcc_router_types::models::DEFAULT_POLICY_NAME;
use tcc_router_types::RoutingError;

use super::{FallbackPolicy, PolicyRegistry};
use crate::modules::config::{ConfigSource, LOADBALANCE_KEY};
use crate::router::metrics::record_policy_resolution;

/// Resolves the configured fallback policy once and caches it.
///
/// Reads after the handle is set take no lock. The slow path re-checks under a
/// mutex so concurrent first callers commit exactly one handle. A failed
/// resolution leaves the handle unset; the next call tries again.
pub struct PolicyResolver<C> {
    registry: PolicyRegistry<C>,
    config: Arc<dyn ConfigSource>,
    handle: OnceLock<Arc<dyn FallbackPolicy<C>>>,
    init_lock: Mutex<()>,
}

impl<C: 'static> PolicyResolver<C> {
    pub fn new(registry: PolicyRegistry<C>, config: Arc<dyn ConfigSource>) -> Self {
        Self { registry, config, handle: OnceLock::new(), init_lock: Mutex::new(()) }
    }

    /// Resolver whose handle is already set; `ensure_resolved` never consults config.
    pub fn fixed(policy: Arc<dyn FallbackPolicy<C>>) -> Self {
        Self {
            registry: PolicyRegistry::new(),
            config: Arc::new(crate::modules::config::MapConfigSource::new()),
            handle: OnceLock::from(policy),
            init_lock: Mutex::new(()),
        }
    }

    /// Policy name as currently configured (read on each call, not cached).
    pub fn configured_name(&self) -> String {
        self.config.get(LOADBALANCE_KEY).unwrap_or_else(|| DEFAULT_POLICY_NAME.to_string())
    }

    /// The resolved handle, if resolution has already succeeded.
    pub fn current(&self) -> Option<&Arc<dyn FallbackPolicy<C>>> {
        self.handle.get()
    }

    /// Return the cached policy, resolving it on first use.
    ///
    /// Fails with [`RoutingError::NoPolicy`] when the configured name is unknown.
    pub fn ensure_resolved(&self) -> Result<&Arc<dyn FallbackPolicy<C>>, RoutingError> {
        if let Some(policy) = self.handle.get() {
            return Ok(policy);
        }

        let _guard = self.init_lock.lock();
        if let Some(policy) = self.handle.get() {
            return Ok(policy);
        }

        let name = self.configured_name();
        match self.registry.resolve(&name) {
            Some(policy) => {
                tracing::info!(
                    policy = %name,
                    resolved = %policy.name(),
                    "Fallback load-balance policy resolved"
                );
                record_policy_resolution(&name, "resolved");
                Ok(self.handle.get_or_init(|| policy))
            },
            None => {
                tracing::warn!(
                    policy = %name,
                    available = ?self.registry.names(),
                    "No fallback load-balance policy registered under configured name"
                );
                record_policy_resolution(&name, "missing");
                Err(RoutingError::NoPolicy { name })
            },
        }
    }
}
