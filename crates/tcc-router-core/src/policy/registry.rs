use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tcc_router_types::models::DEFAULT_POLICY_NAME;
use tcc_router_types::Invoker;

use super::{ConsistentHashPolicy, FallbackPolicy, FirstPolicy, RandomPolicy, RoundRobinPolicy};

/// Constructs a policy instance. Must be side-effect free and deterministic for
/// a given name: concurrent first use may build an instance that is discarded.
pub type PolicyFactory<C> = Arc<dyn Fn() -> Arc<dyn FallbackPolicy<C>> + Send + Sync>;

/// Name → policy factory table, assembled at composition time.
pub struct PolicyRegistry<C> {
    factories: HashMap<String, PolicyFactory<C>>,
}

impl<C> Clone for PolicyRegistry<C> {
    fn clone(&self) -> Self {
        Self { factories: self.factories.clone() }
    }
}

impl<C> Default for PolicyRegistry<C> {
    fn default() -> Self {
        Self { factories: HashMap::new() }
    }
}

impl<C: 'static> fmt::Debug for PolicyRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry").field("policies", &self.names()).finish()
    }
}

impl<C: 'static> PolicyRegistry<C> {
    /// Empty registry; nothing resolves until policies are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Arc<dyn FallbackPolicy<C>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Arc::new(factory)).is_some() {
            tracing::debug!(policy = %name, "Policy registry: replaced existing entry");
        }
        self
    }

    /// Register a shared instance; every resolution hands out the same `Arc`.
    pub fn register_instance(
        &mut self,
        name: impl Into<String>,
        policy: Arc<dyn FallbackPolicy<C>>,
    ) -> &mut Self {
        self.register(name, move || Arc::clone(&policy))
    }

    /// Builds a fresh policy for `name`, or `None` for an unknown name.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn FallbackPolicy<C>>> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

impl<C: Invoker + 'static> PolicyRegistry<C> {
    /// Registry pre-populated with the bundled policies:
    /// `default` and `random` (uniform random), `round_robin`, `consistent_hash`, `first`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(DEFAULT_POLICY_NAME, || Arc::new(RandomPolicy))
            .register(RandomPolicy::NAME, || Arc::new(RandomPolicy))
            .register(RoundRobinPolicy::NAME, || Arc::new(RoundRobinPolicy::new()))
            .register(ConsistentHashPolicy::NAME, || Arc::new(ConsistentHashPolicy::default()))
            .register(FirstPolicy::NAME, || Arc::new(FirstPolicy));
        registry
    }
}
