//! Fallback load-balance policies.
//!
//! The affinity router only guarantees transaction affinity; every other
//! decision is delegated to a [`FallbackPolicy`] resolved by name:
//!
//! ```text
//! RouterConfig / ConfigSource ──name──▶ PolicyRegistry ──▶ PolicyResolver (write-once)
//!                                                               │
//!                                        AffinityRouter ◀───────┘
//! ```

mod consistent_hash;
mod first;
mod random;
mod registry;
mod resolver;
mod round_robin;


pub use consistent_hash::ConsistentHashPolicy;
pub use first::FirstPolicy;
pub use random::RandomPolicy;
pub use registry::{PolicyFactory, PolicyRegistry};
pub use resolver::PolicyResolver;
pub use round_robin::RoundRobinPolicy;

use tcc_router_types::{Invocation, PolicyError};

/// Uniform capability contract for a load-balancing strategy.
///
/// Implementations must be safe to share across calling threads. Any internal
/// state (counters, rings) is the policy's own business; the router treats the
/// selection as opaque.
pub trait FallbackPolicy<C>: Send + Sync {
    /// Registry name, used in logs and errors.
    fn name(&self) -> &str;

    /// Pick one of `candidates` for the call described by `invocation`.
    fn select<'a>(&self, candidates: &'a [C], invocation: &Invocation)
        -> Result<&'a C, PolicyError>;
}

pub(crate) fn empty_candidates(policy: &str) -> PolicyError {
    PolicyError::EmptyCandidates { policy: policy.to_string() }
}
