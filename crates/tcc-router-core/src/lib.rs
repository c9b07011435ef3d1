//! # TCC Router Core
//!
//! Invoker selection for RPC calls that take part in Try-Confirm-Cancel
//! transactions.
//!
//! ## Architecture
//!
//! ```text
//! tcc-router-core/src/
//! ├── router/    # AffinityRouter, CompensableLoadBalance, signal providers, metrics
//! ├── policy/    # FallbackPolicy contract, built-in policies, registry, lazy resolver
//! ├── modules/   # config sources + JSON config file, logging setup
//! └── error.rs   # AppError for config/assembly paths
//! ```
//!
//! Confirm/cancel calls carrying a pinned routing context go to exactly the
//! recorded instance or fail. Calls inside an active transaction stick to
//! instances already hosting an enlisted participant when one is available.
//! Everything else is delegated to the configured fallback policy.

#![allow(
    clippy::significant_drop_tightening,
    reason = "Resolver init guard intentionally spans the re-check and the store"
)]
#![allow(clippy::implicit_clone, reason = "Explicit .clone() vs .to_string() is stylistic")]
// Test-only lints: allow panic!, println!, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::assertions_on_result_states
    )
)]

pub mod error;
pub mod modules;
pub mod policy;
pub mod router;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use policy::{FallbackPolicy, PolicyRegistry, PolicyResolver};
pub use router::{
    AffinityRouter, CompensableLoadBalance, ParticipantSnapshotProvider, RoutingContextProvider,
    RoutingScope,
};
pub use tcc_router_types::{
    Endpoint, Invocation, Invoker, ParticipantSnapshot, PolicyError, RouterConfig, RoutingContext,
    RoutingError,
};
