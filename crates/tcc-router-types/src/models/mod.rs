//! Core domain models for the TCC router.
//!
//! Everything here is a read-only input to invoker selection: the router
//! never mutates candidates, participant addresses or routing contexts.

mod config;
mod context;
mod endpoint;
mod invocation;
mod resource;

// Re-export all models
pub use config::{RouterConfig, DEFAULT_POLICY_NAME};
pub use context::{ParticipantSnapshot, RoutingContext};
pub use endpoint::{Endpoint, Invoker};
pub use invocation::Invocation;
pub use resource::ResourceAddress;
