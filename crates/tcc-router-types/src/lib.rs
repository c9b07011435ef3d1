//! # TCC Router Types
//!
//! Core types and error definitions for the transaction-affinity router.
//!
//! This crate provides the foundational type system:
//!
//! - **`error`** - Typed error hierarchy for routing, fallback policies and configuration
//! - **`models`** - Endpoints, enlisted-participant addresses, routing contexts, config
//!
//! ## Architecture Role
//!
//! `tcc-router-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          tcc-router-types (this crate)
//!                    │
//!                    ▼
//!             tcc-router-core
//!                    │
//!                    ▼
//!        RPC client cluster layer (external)
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for diagnostics and config files
//! - **Clone** for cheap sharing across calling threads
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, PolicyError, Result, RoutingError, TypedError};

// Re-export core model types
pub use models::{
    Endpoint, Invocation, Invoker, ParticipantSnapshot, ResourceAddress, RouterConfig,
    RoutingContext,
};
