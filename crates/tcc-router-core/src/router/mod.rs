//! Transaction-affinity invoker selection.
//!
//! Handles the three signals that decide where a call goes: an explicit pinned
//! target, participants already enlisted in the active transaction, and the
//! general fallback policy.

mod affinity;
mod balance;
pub mod metrics;
mod providers;

#[cfg(test)]
mod tests;

pub use affinity::{AffinityRouter, RoutingScope};
pub use balance::CompensableLoadBalance;
pub use metrics::describe_router_metrics;
pub use providers::{
    NoActiveTransaction, NoRoutingContext, ParticipantSnapshotProvider, RoutingContextProvider,
};
