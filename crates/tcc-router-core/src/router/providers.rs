//! Per-call signal providers consumed by [`CompensableLoadBalance`].
//!
//! Both are owned by collaborators outside this crate (context propagation and
//! the transaction manager). Each read is a point-in-time snapshot and must be
//! side-effect free.
//!
//! [`CompensableLoadBalance`]: super::CompensableLoadBalance

use tcc_router_types::{ParticipantSnapshot, RoutingContext};

/// Pinned routing context for the call currently being issued, if any.
pub trait RoutingContextProvider: Send + Sync {
    fn current(&self) -> Option<RoutingContext>;
}

/// Participants enlisted in the active local transaction, if any.
pub trait ParticipantSnapshotProvider: Send + Sync {
    fn snapshot(&self) -> ParticipantSnapshot;
}

impl<F> RoutingContextProvider for F
where
    F: Fn() -> Option<RoutingContext> + Send + Sync,
{
    fn current(&self) -> Option<RoutingContext> {
        self()
    }
}

impl<F> ParticipantSnapshotProvider for F
where
    F: Fn() -> ParticipantSnapshot + Send + Sync,
{
    fn snapshot(&self) -> ParticipantSnapshot {
        self()
    }
}

/// Provider for clients that never replay compensation steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRoutingContext;

impl RoutingContextProvider for NoRoutingContext {
    fn current(&self) -> Option<RoutingContext> {
        None
    }
}

/// Provider for clients that never run inside a local transaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoActiveTransaction;

impl ParticipantSnapshotProvider for NoActiveTransaction {
    fn snapshot(&self) -> ParticipantSnapshot {
        ParticipantSnapshot::empty()
    }
}
