use std::sync::Arc;
use tcc_router_types::{Invocation, Invoker, RoutingError};

use super::affinity::{AffinityRouter, RoutingScope};
use super::providers::{ParticipantSnapshotProvider, RoutingContextProvider};

/// Load-balance entry point for the RPC client's cluster layer.
///
/// Pulls the routing context and participant snapshot from the injected
/// providers for each call and hands them to [`AffinityRouter::route`]. The
/// participant snapshot is only read on the ordinary path.
pub struct CompensableLoadBalance<C> {
    router: AffinityRouter<C>,
    contexts: Arc<dyn RoutingContextProvider>,
    participants: Arc<dyn ParticipantSnapshotProvider>,
}

impl<C: Invoker + 'static> CompensableLoadBalance<C> {
    pub fn new(
        router: AffinityRouter<C>,
        contexts: Arc<dyn RoutingContextProvider>,
        participants: Arc<dyn ParticipantSnapshotProvider>,
    ) -> Self {
        Self { router, contexts, participants }
    }

    pub fn router(&self) -> &AffinityRouter<C> {
        &self.router
    }

    /// Choose the invoker for one outbound call.
    pub fn select<'a>(
        &self,
        candidates: &'a [C],
        invocation: &Invocation,
    ) -> Result<&'a C, RoutingError> {
        let scope = match self.contexts.current() {
            Some(context) => RoutingScope::pinned(context),
            None => RoutingScope::in_transaction(self.participants.snapshot()),
        };
        self.router.route(candidates, &scope, invocation)
    }
}
