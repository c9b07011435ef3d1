//! The affinity routing decision.

use std::sync::Arc;
use tcc_router_types::{
    Invocation, Invoker, ParticipantSnapshot, ResourceAddress, RouterConfig, RoutingContext,
    RoutingError,
};

use super::metrics::record_decision;
use crate::modules::config::{ConfigSource, PARTICIPANT_AFFINITY_KEY};
use crate::policy::{FallbackPolicy, PolicyRegistry, PolicyResolver};

/// The two per-call signals the router reconciles, passed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingScope {
    /// Pinned target, present only on compensation replay calls
    pub context: Option<RoutingContext>,
    /// Participants enlisted in the active local transaction
    pub participants: ParticipantSnapshot,
}

impl RoutingScope {
    /// Call outside any transaction.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn pinned(context: RoutingContext) -> Self {
        Self { context: Some(context), participants: ParticipantSnapshot::empty() }
    }

    pub fn in_transaction(participants: ParticipantSnapshot) -> Self {
        Self { context: None, participants }
    }
}

/// Picks exactly one invoker per call, keeping TCC calls on their enlisted participants.
///
/// Decision order:
/// 1. Pinned routing context present → that exact instance, or `TargetNotFound`.
/// 2. A candidate at the address of an enlisted participant → first such candidate.
/// 3. Otherwise → the lazily resolved fallback policy.
pub struct AffinityRouter<C> {
    resolver: PolicyResolver<C>,
    participant_affinity: bool,
}

impl<C: Invoker + 'static> AffinityRouter<C> {
    /// Router reading its policy name (and affinity toggle) from `config`.
    pub fn new(registry: PolicyRegistry<C>, config: Arc<dyn ConfigSource>) -> Self {
        let participant_affinity = config.get_bool(PARTICIPANT_AFFINITY_KEY).unwrap_or(true);
        Self { resolver: PolicyResolver::new(registry, config), participant_affinity }
    }

    pub fn from_config(registry: PolicyRegistry<C>, config: &RouterConfig) -> Self {
        Self::new(registry, Arc::new(config.clone()))
    }

    /// Router with an injected policy; no name resolution takes place.
    pub fn with_policy(policy: Arc<dyn FallbackPolicy<C>>) -> Self {
        Self { resolver: PolicyResolver::fixed(policy), participant_affinity: true }
    }

    #[must_use]
    pub fn participant_affinity(mut self, enabled: bool) -> Self {
        self.participant_affinity = enabled;
        self
    }

    pub fn resolver(&self) -> &PolicyResolver<C> {
        &self.resolver
    }

    /// Full decision for one call.
    pub fn route<'a>(
        &self,
        candidates: &'a [C],
        scope: &RoutingScope,
        invocation: &Invocation,
    ) -> Result<&'a C, RoutingError> {
        match scope.context {
            Some(ref ctx) => self.select_pinned(candidates, &ctx.host, ctx.port),
            None => self.select_ordinary(candidates, &scope.participants, invocation),
        }
    }

    /// Ordinary path: prefer an instance already bound to an enlisted participant,
    /// otherwise delegate to the fallback policy over the full candidate list.
    pub fn select_ordinary<'a>(
        &self,
        candidates: &'a [C],
        participants: &ParticipantSnapshot,
        invocation: &Invocation,
    ) -> Result<&'a C, RoutingError> {
        if candidates.is_empty() {
            record_decision("ordinary", "no_candidates");
            return Err(RoutingError::NoCandidates);
        }

        if self.participant_affinity && !participants.is_empty() {
            let addresses = participants.addresses();
            if let Some(candidate) = first_enlisted(candidates, &addresses) {
                tracing::debug!(
                    invoker = %candidate.address(),
                    participants = participants.len(),
                    "Affinity: routed to instance hosting an enlisted participant"
                );
                record_decision("ordinary", "affinity");
                return Ok(candidate);
            }
            tracing::debug!(
                participants = participants.len(),
                well_formed = addresses.len(),
                "Affinity: no candidate hosts an enlisted participant, delegating"
            );
        }

        let policy = match self.resolver.ensure_resolved() {
            Ok(policy) => policy,
            Err(e) => {
                record_decision("ordinary", "no_policy");
                return Err(e);
            },
        };

        match policy.select(candidates, invocation) {
            Ok(candidate) => {
                tracing::debug!(
                    policy = %policy.name(),
                    invoker = %candidate.address(),
                    "Affinity: fallback policy selected invoker"
                );
                record_decision("ordinary", "fallback");
                Ok(candidate)
            },
            Err(e) => {
                record_decision("ordinary", "policy_error");
                Err(RoutingError::Policy(e))
            },
        }
    }

    /// Pinned path: the exact `(ip, port)` named by the routing context, or a hard failure.
    pub fn select_pinned<'a>(
        &self,
        candidates: &'a [C],
        pinned_host: &str,
        pinned_port: u16,
    ) -> Result<&'a C, RoutingError> {
        let target = RoutingContext::new(pinned_host, pinned_port);
        match candidates.iter().find(|c| target.is_target(*c)) {
            Some(candidate) => {
                tracing::debug!(target = %target, "Pinned: routed to recorded participant");
                record_decision("pinned", "exact");
                Ok(candidate)
            },
            None => {
                tracing::warn!(
                    target = %target,
                    candidates = candidates.len(),
                    "Pinned: recorded participant is not among candidates"
                );
                record_decision("pinned", "not_found");
                Err(RoutingError::TargetNotFound {
                    host: pinned_host.to_string(),
                    port: pinned_port,
                })
            },
        }
    }
}

/// First candidate (in candidate order) hosting any of `addresses`.
fn first_enlisted<'a, C: Invoker>(
    candidates: &'a [C],
    addresses: &[ResourceAddress],
) -> Option<&'a C> {
    if addresses.is_empty() {
        return None;
    }
    candidates.iter().find(|candidate| addresses.iter().any(|addr| addr.matches(*candidate)))
}
