
use crate::policy::FallbackPolicy;
use std::sync::atomic::{AtomicUsize, Ordering};
use tcc_router_types::{Endpoint, Invocation, PolicyError};

/// Policy double: always picks `pick` (clamped), counts invocations.
pub(super) struct RecordingPolicy {
    pick: usize,
    calls: AtomicUsize,
    last_len: AtomicUsize,
}

impl RecordingPolicy {
    pub(super) fn picking(pick: usize) -> Self {
        Self { pick, calls: AtomicUsize::new(0), last_len: AtomicUsize::new(0) }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_len(&self) -> usize {
        self.last_len.load(Ordering::SeqCst)
    }
}

impl FallbackPolicy<Endpoint> for RecordingPolicy {
    fn name(&self) -> &str {
        "recording"
    }

    fn select<'a>(
        &self,
        candidates: &'a [Endpoint],
        _invocation: &Invocation,
    ) -> Result<&'a Endpoint, PolicyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_len.store(candidates.len(), Ordering::SeqCst);
        candidates
            .get(self.pick.min(candidates.len().saturating_sub(1)))
            .ok_or_else(|| PolicyError::EmptyCandidates { policy: "recording".to_string() })
    }
}

/// Policy double that always fails with a policy-defined error.
pub(super) struct FailingPolicy;

impl FallbackPolicy<Endpoint> for FailingPolicy {
    fn name(&self) -> &str {
        "failing"
    }

    fn select<'a>(
        &self,
        _candidates: &'a [Endpoint],
        _invocation: &Invocation,
    ) -> Result<&'a Endpoint, PolicyError> {
        Err(PolicyError::NoEligibleCandidate {
            policy: "failing".to_string(),
            reason: "all instances saturated".to_string(),
        })
    }
}

pub(super) fn ep(host: &str, port: u16) -> Endpoint {
    Endpoint::new(host, port)
}

pub(super) fn call() -> Invocation {
    Invocation::new("com.example.InventoryService", "reserve")
}
