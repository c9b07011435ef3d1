use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tcc_router_types::{Invocation, PolicyError};

use super::{empty_candidates, FallbackPolicy};

/// Round-robin over the candidate list, with one cursor per `service.method`.
///
/// Cursors are heuristic; Relaxed ordering is sufficient. When the candidate
/// list changes size the cursor simply wraps against the new length.
#[derive(Debug, Default)]
pub struct RoundRobinPolicy {
    cursors: DashMap<String, AtomicUsize>,
}

impl RoundRobinPolicy {
    pub const NAME: &'static str = "round_robin";

    pub fn new() -> Self {
        Self::default()
    }

    fn next_index(&self, key: &str, len: usize) -> usize {
        if let Some(cursor) = self.cursors.get(key) {
            return cursor.fetch_add(1, Ordering::Relaxed) % len;
        }
        self.cursors
            .entry(key.to_string())
            .or_insert_with(|| AtomicUsize::new(0))
            .fetch_add(1, Ordering::Relaxed)
            % len
    }
}

impl<C> FallbackPolicy<C> for RoundRobinPolicy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn select<'a>(
        &self,
        candidates: &'a [C],
        invocation: &Invocation,
    ) -> Result<&'a C, PolicyError> {
        if candidates.is_empty() {
            return Err(empty_candidates(Self::NAME));
        }
        let idx = self.next_index(&invocation.method_key(), candidates.len());
        Ok(&candidates[idx])
    }
}
