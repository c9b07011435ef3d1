use tcc_router_types::{Invocation, PolicyError};

use super::{empty_candidates, FallbackPolicy};

/// Always the first candidate. Deterministic; suited to single-instance setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPolicy;

impl FirstPolicy {
    pub const NAME: &'static str = "first";
}

impl<C> FallbackPolicy<C> for FirstPolicy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn select<'a>(
        &self,
        candidates: &'a [C],
        _invocation: &Invocation,
    ) -> Result<&'a C, PolicyError> {
        candidates.first().ok_or_else(|| empty_candidates(Self::NAME))
    }
}
