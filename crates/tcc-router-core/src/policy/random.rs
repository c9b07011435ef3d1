use rand::Rng;
use tcc_router_types::{Invocation, PolicyError};

use super::{empty_candidates, FallbackPolicy};

/// Uniform random selection. Registered as both `random` and `default`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub const NAME: &'static str = "random";
}

impl<C> FallbackPolicy<C> for RandomPolicy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn select<'a>(
        &self,
        candidates: &'a [C],
        _invocation: &Invocation,
    ) -> Result<&'a C, PolicyError> {
        if candidates.is_empty() {
            return Err(empty_candidates(Self::NAME));
        }
        if candidates.len() == 1 {
            return Ok(&candidates[0]);
        }
        let idx = rand::thread_rng().gen_range(0..candidates.len());
        Ok(&candidates[idx])
    }
}
