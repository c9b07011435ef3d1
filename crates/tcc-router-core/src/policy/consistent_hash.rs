use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use tcc_router_types::{Invocation, Invoker, PolicyError};

use super::{empty_candidates, FallbackPolicy};

const DEFAULT_VIRTUAL_NODES: u32 = 160;

/// Consistent hashing on the invocation's hash key.
///
/// Each candidate is placed on a ring at `virtual_nodes` points derived from its
/// address; the call goes to the first point at or after the key's hash. The
/// same key keeps landing on the same instance while the candidate set is stable,
/// and only keys owned by a removed instance move when the set shrinks.
#[derive(Debug, Clone)]
pub struct ConsistentHashPolicy {
    virtual_nodes: u32,
}

impl Default for ConsistentHashPolicy {
    fn default() -> Self {
        Self { virtual_nodes: DEFAULT_VIRTUAL_NODES }
    }
}

impl ConsistentHashPolicy {
    pub const NAME: &'static str = "consistent_hash";

    pub fn with_virtual_nodes(virtual_nodes: u32) -> Self {
        Self { virtual_nodes: virtual_nodes.max(1) }
    }

    fn ring<C: Invoker>(&self, candidates: &[C]) -> BTreeMap<u64, usize> {
        let mut ring = BTreeMap::new();
        for (idx, candidate) in candidates.iter().enumerate() {
            let address = candidate.address();
            for replica in 0..self.virtual_nodes {
                // First writer keeps a colliding point so ring layout is order-stable.
                ring.entry(hash64(&format!("{}#{}", address, replica))).or_insert(idx);
            }
        }
        ring
    }
}

fn hash64(input: &str) -> u64 {
    let digest = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

impl<C: Invoker> FallbackPolicy<C> for ConsistentHashPolicy {
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

        let ring = self.ring(candidates);
        let point = hash64(&invocation.hash_key());
        let idx = ring
            .range(point..)
            .next()
            .or_else(|| ring.iter().next())
            .map(|(_, idx)| *idx)
            .ok_or_else(|| PolicyError::Internal {
                policy: Self::NAME.to_string(),
                message: "hash ring is empty".to_string(),
            })?;
        Ok(&candidates[idx])
    }
}
