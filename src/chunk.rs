//! Resource chunks ("virtual nodes") and the decomposition of nodes into them.

use crate::capacity::CapacityTable;
use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Resolution at which chunk amounts are compared.
///
/// Two chunks of the same node whose amounts round to the same multiple of
/// this quantum are the same chunk, so rounding drift from the decomposition
/// never shows up as a distinct item.
pub const AMOUNT_QUANTUM: f64 = 1e-6;

/// Remaining gold below which a node counts as fully decomposed.
pub const SPLIT_TOLERANCE: f64 = 1e-6;

/// A pickup of `amount` gold at `node`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceChunk {
    pub node: usize,
    pub amount: f64,
}

impl ResourceChunk {
    pub fn new(node: usize, amount: f64) -> Self {
        ResourceChunk { node, amount }
    }

    /// Fixed-point identity of the chunk used for equality and hashing.
    pub fn key(&self) -> (usize, i64) {
        (self.node, (self.amount / AMOUNT_QUANTUM).round() as i64)
    }
}

impl PartialEq for ResourceChunk {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ResourceChunk {}

impl Hash for ResourceChunk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Split every customer into chunks no larger than its pickup limit.
///
/// The result is the canonical multiset every feasible solution covers
/// exactly once. Chunks are ordered by node id.
pub fn decompose(problem: &Problem, capacities: &CapacityTable) -> Vec<ResourceChunk> {
    let mut chunks = Vec::with_capacity(problem.customer_count());

    for node in problem.customers() {
        let gold = problem.gold(node);
        let limit = capacities.get(node).unwrap_or(gold);

        if limit >= gold {
            chunks.push(ResourceChunk::new(node, gold));
            continue;
        }

        let mut remaining = gold;
        while remaining > SPLIT_TOLERANCE {
            let pickup = limit.min(remaining);
            chunks.push(ResourceChunk::new(node, pickup));
            remaining -= pickup;
        }
    }

    chunks
}
