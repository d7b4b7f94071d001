//! Large Neighborhood Search refinement.

pub mod destroy;
pub mod insertion;

use crate::config::{Config, InsertionEvaluation};
use crate::context::SearchContext;
use crate::error::SolveError;
use crate::outcome::SearchOutcome;
use crate::solution::Solution;
use log::{debug, info, trace};
use rand::Rng;

use self::destroy::destroy;
use self::insertion::greedy_repair;

/// Destroy-and-repair loop that only accepts strict improvements.
#[derive(Debug, Clone)]
pub struct LargeNeighborhoodSearch {
    pub iterations: u32,
    pub destroy_fraction: f64,
    pub insertion: InsertionEvaluation,
}

impl LargeNeighborhoodSearch {
    pub fn new(config: &Config) -> Self {
        LargeNeighborhoodSearch {
            iterations: config.lns_iterations,
            destroy_fraction: config.destroy_fraction,
            insertion: config.insertion,
        }
    }

    /// Refine `start`, typically the ILS result.
    pub fn run<R: Rng + ?Sized>(
        &self,
        start: Solution,
        ctx: &SearchContext<'_>,
        rng: &mut R,
    ) -> Result<SearchOutcome, SolveError> {
        let start_cost = ctx.cost(&start)?;
        if start.chunk_count() == 0 {
            return Ok(SearchOutcome::unchanged(start, start_cost));
        }

        info!(
            "LNS: {} iterations, destroy fraction {:.2}, start cost {:.3}",
            self.iterations, self.destroy_fraction, start_cost
        );

        let mut outcome = SearchOutcome::unchanged(start, start_cost);
        outcome.history.reserve(self.iterations as usize);

        for iteration in 0..self.iterations {
            let (partial, removed) = destroy(&outcome.solution, self.destroy_fraction, rng);
            let repaired = greedy_repair(partial, &removed, ctx, self.insertion)?;
            let candidate = ctx.heal(repaired);
            let cost = ctx.cost(&candidate)?;

            trace!(
                "LNS iteration {}: removed {}, candidate cost {:.3}",
                iteration,
                removed.len(),
                cost
            );

            if cost < outcome.cost {
                debug!(
                    "LNS iteration {}: improved {:.3} -> {:.3}",
                    iteration, outcome.cost, cost
                );
                outcome.solution = candidate;
                outcome.cost = cost;
                outcome.improvements += 1;
            }

            outcome.history.push(outcome.cost);
        }

        info!(
            "LNS finished: cost {:.3} after {} improvements",
            outcome.cost, outcome.improvements
        );

        Ok(outcome)
    }
}
