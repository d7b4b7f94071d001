//! Iterated Local Search: the first search phase.

use crate::config::{Config, SearchVariant};
use crate::context::SearchContext;
use crate::error::SolveError;
use crate::neighborhood::OperatorSet;
use crate::outcome::SearchOutcome;
use crate::solution::Solution;
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

/// Hill climber over the neighborhood moves of a variant.
#[derive(Debug, Clone)]
pub struct IteratedLocalSearch {
    pub iterations: u32,
    pub variant: SearchVariant,
}

impl IteratedLocalSearch {
    pub fn new(config: &Config) -> Self {
        IteratedLocalSearch {
            iterations: config.ils_iterations,
            variant: config.variant,
        }
    }

    pub fn operators(&self) -> OperatorSet {
        match self.variant {
            SearchVariant::Plain => OperatorSet::Plain,
            SearchVariant::CapacityAware => OperatorSet::CapacityAware,
        }
    }

    /// Build the starting solution and its cost.
    ///
    /// The plain variant starts from one shuffled route per chunk. The
    /// capacity-aware variant also tries all chunks in one shuffled route and
    /// keeps it only if it is strictly cheaper than the star.
    pub fn initial_solution<R: Rng + ?Sized>(
        &self,
        ctx: &SearchContext<'_>,
        rng: &mut R,
    ) -> Result<(Solution, f64), SolveError> {
        let mut chunks = ctx.canonical.to_vec();
        chunks.shuffle(rng);

        let star = Solution::star(&chunks);
        let star_cost = ctx.cost(&star)?;

        if self.variant == SearchVariant::Plain {
            return Ok((star, star_cost));
        }

        chunks.shuffle(rng);
        let tour = Solution::single_route(&chunks);
        let tour_cost = ctx.cost(&tour)?;

        debug!(
            "ILS start candidates: star {:.3}, single route {:.3}",
            star_cost, tour_cost
        );

        if tour_cost < star_cost {
            Ok((tour, tour_cost))
        } else {
            Ok((star, star_cost))
        }
    }

    /// Run the search and return the best solution seen.
    pub fn run<R: Rng + ?Sized>(
        &self,
        ctx: &SearchContext<'_>,
        rng: &mut R,
    ) -> Result<SearchOutcome, SolveError> {
        if ctx.canonical.is_empty() {
            info!("ILS: no chunks to collect, returning the empty solution");
            return Ok(SearchOutcome::unchanged(Solution::new(), 0.0));
        }

        let (start, start_cost) = self.initial_solution(ctx, rng)?;
        let operators = self.operators();

        info!(
            "ILS: {} chunks, {} iterations, start cost {:.3}",
            ctx.canonical.len(),
            self.iterations,
            start_cost
        );

        let mut outcome = SearchOutcome::unchanged(start, start_cost);
        outcome.history.reserve(self.iterations as usize);

        for iteration in 0..self.iterations {
            let op = operators.choose(rng);
            let candidate = ctx.heal(op.apply(&outcome.solution, rng));
            let cost = ctx.cost(&candidate)?;

            trace!("ILS iteration {}: {:?} -> {:.3}", iteration, op, cost);

            if cost < outcome.cost {
                debug!(
                    "ILS iteration {}: {:?} improved {:.3} -> {:.3}",
                    iteration, op, outcome.cost, cost
                );
                outcome.solution = candidate;
                outcome.cost = cost;
                outcome.improvements += 1;
            }

            outcome.history.push(outcome.cost);
        }

        info!(
            "ILS finished: cost {:.3} after {} improvements",
            outcome.cost, outcome.improvements
        );

        Ok(outcome)
    }
}
