//! Shared read-only state of one solve.

use crate::chunk::ResourceChunk;
use crate::cost;
use crate::distance::DistanceOracle;
use crate::error::SolveError;
use crate::problem::Problem;
use crate::repair;
use crate::solution::Solution;

/// Everything an operator or driver needs to score and heal solutions.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub problem: &'a Problem,
    pub oracle: &'a dyn DistanceOracle,
    /// The canonical chunk multiset every solution must cover.
    pub canonical: &'a [ResourceChunk],
}

impl<'a> SearchContext<'a> {
    pub fn new(
        problem: &'a Problem,
        oracle: &'a dyn DistanceOracle,
        canonical: &'a [ResourceChunk],
    ) -> Self {
        SearchContext {
            problem,
            oracle,
            canonical,
        }
    }

    /// Total cost of a solution.
    pub fn cost(&self, solution: &Solution) -> Result<f64, SolveError> {
        cost::solution_cost(solution, self.problem, self.oracle)
    }

    /// Re-add any canonical chunk the solution lost.
    pub fn heal(&self, solution: Solution) -> Solution {
        repair::restore_coverage(solution, self.canonical)
    }
}
