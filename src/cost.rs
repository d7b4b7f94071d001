//! Load-dependent cost model.
//!
//! A leg of length `d` driven with `load` on board costs
//! `d + (alpha * d * load)^beta`.

use crate::distance::DistanceOracle;
use crate::error::SolveError;
use crate::problem::{Problem, DEPOT};
use crate::solution::{Route, Solution};

/// Cost of a single leg. The drag term vanishes whenever its base is zero,
/// including for `beta == 0`.
#[inline]
pub fn leg_cost(alpha: f64, beta: f64, dist: f64, load: f64) -> f64 {
    let base = alpha * dist * load;
    let drag = if base > 0.0 { base.powf(beta) } else { 0.0 };
    dist + drag
}

fn lookup(oracle: &dyn DistanceOracle, from: usize, to: usize) -> Result<f64, SolveError> {
    oracle
        .distance(from, to)
        .ok_or(SolveError::Unreachable { from, to })
}

/// Cost of one depot-to-depot round trip.
pub fn route_cost(
    route: &Route,
    problem: &Problem,
    oracle: &dyn DistanceOracle,
) -> Result<f64, SolveError> {
    let mut total = 0.0;
    let mut position = DEPOT;
    let mut load = 0.0;

    for chunk in &route.chunks {
        let dist = lookup(oracle, position, chunk.node)?;
        total += leg_cost(problem.alpha(), problem.beta(), dist, load);
        load += chunk.amount;
        position = chunk.node;
    }

    let dist = lookup(oracle, position, DEPOT)?;
    total += leg_cost(problem.alpha(), problem.beta(), dist, load);

    Ok(total)
}

/// Total cost of a solution: the sum of its route costs.
pub fn solution_cost(
    solution: &Solution,
    problem: &Problem,
    oracle: &dyn DistanceOracle,
) -> Result<f64, SolveError> {
    solution
        .routes
        .iter()
        .map(|route| route_cost(route, problem, oracle))
        .sum()
}
