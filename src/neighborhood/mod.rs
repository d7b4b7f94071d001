//! Randomised neighborhood moves used by iterated local search.
//!
//! Every move reads a solution and returns a new one. When its structural
//! precondition does not hold (too few routes, routes too short) the move
//! returns an unchanged copy.

pub mod merge;
pub mod move_chunk;
pub mod split;
pub mod swap;
pub mod swap_between;

use crate::solution::{Route, Solution};
use rand::seq::SliceRandom;
use rand::Rng;

/// The closed set of neighborhood moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Relocate one chunk to the end of another route.
    Move,
    /// Swap two chunks inside one route.
    SwapWithinRoute,
    /// Cut a route in two.
    SplitRoute,
    /// Append one route to another.
    MergeRoutes,
    /// Exchange one chunk between two routes.
    SwapBetweenRoutes,
}

impl Neighborhood {
    /// Apply the move to a copy of `solution`.
    pub fn apply<R: Rng + ?Sized>(&self, solution: &Solution, rng: &mut R) -> Solution {
        match self {
            Neighborhood::Move => move_chunk::move_chunk(solution, rng),
            Neighborhood::SwapWithinRoute => swap::swap_within_route(solution, rng),
            Neighborhood::SplitRoute => split::split_route(solution, rng),
            Neighborhood::MergeRoutes => merge::merge_routes(solution, rng),
            Neighborhood::SwapBetweenRoutes => swap_between::swap_between_routes(solution, rng),
        }
    }
}

/// The moves available to a search variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSet {
    Plain,
    CapacityAware,
}

const PLAIN: [Neighborhood; 3] = [
    Neighborhood::Move,
    Neighborhood::SwapWithinRoute,
    Neighborhood::SplitRoute,
];

const CAPACITY_AWARE: [Neighborhood; 5] = [
    Neighborhood::Move,
    Neighborhood::SwapWithinRoute,
    Neighborhood::SplitRoute,
    Neighborhood::MergeRoutes,
    Neighborhood::SwapBetweenRoutes,
];

impl OperatorSet {
    pub fn operators(&self) -> &'static [Neighborhood] {
        match self {
            OperatorSet::Plain => &PLAIN,
            OperatorSet::CapacityAware => &CAPACITY_AWARE,
        }
    }

    /// Pick a move uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Neighborhood {
        let operators = self.operators();
        operators[rng.gen_range(0..operators.len())]
    }
}

/// Copy the non-empty routes of a solution.
pub(crate) fn working_routes(solution: &Solution) -> Vec<Route> {
    solution
        .routes
        .iter()
        .filter(|route| !route.is_empty())
        .cloned()
        .collect()
}

/// Two distinct route indices drawn uniformly, or `None` with fewer than two routes.
pub(crate) fn pick_two<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let picked = rand::seq::index::sample(rng, len, 2);
    Some((picked.index(0), picked.index(1)))
}

/// Index of a uniformly chosen route with at least `min_len` chunks.
pub(crate) fn pick_route_with<R: Rng + ?Sized>(
    routes: &[Route],
    min_len: usize,
    rng: &mut R,
) -> Option<usize> {
    let eligible: Vec<usize> = routes
        .iter()
        .enumerate()
        .filter(|(_, route)| route.len() >= min_len)
        .map(|(idx, _)| idx)
        .collect();

    eligible.choose(rng).copied()
}
