//! Swap two chunks inside a route.

use super::{pick_route_with, working_routes};
use crate::solution::Solution;
use rand::Rng;

/// Exchange two distinct positions of a random route with two or more chunks.
pub fn swap_within_route<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = working_routes(solution);

    if let Some(idx) = pick_route_with(&routes, 2, rng) {
        let picked = rand::seq::index::sample(rng, routes[idx].len(), 2);
        routes[idx].chunks.swap(picked.index(0), picked.index(1));
    }

    Solution::from_routes(routes)
}
