//! Exchange chunks across routes.

use super::{pick_two, working_routes};
use crate::solution::Solution;
use rand::Rng;

/// Swap a random chunk of one route with a random chunk of another.
pub fn swap_between_routes<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = working_routes(solution);

    if let Some((a, b)) = pick_two(routes.len(), rng) {
        let i = rng.gen_range(0..routes[a].len());
        let j = rng.gen_range(0..routes[b].len());
        let chunk = routes[a].chunks[i];
        routes[a].chunks[i] = routes[b].chunks[j];
        routes[b].chunks[j] = chunk;
    }

    Solution::from_routes(routes)
}
