//! Relocate a chunk to another route.

use super::{pick_two, working_routes};
use crate::solution::Solution;
use rand::Rng;

/// Take a random chunk out of one route and append it to another.
/// The source route disappears when it becomes empty.
pub fn move_chunk<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = working_routes(solution);

    let Some((from, to)) = pick_two(routes.len(), rng) else {
        return Solution::from_routes(routes);
    };

    let pos = rng.gen_range(0..routes[from].len());
    let chunk = routes[from].chunks.remove(pos);
    routes[to].chunks.push(chunk);

    Solution::from_routes(routes)
}
