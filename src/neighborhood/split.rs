//! Cut a route into two depot round trips.

use super::{pick_route_with, working_routes};
use crate::solution::{Route, Solution};
use rand::Rng;

/// Cut a random route with at least three chunks at an interior position.
pub fn split_route<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = working_routes(solution);

    if let Some(idx) = pick_route_with(&routes, 3, rng) {
        let cut = rng.gen_range(1..routes[idx].len());
        let tail = routes[idx].chunks.split_off(cut);
        routes.push(Route::new(tail));
    }

    Solution::from_routes(routes)
}
