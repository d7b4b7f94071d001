//! Join two routes.

use super::{pick_two, working_routes};
use crate::solution::Solution;
use rand::Rng;

/// Append the chunks of one random route to another and drop the emptied one.
pub fn merge_routes<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = working_routes(solution);

    if let Some((keep, absorb)) = pick_two(routes.len(), rng) {
        let tail = std::mem::take(&mut routes[absorb].chunks);
        routes[keep].chunks.extend(tail);
        routes.remove(absorb);
    }

    Solution::from_routes(routes)
}
