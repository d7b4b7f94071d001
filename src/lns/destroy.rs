//! Random removal of chunks.

use crate::chunk::ResourceChunk;
use crate::solution::{Route, Solution};
use rand::Rng;

/// Remove `max(1, floor(fraction * n))` distinct chunks chosen uniformly at
/// random from a solution of `n` chunks.
///
/// Returns the reduced solution, without emptied routes, and the removed
/// chunks in the order they were drawn.
pub fn destroy<R: Rng + ?Sized>(
    solution: &Solution,
    fraction: f64,
    rng: &mut R,
) -> (Solution, Vec<ResourceChunk>) {
    let total = solution.chunk_count();
    if total == 0 {
        return (solution.clone(), Vec::new());
    }

    let k = ((total as f64 * fraction).floor() as usize).clamp(1, total);
    let picked = rand::seq::index::sample(rng, total, k);

    let flat: Vec<ResourceChunk> = solution.chunks().copied().collect();
    let mut marked = vec![false; total];
    for idx in picked.iter() {
        marked[idx] = true;
    }
    let removed = picked.iter().map(|idx| flat[idx]).collect();

    let mut offset = 0;
    let mut routes = Vec::with_capacity(solution.routes.len());
    for route in &solution.routes {
        let kept = route
            .chunks
            .iter()
            .enumerate()
            .filter(|(pos, _)| !marked[offset + pos])
            .map(|(_, chunk)| *chunk)
            .collect();
        offset += route.len();
        routes.push(Route::new(kept));
    }

    (Solution::from_routes(routes), removed)
}
