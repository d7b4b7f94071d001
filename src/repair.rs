//! Restores exact chunk coverage after destructive moves.

use crate::chunk::ResourceChunk;
use crate::solution::{Route, Solution};
use itertools::Itertools;

/// Append a singleton route for every canonical chunk occurrence the
/// solution is missing.
///
/// Surplus chunks are left alone. Missing chunks are appended in canonical
/// order, so the result only depends on the inputs.
pub fn restore_coverage(mut solution: Solution, canonical: &[ResourceChunk]) -> Solution {
    let mut present = solution.chunks().copied().counts();

    for chunk in canonical {
        match present.get_mut(chunk) {
            Some(count) if *count > 0 => *count -= 1,
            _ => solution.routes.push(Route::with_chunk(*chunk)),
        }
    }

    solution
}

/// True if the solution holds exactly the canonical multiset.
pub fn covers_exactly(solution: &Solution, canonical: &[ResourceChunk]) -> bool {
    solution.chunks().copied().counts() == canonical.iter().copied().counts()
}
