//! Result of a search phase.

use crate::solution::Solution;

/// Best solution found by a driver together with its trajectory.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub solution: Solution,
    pub cost: f64,
    /// Cost of the starting solution.
    pub initial_cost: f64,
    /// Best cost after each iteration.
    pub history: Vec<f64>,
    /// Number of accepted candidates.
    pub improvements: u32,
}

impl SearchOutcome {
    /// An outcome that did not search at all.
    pub fn unchanged(solution: Solution, cost: f64) -> Self {
        SearchOutcome {
            solution,
            cost,
            initial_cost: cost,
            history: Vec::new(),
            improvements: 0,
        }
    }

    pub fn iterations(&self) -> usize {
        self.history.len()
    }
}
