//! Adaptive per-node pickup limits.

use crate::problem::Problem;
use std::collections::BTreeMap;

/// Maximum load that may be carried away from a node in a single pickup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityTable {
    limits: BTreeMap<usize, f64>,
}

impl CapacityTable {
    /// A table that lets every node be collected in one pickup.
    pub fn unbounded(problem: &Problem) -> Self {
        let limits = problem
            .customers()
            .map(|node| (node, problem.gold(node)))
            .collect();

        CapacityTable { limits }
    }

    pub fn get(&self, node: usize) -> Option<f64> {
        self.limits.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.limits.iter().map(|(&node, &limit)| (node, limit))
    }
}

impl FromIterator<(usize, f64)> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        CapacityTable {
            limits: iter.into_iter().collect(),
        }
    }
}

/// Derives a [`CapacityTable`] from graph size and the cost shape.
pub struct CapacityPlanner;

impl CapacityPlanner {
    /// Compute the pickup limit of every customer.
    ///
    /// Heavier drag (larger beta) and larger graphs shrink the global cap so
    /// that loads stay small on long tours. With `alpha == 0` carrying gold is
    /// free and nothing needs to be split.
    pub fn plan(problem: &Problem) -> CapacityTable {
        let cap = Self::global_cap(problem);

        let limits = problem
            .customers()
            .map(|node| (node, problem.gold(node).min(cap)))
            .collect();

        CapacityTable { limits }
    }

    /// The cap shared by all nodes before clamping to each node's own gold.
    pub fn global_cap(problem: &Problem) -> f64 {
        // beta == 0 makes the drag term independent of the load.
        if problem.alpha() == 0.0 || problem.beta() == 0.0 {
            return problem.total_gold();
        }

        let n = problem.node_count();
        let exponent = Self::size_exponent(n);
        let drag_factor = 1.0 / problem.beta().powf(exponent);
        let scale = (50.0 / n as f64).min(1.0);

        (problem.max_gold() * drag_factor * scale).max(1.0)
    }

    fn size_exponent(node_count: usize) -> f64 {
        match node_count {
            0..=20 => 0.5,
            21..=50 => 0.7,
            _ => 0.9,
        }
    }
}
