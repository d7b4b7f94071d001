//! Shortest distances between nodes.

use crate::error::SolveError;
use crate::problem::{Problem, DEPOT};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;

/// Read-only lookup of shortest path distances.
pub trait DistanceOracle {
    /// Shortest distance from `from` to `to`, or `None` if no path exists.
    fn distance(&self, from: usize, to: usize) -> Option<f64>;
}

/// Dense all-pairs shortest distance matrix.
#[derive(Debug, Clone)]
pub struct ShortestDistances {
    matrix: Vec<Vec<Option<f64>>>,
}

impl ShortestDistances {
    /// Run Dijkstra from every node of the problem graph, weighted by edge distance.
    pub fn compute(problem: &Problem) -> Self {
        let n = problem.node_count();
        let mut matrix = vec![vec![None; n]; n];

        for (source, row) in matrix.iter_mut().enumerate() {
            let reached = dijkstra(problem.graph(), NodeIndex::new(source), None, |e| {
                *e.weight()
            });
            for (node, dist) in reached {
                row[node.index()] = Some(dist);
            }
        }

        ShortestDistances { matrix }
    }

    /// Wrap a precomputed matrix. Non-finite entries mark unreachable pairs.
    pub fn from_matrix(matrix: Vec<Vec<f64>>) -> Self {
        let matrix = matrix
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|d| if d.is_finite() { Some(d) } else { None })
                    .collect()
            })
            .collect();

        ShortestDistances { matrix }
    }

    pub fn node_count(&self) -> usize {
        self.matrix.len()
    }
}

impl DistanceOracle for ShortestDistances {
    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.matrix.get(from)?.get(to).copied().flatten()
    }
}

/// Check that every customer can be reached from the depot and back.
pub fn ensure_reachable(
    problem: &Problem,
    oracle: &dyn DistanceOracle,
) -> Result<(), SolveError> {
    for node in problem.customers() {
        if oracle.distance(DEPOT, node).is_none() {
            return Err(SolveError::Unreachable {
                from: DEPOT,
                to: node,
            });
        }
        if oracle.distance(node, DEPOT).is_none() {
            return Err(SolveError::Unreachable {
                from: node,
                to: DEPOT,
            });
        }
    }

    Ok(())
}
