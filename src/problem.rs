//! Problem definition: the gold-carrying graph and the cost shape parameters.

use crate::error::SolveError;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Index of the depot node. Every route starts and ends here.
pub const DEPOT: usize = 0;

/// An undirected edge as found in an instance file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub dist: f64,
}

/// On-disk representation of a problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemFile {
    #[serde(default)]
    pub name: String,
    pub alpha: f64,
    pub beta: f64,
    /// Gold per node, indexed by node id. Entry 0 is the depot.
    pub gold: Vec<f64>,
    pub edges: Vec<Edge>,
}

/// A gold collection instance.
///
/// Node weights hold the gold amount, edge weights the travel distance.
/// The depot always carries zero gold.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: String,
    graph: UnGraph<f64, f64>,
    alpha: f64,
    beta: f64,
}

impl Problem {
    /// Build and validate a problem.
    ///
    /// `gold[i]` is the amount stored at node `i`; the value given for the
    /// depot is ignored. An empty `gold` vector still yields a depot.
    pub fn new(
        name: String,
        gold: Vec<f64>,
        edges: Vec<(usize, usize, f64)>,
        alpha: f64,
        beta: f64,
    ) -> Result<Self, SolveError> {
        check_parameter("alpha", alpha)?;
        check_parameter("beta", beta)?;

        let node_count = gold.len().max(1);
        let mut graph = UnGraph::with_capacity(node_count, edges.len());

        for node in 0..node_count {
            let amount = if node == DEPOT {
                0.0
            } else {
                gold[node]
            };
            if !amount.is_finite() || amount < 0.0 {
                return Err(SolveError::NegativeResource { node, amount });
            }
            graph.add_node(amount);
        }

        for (from, to, dist) in edges {
            if from >= node_count || to >= node_count || !dist.is_finite() || dist < 0.0 {
                return Err(SolveError::InvalidEdge { from, to, dist });
            }
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), dist);
        }

        Ok(Problem {
            name,
            graph,
            alpha,
            beta,
        })
    }

    pub fn graph(&self) -> &UnGraph<f64, f64> {
        &self.graph
    }

    /// Load sensitivity of the drag term.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Exponent of the drag term.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gold stored at a node.
    pub fn gold(&self, node: usize) -> f64 {
        self.graph[NodeIndex::new(node)]
    }

    /// Ids of every non-depot node.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(|&node| node != DEPOT)
    }

    /// Number of non-depot nodes.
    pub fn customer_count(&self) -> usize {
        self.node_count().saturating_sub(1)
    }

    pub fn total_gold(&self) -> f64 {
        self.customers().map(|node| self.gold(node)).sum()
    }

    pub fn max_gold(&self) -> f64 {
        self.customers()
            .map(|node| self.gold(node))
            .fold(0.0, f64::max)
    }

    /// Parse a problem from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SolveError> {
        let file: ProblemFile = serde_json::from_str(json)?;
        Self::from_problem_file(file)
    }

    /// Load a problem from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolveError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn from_problem_file(file: ProblemFile) -> Result<Self, SolveError> {
        let edges = file
            .edges
            .into_iter()
            .map(|edge| (edge.from, edge.to, edge.dist))
            .collect();

        Problem::new(file.name, file.gold, edges, file.alpha, file.beta)
    }
}

fn check_parameter(name: &'static str, value: f64) -> Result<(), SolveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SolveError::InvalidParameter { name, value })
    }
}
