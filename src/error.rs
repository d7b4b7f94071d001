//! Error type shared by instance loading, configuration and the search.

use std::fmt;

/// Errors raised when a problem instance, its distances or the solver
/// configuration violate the input contract.
#[derive(Debug)]
pub enum SolveError {
    /// A node carries a negative or non-finite amount of gold.
    NegativeResource { node: usize, amount: f64 },
    /// A scalar parameter (alpha, beta, destroy fraction, ...) is out of range.
    InvalidParameter { name: &'static str, value: f64 },
    /// An edge references a missing node or has an invalid distance.
    InvalidEdge { from: usize, to: usize, dist: f64 },
    /// No distance is known between two nodes that a route needs to connect.
    Unreachable { from: usize, to: usize },
    /// The solver configuration is inconsistent.
    InvalidConfig(String),
    /// Reading an instance file failed.
    Io(std::io::Error),
    /// An instance file could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NegativeResource { node, amount } => {
                write!(f, "Node {} has invalid resource amount {}", node, amount)
            }
            SolveError::InvalidParameter { name, value } => {
                write!(f, "Parameter `{}` has invalid value {}", name, value)
            }
            SolveError::InvalidEdge { from, to, dist } => {
                write!(f, "Edge {} -> {} with distance {} is invalid", from, to, dist)
            }
            SolveError::Unreachable { from, to } => {
                write!(f, "No path between node {} and node {}", from, to)
            }
            SolveError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SolveError::Io(err) => write!(f, "Failed to read instance: {}", err),
            SolveError::Parse(err) => write!(f, "Failed to parse instance: {}", err),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Io(err) => Some(err),
            SolveError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SolveError {
    fn from(err: std::io::Error) -> Self {
        SolveError::Io(err)
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(err: serde_json::Error) -> Self {
        SolveError::Parse(err)
    }
}
