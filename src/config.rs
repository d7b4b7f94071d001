//! Configuration parameters for the search drivers.

use crate::error::SolveError;
use serde::{Deserialize, Serialize};

/// Which operator set and start solution the ILS phase uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchVariant {
    /// Nodes are never split; move, swap and split operators only.
    Plain,
    /// Nodes are split by the capacity planner; all five operators.
    CapacityAware,
}

/// How greedy repair scores a trial insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertionEvaluation {
    /// Evaluate the whole healed solution for every trial.
    FullRecompute,
    /// Evaluate only the cost change of the route that receives the chunk.
    RouteDelta,
}

/// Configuration settings for a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of ILS iterations
    pub ils_iterations: u32,
    /// Number of LNS iterations
    pub lns_iterations: u32,
    /// Share of chunks removed by each destroy step
    pub destroy_fraction: f64,
    /// Run the LNS refinement after ILS
    pub use_lns: bool,
    pub variant: SearchVariant,
    pub insertion: InsertionEvaluation,
    /// Seed for the search RNG; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ils_iterations: 300,
            lns_iterations: 80,
            destroy_fraction: 0.25,
            use_lns: false,
            variant: SearchVariant::CapacityAware,
            insertion: InsertionEvaluation::FullRecompute,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the number of ILS iterations.
    pub fn with_ils_iterations(mut self, iterations: u32) -> Self {
        self.ils_iterations = iterations;
        self
    }

    /// Set the number of LNS iterations.
    pub fn with_lns_iterations(mut self, iterations: u32) -> Self {
        self.lns_iterations = iterations;
        self
    }

    /// Set the destroy fraction.
    pub fn with_destroy_fraction(mut self, fraction: f64) -> Self {
        self.destroy_fraction = fraction;
        self
    }

    /// Enable or disable the LNS phase.
    pub fn with_lns(mut self, use_lns: bool) -> Self {
        self.use_lns = use_lns;
        self
    }

    pub fn with_variant(mut self, variant: SearchVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_insertion(mut self, insertion: InsertionEvaluation) -> Self {
        self.insertion = insertion;
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings the drivers cannot run with.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(self.destroy_fraction > 0.0 && self.destroy_fraction <= 1.0) {
            return Err(SolveError::InvalidConfig(format!(
                "destroy fraction must lie in (0, 1], got {}",
                self.destroy_fraction
            )));
        }
        Ok(())
    }
}
