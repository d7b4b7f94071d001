//! # gold_tour
//!
//! Tour search for collecting gold from the nodes of a weighted graph and
//! bringing it to a depot, where carrying a load makes every leg more
//! expensive: a leg of distance `d` travelled with load `w` costs
//! `d + (alpha * d * w)^beta`.
//!
//! Nodes holding a lot of gold are split into several pickups ("chunks")
//! bounded by an adaptive per-node capacity. The search runs in two phases:
//! Iterated Local Search over five neighborhood moves, then an optional
//! Large Neighborhood Search refinement with random destroy and greedy
//! cheapest-insertion repair.

pub mod capacity;
pub mod chunk;
pub mod config;
pub mod context;
pub mod cost;
pub mod distance;
pub mod error;
pub mod ils;
pub mod lns;
pub mod neighborhood;
pub mod outcome;
pub mod problem;
pub mod repair;
pub mod solution;
pub mod utils;

use crate::capacity::{CapacityPlanner, CapacityTable};
use crate::chunk::ResourceChunk;
use crate::config::{Config, SearchVariant};
use crate::context::SearchContext;
use crate::distance::{DistanceOracle, ShortestDistances};
use crate::error::SolveError;
use crate::ils::IteratedLocalSearch;
use crate::lns::LargeNeighborhoodSearch;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::utils::SearchStatistics;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Orchestrates one solve: capacity planning, decomposition, ILS and LNS.
pub struct Solver<D: DistanceOracle = ShortestDistances> {
    pub problem: Problem,
    pub distances: D,
    pub config: Config,
    pub capacities: CapacityTable,
    /// Canonical chunk multiset of the instance
    pub chunks: Vec<ResourceChunk>,
    pub best_solution: Solution,
    pub best_cost: f64,
    /// Best cost after every ILS then every LNS iteration
    pub history: Vec<f64>,
    pub statistics: Option<SearchStatistics>,
    pub run_time: Duration,
}

impl Solver<ShortestDistances> {
    /// Create a solver, computing shortest distances over the problem graph.
    pub fn from_problem(problem: Problem, config: Config) -> Result<Self, SolveError> {
        let distances = ShortestDistances::compute(&problem);
        Solver::new(problem, distances, config)
    }
}

impl<D: DistanceOracle> Solver<D> {
    /// Validate the inputs and derive the capacity table and chunk multiset.
    pub fn new(problem: Problem, distances: D, config: Config) -> Result<Self, SolveError> {
        config.validate()?;
        distance::ensure_reachable(&problem, &distances)?;

        let capacities = match config.variant {
            SearchVariant::Plain => CapacityTable::unbounded(&problem),
            SearchVariant::CapacityAware => CapacityPlanner::plan(&problem),
        };
        let chunks = chunk::decompose(&problem, &capacities);

        info!(
            "Instance `{}`: {} customers split into {} chunks",
            problem.name,
            problem.customer_count(),
            chunks.len()
        );

        Ok(Solver {
            problem,
            distances,
            config,
            capacities,
            chunks,
            best_solution: Solution::new(),
            best_cost: 0.0,
            history: Vec::new(),
            statistics: None,
            run_time: Duration::from_secs(0),
        })
    }

    /// Run ILS, then LNS if enabled, and return the best solution.
    pub fn run(&mut self) -> Result<&Solution, SolveError> {
        let start_time = Instant::now();
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let ctx = SearchContext::new(&self.problem, &self.distances, &self.chunks);

        let ils = IteratedLocalSearch::new(&self.config).run(&ctx, &mut rng)?;
        let initial_cost = ils.initial_cost;
        let ils_iterations = ils.iterations();
        let mut improvements = ils.improvements;
        let mut history = ils.history;
        let mut best = (ils.solution, ils.cost);

        let mut lns_iterations = 0;
        if self.config.use_lns {
            let lns = LargeNeighborhoodSearch::new(&self.config).run(best.0, &ctx, &mut rng)?;
            lns_iterations = lns.iterations();
            improvements += lns.improvements;
            history.extend(lns.history);
            best = (lns.solution, lns.cost);
        }

        self.run_time = start_time.elapsed();
        self.history = history;
        self.best_cost = best.1;
        self.best_solution = best.0;
        self.statistics = Some(SearchStatistics {
            ils_iterations,
            lns_iterations,
            improvements,
            runtime: self.run_time,
            initial_cost,
            best_cost: self.best_cost,
            routes: self.best_solution.route_count(),
            chunks: self.best_solution.chunk_count(),
        });

        info!(
            "Solve finished in {}: cost {:.3}, {} routes",
            utils::format_duration(self.run_time),
            self.best_cost,
            self.best_solution.route_count()
        );

        Ok(&self.best_solution)
    }

    /// Export the best solution as a depot-delimited `(node, amount)` path.
    pub fn path(&self) -> Vec<(usize, f64)> {
        self.best_solution.to_path()
    }
}
