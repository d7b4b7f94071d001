use clap::Parser;
use gold_tour::config::{Config, InsertionEvaluation, SearchVariant};
use gold_tour::problem::Problem;
use gold_tour::solution::Solution;
use gold_tour::utils::save_solution;
use gold_tour::Solver;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

/// Search for cheap gold collection tours.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instance file (JSON)
    instance: PathBuf,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 300)]
    ils_iterations: u32,

    /// Refine the ILS result with Large Neighborhood Search
    #[arg(long)]
    lns: bool,

    #[arg(long, default_value_t = 80)]
    lns_iterations: u32,

    #[arg(long, default_value_t = 0.25)]
    destroy_fraction: f64,

    /// Never split nodes and use the three basic moves only
    #[arg(long)]
    plain: bool,

    /// Score insertions by route cost deltas instead of full recomputation
    #[arg(long)]
    route_delta: bool,

    /// Write the exported path and routes as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a text report of the routes
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Serialize)]
struct Export<'a> {
    cost: f64,
    path: Vec<(usize, f64)>,
    solution: &'a Solution,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let problem = Problem::from_file(&args.instance)?;
    info!(
        "Loaded `{}` with {} customers (alpha {}, beta {})",
        problem.name,
        problem.customer_count(),
        problem.alpha(),
        problem.beta()
    );

    let mut config = Config::new()
        .with_ils_iterations(args.ils_iterations)
        .with_lns(args.lns)
        .with_lns_iterations(args.lns_iterations)
        .with_destroy_fraction(args.destroy_fraction);
    if args.plain {
        config = config.with_variant(SearchVariant::Plain);
    }
    if args.route_delta {
        config = config.with_insertion(InsertionEvaluation::RouteDelta);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut solver = Solver::from_problem(problem, config)?;
    solver.run()?;

    if let Some(stats) = &solver.statistics {
        println!("{}", stats.format());
    }

    if let Some(path) = &args.report {
        save_solution(&solver.best_solution, solver.best_cost, &solver.problem, path)?;
    }

    if let Some(path) = &args.output {
        let export = Export {
            cost: solver.best_cost,
            path: solver.path(),
            solution: &solver.best_solution,
        };
        serde_json::to_writer_pretty(File::create(path)?, &export)?;
        println!("Solution written to {}", path.display());
    }

    Ok(())
}
