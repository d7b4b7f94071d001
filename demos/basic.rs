//! Basic example of using the gold_tour library.

use gold_tour::config::Config;
use gold_tour::problem::Problem;
use gold_tour::utils::{format_duration, save_solution};
use gold_tour::Solver;
use std::env;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get instance path from command line or use default
    let args: Vec<String> = env::args().collect();
    let instance_path = if args.len() > 1 {
        &args[1]
    } else {
        "instances/ring-20.json"
    };

    println!("Loading problem from: {}", instance_path);
    let problem = Problem::from_file(instance_path)?;
    println!(
        "Loaded problem: {} with {} customers",
        problem.name,
        problem.customer_count()
    );

    let config = Config::new()
        .with_ils_iterations(300)
        .with_lns(problem.customer_count() > 20)
        .with_lns_iterations(80)
        .with_destroy_fraction(0.25)
        .with_seed(2024);

    let mut solver = Solver::from_problem(problem, config)?;

    let start_time = Instant::now();
    let best_solution = solver.run()?;
    let runtime = start_time.elapsed();

    println!("Search completed in {}", format_duration(runtime));
    println!("Number of routes: {}", best_solution.route_count());
    println!("Number of pickups: {}", best_solution.chunk_count());
    println!("Best cost: {:.3}", solver.best_cost);

    let output_path = format!("{}.sol", solver.problem.name);
    println!("Saving solution to: {}", output_path);
    save_solution(&solver.best_solution, solver.best_cost, &solver.problem, &output_path)?;

    println!("{:?}", solver.best_solution);

    Ok(())
}
