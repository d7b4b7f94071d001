//! Unit tests for the ILS driver.

use gold_tour::capacity::{CapacityPlanner, CapacityTable};
use gold_tour::chunk::{decompose, ResourceChunk};
use gold_tour::config::{Config, SearchVariant};
use gold_tour::context::SearchContext;
use gold_tour::distance::ShortestDistances;
use gold_tour::ils::IteratedLocalSearch;
use gold_tour::neighborhood::OperatorSet;
use gold_tour::problem::Problem;
use gold_tour::repair::covers_exactly;
use gold_tour::solution::Solution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Customers on a ring around the depot, 8 units out and 5 apart.
fn create_ring_problem(customers: usize, alpha: f64, beta: f64) -> Problem {
    let mut gold = vec![0.0];
    let mut edges = Vec::new();
    for node in 1..=customers {
        gold.push(10.0 + (node % 4) as f64 * 15.0);
        edges.push((0, node, 8.0));
        if node > 1 {
            edges.push((node - 1, node, 5.0));
        }
    }
    edges.push((customers, 1, 5.0));

    Problem::new("Ring".to_string(), gold, edges, alpha, beta).unwrap()
}

fn chunks_for(problem: &Problem) -> Vec<ResourceChunk> {
    decompose(problem, &CapacityPlanner::plan(problem))
}

#[test]
fn test_ils_improves_monotonically() {
    let problem = create_ring_problem(12, 0.02, 1.5);
    let distances = ShortestDistances::compute(&problem);
    let canonical = chunks_for(&problem);
    let ctx = SearchContext::new(&problem, &distances, &canonical);

    let ils = IteratedLocalSearch::new(&Config::new().with_ils_iterations(200));
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let outcome = ils.run(&ctx, &mut rng).unwrap();

    assert_eq!(outcome.iterations(), 200);
    assert!(outcome.cost <= outcome.initial_cost);
    assert!(covers_exactly(&outcome.solution, &canonical));
    assert!((ctx.cost(&outcome.solution).unwrap() - outcome.cost).abs() < 1e-9);

    let mut previous = outcome.initial_cost;
    for &cost in &outcome.history {
        assert!(cost <= previous);
        previous = cost;
    }
    assert_eq!(previous, outcome.cost);
}

#[test]
fn test_capacity_aware_start_is_no_worse_than_star() {
    let problem = create_ring_problem(10, 0.5, 2.0);
    let distances = ShortestDistances::compute(&problem);
    let canonical = chunks_for(&problem);
    let ctx = SearchContext::new(&problem, &distances, &canonical);
    let star_cost = ctx.cost(&Solution::star(&canonical)).unwrap();

    let ils = IteratedLocalSearch::new(&Config::new());
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (start, cost) = ils.initial_solution(&ctx, &mut rng).unwrap();

        assert!(cost <= star_cost + 1e-9);
        assert!(covers_exactly(&start, &canonical));
    }
}

#[test]
fn test_cheap_single_route_start_is_chosen() {
    // Without drag a single tour around the ring beats one round trip per node
    let problem = create_ring_problem(6, 0.0, 1.0);
    let distances = ShortestDistances::compute(&problem);
    let canonical = chunks_for(&problem);
    let ctx = SearchContext::new(&problem, &distances, &canonical);

    let ils = IteratedLocalSearch::new(&Config::new());
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let (start, _) = ils.initial_solution(&ctx, &mut rng).unwrap();

    assert_eq!(start.route_count(), 1);
}

#[test]
fn test_plain_variant_starts_from_star() {
    let problem = create_ring_problem(6, 0.0, 1.0);
    let distances = ShortestDistances::compute(&problem);
    let canonical = decompose(&problem, &CapacityTable::unbounded(&problem));
    let ctx = SearchContext::new(&problem, &distances, &canonical);

    let ils = IteratedLocalSearch::new(&Config::new().with_variant(SearchVariant::Plain));
    assert_eq!(ils.operators(), OperatorSet::Plain);

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let (start, _) = ils.initial_solution(&ctx, &mut rng).unwrap();

    assert_eq!(start.route_count(), 6);
    assert!(covers_exactly(&start, &canonical));
}

#[test]
fn test_ils_without_chunks() {
    let problem = Problem::new("Depot".to_string(), vec![0.0], vec![], 1.0, 2.0).unwrap();
    let distances = ShortestDistances::compute(&problem);
    let canonical: Vec<ResourceChunk> = Vec::new();
    let ctx = SearchContext::new(&problem, &distances, &canonical);

    let ils = IteratedLocalSearch::new(&Config::new());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let outcome = ils.run(&ctx, &mut rng).unwrap();

    assert!(outcome.solution.is_empty());
    assert_eq!(outcome.cost, 0.0);
    assert!(outcome.history.is_empty());
}

#[test]
fn test_same_seed_same_result() {
    let problem = create_ring_problem(9, 0.1, 1.3);
    let distances = ShortestDistances::compute(&problem);
    let canonical = chunks_for(&problem);
    let ctx = SearchContext::new(&problem, &distances, &canonical);
    let ils = IteratedLocalSearch::new(&Config::new().with_ils_iterations(100));

    let first = ils.run(&ctx, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    let second = ils.run(&ctx, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();

    assert_eq!(first.solution, second.solution);
    assert_eq!(first.history, second.history);
}
