//! Unit tests for the load-dependent cost model.

use gold_tour::chunk::ResourceChunk;
use gold_tour::cost::{leg_cost, route_cost, solution_cost};
use gold_tour::distance::ShortestDistances;
use gold_tour::error::SolveError;
use gold_tour::problem::Problem;
use gold_tour::solution::{Route, Solution};

/// Depot, A = 1 and B = 2 on a triangle: 0-A = 3, A-B = 4, B-0 = 5.
fn create_triangle_problem(alpha: f64, beta: f64) -> Problem {
    Problem::new(
        "Triangle".to_string(),
        vec![0.0, 7.0, 11.0],
        vec![(0, 1, 3.0), (1, 2, 4.0), (2, 0, 5.0)],
        alpha,
        beta,
    )
    .unwrap()
}

#[test]
fn test_single_node_without_drag() {
    for beta in [0.0, 0.5, 1.0, 2.0, 3.7] {
        let problem = Problem::new(
            "Single".to_string(),
            vec![0.0, 5.0],
            vec![(0, 1, 10.0)],
            0.0,
            beta,
        )
        .unwrap();
        let distances = ShortestDistances::compute(&problem);
        let route = Route::with_chunk(ResourceChunk::new(1, 5.0));

        let cost = route_cost(&route, &problem, &distances).unwrap();
        assert!((cost - 20.0).abs() < 1e-9, "beta {} gave {}", beta, cost);
    }
}

#[test]
fn test_two_node_route_without_drag() {
    let problem = create_triangle_problem(0.0, 2.0);
    let distances = ShortestDistances::compute(&problem);

    let route = Route::new(vec![ResourceChunk::new(1, 7.0), ResourceChunk::new(2, 11.0)]);
    let cost = route_cost(&route, &problem, &distances).unwrap();

    assert!((cost - 12.0).abs() < 1e-9);
}

#[test]
fn test_drag_grows_with_load() {
    let problem = Problem::new(
        "Single".to_string(),
        vec![0.0, 5.0],
        vec![(0, 1, 10.0)],
        1.0,
        2.0,
    )
    .unwrap();
    let distances = ShortestDistances::compute(&problem);
    let route = Route::with_chunk(ResourceChunk::new(1, 5.0));

    // Out empty: 10. Back with 5: 10 + (1 * 10 * 5)^2.
    let cost = route_cost(&route, &problem, &distances).unwrap();
    assert!((cost - 2520.0).abs() < 1e-9);
}

#[test]
fn test_visit_order_matters() {
    let problem = create_triangle_problem(0.1, 1.5);
    let distances = ShortestDistances::compute(&problem);

    let forward = Route::new(vec![ResourceChunk::new(1, 7.0), ResourceChunk::new(2, 11.0)]);
    let backward = Route::new(vec![ResourceChunk::new(2, 11.0), ResourceChunk::new(1, 7.0)]);

    let forward_cost = route_cost(&forward, &problem, &distances).unwrap();
    let backward_cost = route_cost(&backward, &problem, &distances).unwrap();

    let expected_forward = leg_cost(0.1, 1.5, 3.0, 0.0)
        + leg_cost(0.1, 1.5, 4.0, 7.0)
        + leg_cost(0.1, 1.5, 5.0, 18.0);
    assert!((forward_cost - expected_forward).abs() < 1e-9);
    assert!((forward_cost - backward_cost).abs() > 1e-6);
}

#[test]
fn test_solution_cost_sums_routes() {
    let problem = create_triangle_problem(0.2, 1.2);
    let distances = ShortestDistances::compute(&problem);

    let a = Route::with_chunk(ResourceChunk::new(1, 7.0));
    let b = Route::with_chunk(ResourceChunk::new(2, 11.0));
    let solution = Solution::from_routes(vec![a.clone(), b.clone()]);

    let total = solution_cost(&solution, &problem, &distances).unwrap();
    let expected = route_cost(&a, &problem, &distances).unwrap()
        + route_cost(&b, &problem, &distances).unwrap();

    assert!((total - expected).abs() < 1e-9);
    assert_eq!(solution_cost(&Solution::new(), &problem, &distances).unwrap(), 0.0);
}

#[test]
fn test_cost_is_non_negative() {
    for (alpha, beta) in [(0.0, 0.0), (0.0, 2.0), (0.5, 0.0), (1.0, 0.5), (3.0, 2.5)] {
        let problem = create_triangle_problem(alpha, beta);
        let distances = ShortestDistances::compute(&problem);
        let solution = Solution::from_routes(vec![Route::new(vec![
            ResourceChunk::new(2, 11.0),
            ResourceChunk::new(1, 7.0),
            ResourceChunk::new(1, 0.0),
        ])]);

        let cost = solution_cost(&solution, &problem, &distances).unwrap();
        assert!(cost >= 0.0);
    }

    assert_eq!(leg_cost(1.0, 2.0, 0.0, 100.0), 0.0);
    assert_eq!(leg_cost(0.0, 0.0, 4.0, 100.0), 4.0);
}

#[test]
fn test_missing_distance_fails() {
    let problem = create_triangle_problem(1.0, 1.0);
    let distances = ShortestDistances::from_matrix(vec![
        vec![0.0, 3.0, f64::INFINITY],
        vec![3.0, 0.0, 4.0],
        vec![f64::INFINITY, 4.0, 0.0],
    ]);

    let route = Route::with_chunk(ResourceChunk::new(2, 11.0));
    let result = route_cost(&route, &problem, &distances);

    assert!(matches!(
        result,
        Err(SolveError::Unreachable { from: 0, to: 2 })
    ));
}
