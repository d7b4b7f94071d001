//! Unit tests for instance loading, validation and shortest distances.

use gold_tour::capacity::CapacityPlanner;
use gold_tour::distance::{ensure_reachable, DistanceOracle, ShortestDistances};
use gold_tour::error::SolveError;
use gold_tour::problem::{Problem, DEPOT};

const INSTANCE: &str = r#"{
    "name": "tiny",
    "alpha": 0.5,
    "beta": 1.5,
    "gold": [0.0, 12.0, 3.5, 7.0],
    "edges": [
        {"from": 0, "to": 1, "dist": 4.0},
        {"from": 1, "to": 2, "dist": 2.0},
        {"from": 2, "to": 3, "dist": 1.0},
        {"from": 0, "to": 3, "dist": 10.0}
    ]
}"#;

#[test]
fn test_from_json() {
    let problem = Problem::from_json(INSTANCE).unwrap();

    assert_eq!(problem.name, "tiny");
    assert_eq!(problem.node_count(), 4);
    assert_eq!(problem.customer_count(), 3);
    assert_eq!(problem.customers().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(problem.gold(2), 3.5);
    assert_eq!(problem.gold(DEPOT), 0.0);
    assert_eq!(problem.total_gold(), 22.5);
    assert_eq!(problem.max_gold(), 12.0);
    assert_eq!(problem.alpha(), 0.5);
    assert_eq!(problem.beta(), 1.5);
}

#[test]
fn test_shortest_distances() {
    let problem = Problem::from_json(INSTANCE).unwrap();
    let distances = ShortestDistances::compute(&problem);

    assert_eq!(distances.node_count(), 4);
    assert_eq!(distances.distance(0, 0), Some(0.0));
    assert_eq!(distances.distance(0, 1), Some(4.0));
    assert_eq!(distances.distance(0, 2), Some(6.0));
    // Going around through 1 and 2 is shorter than the direct edge
    assert_eq!(distances.distance(0, 3), Some(7.0));
    assert_eq!(distances.distance(3, 0), Some(7.0));
    assert_eq!(distances.distance(0, 9), None);
    assert!(ensure_reachable(&problem, &distances).is_ok());
}

#[test]
fn test_depot_gold_ignored() {
    let problem =
        Problem::new("d".to_string(), vec![99.0, 1.0], vec![(0, 1, 1.0)], 1.0, 1.0).unwrap();
    assert_eq!(problem.gold(DEPOT), 0.0);
    assert_eq!(problem.total_gold(), 1.0);
}

#[test]
fn test_invalid_inputs() {
    let negative_gold = Problem::new("n".to_string(), vec![0.0, -1.0], vec![], 1.0, 1.0);
    assert!(matches!(
        negative_gold,
        Err(SolveError::NegativeResource { node: 1, .. })
    ));

    let negative_alpha = Problem::new("a".to_string(), vec![0.0, 1.0], vec![], -0.5, 1.0);
    assert!(matches!(
        negative_alpha,
        Err(SolveError::InvalidParameter { name: "alpha", .. })
    ));

    let nan_beta = Problem::new("b".to_string(), vec![0.0, 1.0], vec![], 0.5, f64::NAN);
    assert!(matches!(
        nan_beta,
        Err(SolveError::InvalidParameter { name: "beta", .. })
    ));

    let bad_edge = Problem::new("e".to_string(), vec![0.0, 1.0], vec![(0, 5, 1.0)], 1.0, 1.0);
    assert!(matches!(bad_edge, Err(SolveError::InvalidEdge { to: 5, .. })));

    let negative_edge =
        Problem::new("e".to_string(), vec![0.0, 1.0], vec![(0, 1, -2.0)], 1.0, 1.0);
    assert!(matches!(negative_edge, Err(SolveError::InvalidEdge { .. })));
}

#[test]
fn test_negative_beta_rejected_before_planning() {
    let json = INSTANCE.replace("\"beta\": 1.5", "\"beta\": -1.0");
    assert!(matches!(
        Problem::from_json(&json),
        Err(SolveError::InvalidParameter { name: "beta", .. })
    ));

    let problem = Problem::from_json(INSTANCE).unwrap();
    let cap = CapacityPlanner::global_cap(&problem);
    // 4 nodes: exponent 0.5, f = 1 / sqrt(1.5)
    assert!((cap - 12.0 / 1.5_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Problem::from_json("{ not json"),
        Err(SolveError::Parse(_))
    ));
    assert!(matches!(
        Problem::from_file("/nonexistent/instance.json"),
        Err(SolveError::Io(_))
    ));
}

#[test]
fn test_unreachable_customer() {
    let problem = Problem::new(
        "island".to_string(),
        vec![0.0, 1.0, 2.0],
        vec![(0, 1, 3.0)],
        1.0,
        1.0,
    )
    .unwrap();
    let distances = ShortestDistances::compute(&problem);

    assert_eq!(distances.distance(0, 2), None);
    assert!(matches!(
        ensure_reachable(&problem, &distances),
        Err(SolveError::Unreachable { from: 0, to: 2 })
    ));
}

#[test]
fn test_error_messages() {
    let err = SolveError::Unreachable { from: 0, to: 4 };
    assert_eq!(err.to_string(), "No path between node 0 and node 4");

    let err = SolveError::NegativeResource {
        node: 3,
        amount: -2.0,
    };
    assert_eq!(err.to_string(), "Node 3 has invalid resource amount -2");
}
