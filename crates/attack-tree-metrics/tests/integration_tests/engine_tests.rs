//! Bounded evaluation, generated trees and concurrent queries.

use attack_tree_metrics::{
    enumerate_paths, tree_metrics, Cost, EngineConfig, MetricsEngine, TraversalMask,
};

use crate::common::fixtures::{generate_product_tree, generate_wide_tree, vehicle_graph};
use crate::common::helpers::path;

#[test]
fn test_evaluate_all_vehicle_roots() {
    let graph = vehicle_graph();
    let engine = MetricsEngine::new(&graph, EngineConfig::default()).expect("engine");

    let results = engine.evaluate_roots(&TraversalMask::initial_risk());
    let summary: Vec<(&str, Option<Cost>)> = results
        .iter()
        .map(|r| (r.root_id.as_str(), r.metrics.as_ref().map(|m| m.min_cost)))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("G1", Some(Cost::Finite(15))),
            ("G2", Some(Cost::Finite(34))),
            ("G3", None),
        ]
    );
}

#[test]
fn test_wide_tree_minimum() {
    let graph = generate_wide_tree(10, 3);
    let metrics = tree_metrics(&graph, "root", &TraversalMask::initial_risk()).expect("paths");

    assert_eq!(metrics.path_count, 10);
    assert_eq!(metrics.min_cost, Cost::Finite(6));
    assert_eq!(metrics.critical_paths, vec![path(&["g0_l0", "g0_l1", "g0_l2"])]);
}

#[test]
fn test_product_tree_path_count_and_bound() {
    let graph = generate_product_tree(4, 3);
    let mask = TraversalMask::initial_risk();

    assert_eq!(enumerate_paths(&graph, "root", &mask).len(), 81);

    let metrics = tree_metrics(&graph, "root", &mask).expect("paths");
    assert_eq!(metrics.min_cost, Cost::Finite(3));
    assert_eq!(
        metrics.critical_paths,
        vec![path(&["or0_l0", "or1_l0", "or2_l0", "or3_l0"])]
    );

    let engine = MetricsEngine::new(&graph, EngineConfig::bounded(10)).expect("engine");
    let bounded = engine.tree_metrics("root", &mask).expect("paths");
    assert!(bounded.truncated);
    assert_eq!(bounded.path_count, 10);
}

#[test]
fn test_concurrent_queries_share_snapshot() {
    let graph = vehicle_graph();
    let mask = TraversalMask::residual_risk();
    let expected = tree_metrics(&graph, "G1", &mask);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| tree_metrics(&graph, "G1", &mask)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    });
}
