//! Highlighting and circumvention queries on the vehicle snapshot.

use attack_tree_metrics::{
    critical_nodes, direct_parents_of, has_circumvention_children, is_in_circumvention_subtree,
    trace_ancestors, TraversalMask,
};

use crate::common::fixtures::vehicle_graph;
use crate::common::helpers::id_set;

#[test]
fn test_critical_nodes_initial_risk() {
    let graph = vehicle_graph();
    let tree = critical_nodes(&graph, "G1", &TraversalMask::initial_risk()).expect("paths");

    // relay_forward is shared with the circumvention branch; tracing follows
    // every parent in the snapshot regardless of masks.
    assert_eq!(
        tree.critical_nodes,
        id_set(&[
            "G1",
            "bypass_immobilizer",
            "relay",
            "relay_capture",
            "relay_forward",
        ])
    );
}

#[test]
fn test_trace_from_explicit_paths() {
    let graph = vehicle_graph();
    let marked = trace_ancestors(&graph, "G2", [["can_inject", "gateway_bypass"]]);
    assert_eq!(marked, id_set(&["G2", "can_inject", "gateway_bypass"]));
}

#[test]
fn test_circumvention_membership() {
    let graph = vehicle_graph();

    assert!(has_circumvention_children(&graph, "G1"));
    assert!(!has_circumvention_children(&graph, "G2"));

    assert!(is_in_circumvention_subtree(&graph, "bypass_immobilizer"));
    assert!(is_in_circumvention_subtree(&graph, "side_channel"));
    assert!(is_in_circumvention_subtree(&graph, "relay_forward"));
    assert!(!is_in_circumvention_subtree(&graph, "relay_capture"));
    assert!(!is_in_circumvention_subtree(&graph, "G1"));
}

#[test]
fn test_direct_parents() {
    let graph = vehicle_graph();
    assert_eq!(
        direct_parents_of(&graph, "relay_forward"),
        vec!["relay", "bypass_immobilizer"]
    );
    assert_eq!(direct_parents_of(&graph, "obd"), vec!["G1"]);
    assert!(direct_parents_of(&graph, "G1").is_empty());
}
