//! Attack Tree Metrics for Threat Analysis and Risk Assessment
//!
//! Given a snapshot of attack nodes joined by AND/OR gates, this crate
//! enumerates the attack paths that satisfy a node, aggregates each path's
//! attack potential, and resolves the minimal-cost ("critical") paths.
//!
//! # Architecture
//!
//! - **model**: node records, attack potential tuples, configurations, snapshot
//! - **traversal**: path enumeration and ancestry / circumvention queries
//! - **metrics**: path cost aggregation, tree and node metrics, bounded engine
//! - **config**: resource bounds for enumeration
//! - **error**: construction errors with AttackTreeError
//!
//! Every query is a pure function of the snapshot, the node id and a
//! [`TraversalMask`]. Memo tables live for a single call, so a snapshot can
//! be queried from many threads at once.
//!
//! # Example
//!
//! ```
//! use attack_tree_metrics::{
//!     node_metrics, tree_metrics, AttackGraph, AttackNode, AttackPotential, Cost, LogicGate,
//!     TraversalMask,
//! };
//!
//! let graph = AttackGraph::from_nodes(vec![
//!     AttackNode::attack_root("root", Some(LogicGate::Or), ["obd", "ota"]),
//!     AttackNode::gate("ota", LogicGate::And, ["mitm", "sign"]),
//!     AttackNode::leaf("obd", AttackPotential::new(1, 3, 3, 4, 4)),
//!     AttackNode::leaf("mitm", AttackPotential::new(4, 6, 3, 1, 4)),
//!     AttackNode::leaf("sign", AttackPotential::new(19, 8, 11, 1, 9)),
//! ])?;
//!
//! let mask = TraversalMask::initial_risk();
//! let metrics = tree_metrics(&graph, "root", &mask).expect("root has paths");
//! assert_eq!(metrics.min_cost, Cost::Finite(15));
//! assert_eq!(metrics.critical_paths, vec![vec!["obd".to_string()]]);
//!
//! let ota = node_metrics(&graph, "ota", &mask).expect("attack node");
//! assert_eq!(ota.potential, AttackPotential::new(19, 8, 11, 1, 9));
//! # Ok::<(), attack_tree_metrics::AttackTreeError>(())
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod traversal;

// Re-exports for convenience
pub use config::EngineConfig;
pub use error::{AttackTreeError, AttackTreeResult};
pub use metrics::{
    cost_of, critical_nodes, node_metrics, tree_metrics, CriticalTree, MetricsEngine,
    NodeMetrics, PathCost, RootEvaluation, TreeMetrics,
};
pub use model::{
    ActiveConfigurations, AttackGraph, AttackNode, AttackPotential, Configuration, Cost,
    LogicGate, NodeKind, NodeRole, ATTACK_ROOT_TAG, CIRCUMVENT_ROOT_TAG, INFEASIBLE_RATING,
};
pub use traversal::{
    direct_parents_of, enumerate_paths, enumerate_paths_bounded, has_circumvention_children,
    is_in_circumvention_subtree, trace_ancestors, AttackPath, PathEnumeration, TraversalMask,
};
