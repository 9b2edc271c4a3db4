//! Attack graph traversal.
//!
//! # Algorithms
//!
//! - **paths**: leaf-first enumeration of attack paths under AND/OR gates,
//!   iterative with an explicit stack and a per-call memo keyed on node id
//! - **ancestry**: reverse-edge back-propagation from critical leaves and
//!   circumvention sub-tree membership
//!
//! # Masking
//!
//! Enumeration honors a [`TraversalMask`]: nodes whose required
//! configurations are not all active are pruned, and circumvention
//! sub-trees are skipped unless explicitly included.
//!
//! # Example
//!
//! ```
//! use attack_tree_metrics::model::{AttackGraph, AttackNode, AttackPotential, LogicGate};
//! use attack_tree_metrics::traversal::{enumerate_paths, TraversalMask};
//!
//! let graph = AttackGraph::from_nodes(vec![
//!     AttackNode::attack_root("root", Some(LogicGate::And), ["a", "b"]),
//!     AttackNode::leaf("a", AttackPotential::new(1, 0, 0, 0, 0)),
//!     AttackNode::leaf("b", AttackPotential::new(0, 1, 0, 0, 0)),
//! ]).unwrap();
//!
//! let paths = enumerate_paths(&graph, "root", &TraversalMask::initial_risk());
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].leaves(), &["a", "b"]);
//! ```

mod mask;

pub mod ancestry;
pub mod paths;

pub use self::ancestry::{
    direct_parents_of, has_circumvention_children, is_in_circumvention_subtree, trace_ancestors,
};
pub use self::mask::TraversalMask;
pub use self::paths::{enumerate_paths, enumerate_paths_bounded, AttackPath, PathEnumeration};
