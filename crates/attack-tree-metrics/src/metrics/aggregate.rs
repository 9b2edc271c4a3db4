//! Path cost aggregation.

use crate::model::{AttackGraph, AttackPotential, Cost};
use crate::traversal::AttackPath;

use super::types::PathCost;

/// Aggregate the cost of one attack path.
///
/// Leaves are deduplicated first, so a leaf reached through two AND
/// branches counts once. Leaves without an attack potential, or missing
/// from the snapshot, contribute zero in every dimension. An empty path
/// costs [`Cost::Infinite`].
///
/// # Example
/// ```
/// use attack_tree_metrics::metrics::cost_of;
/// use attack_tree_metrics::model::{AttackGraph, AttackNode, AttackPotential, Cost};
/// use attack_tree_metrics::traversal::AttackPath;
///
/// let graph = AttackGraph::from_nodes(vec![
///     AttackNode::leaf("a", AttackPotential::new(3, 2, 1, 1, 1)),
///     AttackNode::leaf("b", AttackPotential::new(2, 4, 3, 2, 1)),
/// ]).unwrap();
///
/// let cost = cost_of(&graph, &AttackPath::new(vec!["a", "b", "a"]));
/// assert_eq!(cost.potential, AttackPotential::new(3, 4, 3, 2, 1));
/// assert_eq!(cost.cost, Cost::Finite(13));
/// assert_eq!(cost.leaves, vec!["a", "b"]);
/// ```
pub fn cost_of(graph: &AttackGraph, path: &AttackPath<'_>) -> PathCost {
    let leaves = path.distinct_leaves();

    if leaves.is_empty() {
        return PathCost {
            cost: Cost::Infinite,
            potential: AttackPotential::ZERO,
            leaves: Vec::new(),
        };
    }

    let potential = leaves
        .iter()
        .filter_map(|id| graph.get(id).and_then(|node| node.attack_potential))
        .fold(AttackPotential::ZERO, AttackPotential::max);

    PathCost {
        cost: potential.cost(),
        potential,
        leaves: leaves.into_iter().map(str::to_string).collect(),
    }
}
