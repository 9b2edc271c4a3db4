//! Minimal-cost resolution for trees and nodes.

use crate::model::AttackGraph;
use crate::traversal::{enumerate_paths_bounded, trace_ancestors, TraversalMask};

use super::aggregate::cost_of;
use super::types::{CriticalTree, NodeMetrics, PathCost, TreeMetrics};

/// Whole-tree metrics for `root_id`.
///
/// # Returns
/// * `None` - the root is unknown or yields no attack path under `mask`
/// * `Some(metrics)` - the minimal cost and every path achieving it, ties
///   preserved in enumeration order
///
/// If every path is infeasible the minimal cost is the sentinel `99`.
///
/// # Example
/// ```
/// use attack_tree_metrics::metrics::tree_metrics;
/// use attack_tree_metrics::model::{AttackGraph, AttackNode, AttackPotential, Cost, LogicGate};
/// use attack_tree_metrics::traversal::TraversalMask;
///
/// let graph = AttackGraph::from_nodes(vec![
///     AttackNode::attack_root("root", Some(LogicGate::Or), ["cheap", "dear"]),
///     AttackNode::leaf("cheap", AttackPotential::new(1, 3, 3, 1, 2)),
///     AttackNode::leaf("dear", AttackPotential::new(10, 6, 3, 4, 2)),
/// ]).unwrap();
///
/// let metrics = tree_metrics(&graph, "root", &TraversalMask::initial_risk()).unwrap();
/// assert_eq!(metrics.min_cost, Cost::Finite(10));
/// assert_eq!(metrics.critical_paths, vec![vec!["cheap".to_string()]]);
/// ```
#[tracing::instrument(
    level = "debug",
    skip(graph, mask),
    fields(include_circumvention = mask.include_circumvention)
)]
pub fn tree_metrics(graph: &AttackGraph, root_id: &str, mask: &TraversalMask) -> Option<TreeMetrics> {
    resolve_tree(graph, root_id, mask, None)
}

/// Metrics for a single node: the cost and tuple of its best path.
///
/// # Returns
/// * `None` - the node is unknown or not an attack node
/// * `Some(NodeMetrics::no_paths())` - attack node without any attack path
/// * `Some(metrics)` - cost and full tuple of the winning path
///
/// The tuple is that of one concrete path, not a component-wise minimum
/// across paths. On ties the first minimal path in enumeration order wins.
#[tracing::instrument(
    level = "debug",
    skip(graph, mask),
    fields(include_circumvention = mask.include_circumvention)
)]
pub fn node_metrics(graph: &AttackGraph, node_id: &str, mask: &TraversalMask) -> Option<NodeMetrics> {
    resolve_node(graph, node_id, mask, None)
}

/// Tree metrics plus every node lying on a critical path up to `root_id`.
///
/// Returns `None` exactly when [`tree_metrics`] does.
pub fn critical_nodes(graph: &AttackGraph, root_id: &str, mask: &TraversalMask) -> Option<CriticalTree> {
    resolve_critical(graph, root_id, mask, None)
}

pub(crate) fn resolve_tree(
    graph: &AttackGraph,
    root_id: &str,
    mask: &TraversalMask,
    max_paths: Option<usize>,
) -> Option<TreeMetrics> {
    let enumeration = enumerate_paths_bounded(graph, root_id, mask, max_paths);
    if enumeration.is_empty() {
        tracing::debug!(root_id, "no attack path");
        return None;
    }

    let costs: Vec<PathCost> = enumeration
        .paths
        .iter()
        .map(|path| cost_of(graph, path))
        .collect();
    let min_cost = costs.iter().map(|c| c.cost).min()?;

    let critical_paths: Vec<Vec<String>> = costs
        .into_iter()
        .filter(|c| c.cost == min_cost)
        .map(|c| c.leaves)
        .collect();

    tracing::debug!(
        root_id,
        %min_cost,
        paths = enumeration.paths.len(),
        critical = critical_paths.len(),
        "tree metrics resolved"
    );

    Some(TreeMetrics {
        min_cost,
        critical_paths,
        path_count: enumeration.paths.len(),
        truncated: enumeration.truncated,
    })
}

pub(crate) fn resolve_node(
    graph: &AttackGraph,
    node_id: &str,
    mask: &TraversalMask,
    max_paths: Option<usize>,
) -> Option<NodeMetrics> {
    graph.attack_node(node_id)?;

    let enumeration = enumerate_paths_bounded(graph, node_id, mask, max_paths);

    let mut best: Option<PathCost> = None;
    for path in &enumeration.paths {
        let candidate = cost_of(graph, path);
        // Strict comparison keeps the first minimal path.
        if best.as_ref().map_or(true, |b| candidate.cost < b.cost) {
            best = Some(candidate);
        }
    }

    Some(match best {
        Some(winner) => NodeMetrics {
            cost: winner.cost,
            potential: winner.potential,
            has_subtree: true,
        },
        None => NodeMetrics::no_paths(),
    })
}

pub(crate) fn resolve_critical(
    graph: &AttackGraph,
    root_id: &str,
    mask: &TraversalMask,
    max_paths: Option<usize>,
) -> Option<CriticalTree> {
    let metrics = resolve_tree(graph, root_id, mask, max_paths)?;
    let critical_nodes = trace_ancestors(graph, root_id, &metrics.critical_paths);
    Some(CriticalTree {
        metrics,
        critical_nodes,
    })
}
