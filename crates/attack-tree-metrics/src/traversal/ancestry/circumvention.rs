//! Circumvention sub-tree membership.

use std::collections::{HashSet, VecDeque};

use crate::model::AttackGraph;

/// True iff any direct child of `node_id` is tagged `circumvent-root`.
///
/// Unknown ids and dangling children yield false.
pub fn has_circumvention_children(graph: &AttackGraph, node_id: &str) -> bool {
    graph.get(node_id).is_some_and(|node| {
        node.children
            .iter()
            .filter_map(|child| graph.get(child))
            .any(|child| child.is_circumvent_root())
    })
}

/// Nodes whose children list directly contains `target_id`.
///
/// One hop only, in snapshot insertion order.
pub fn direct_parents_of(graph: &AttackGraph, target_id: &str) -> Vec<String> {
    graph
        .nodes()
        .filter(|node| node.children.iter().any(|child| child == target_id))
        .map(|node| node.id.clone())
        .collect()
}

/// True if `node_id` is a circumvention root or lies beneath one.
///
/// Forward breadth-first search from every `circumvent-root` node, following
/// child lists. Unknown ids yield false.
pub fn is_in_circumvention_subtree(graph: &AttackGraph, node_id: &str) -> bool {
    let Some(target) = graph.get(node_id) else {
        return false;
    };
    if target.is_circumvent_root() {
        return true;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier: VecDeque<&str> = VecDeque::new();
    for root in graph.circumvention_roots() {
        if visited.insert(root.id.as_str()) {
            frontier.push_back(root.id.as_str());
        }
    }

    while let Some(current) = frontier.pop_front() {
        if current == node_id {
            return true;
        }
        let Some(node) = graph.get(current) else {
            continue;
        };
        for child in &node.children {
            if visited.insert(child.as_str()) {
                frontier.push_back(child.as_str());
            }
        }
    }

    false
}
