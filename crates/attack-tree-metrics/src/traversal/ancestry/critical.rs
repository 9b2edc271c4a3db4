//! Critical ancestor tracing.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::model::AttackGraph;

/// Build child -> direct parents across the whole snapshot.
fn reverse_adjacency(graph: &AttackGraph) -> HashMap<&str, Vec<&str>> {
    let mut parents: HashMap<&str, Vec<&str>> = HashMap::with_capacity(graph.len());
    for node in graph.nodes() {
        for child in &node.children {
            parents
                .entry(child.as_str())
                .or_default()
                .push(node.id.as_str());
        }
    }
    parents
}

/// Mark every ancestor of the given critical leaves, up to `root_id`.
///
/// Walks upward breadth-first from every leaf of every set. Each visited
/// node is marked; the root is marked but its own parents are not
/// explored. Leaves are marked even when they have no parents; ids
/// absent from the snapshot are skipped.
///
/// # Arguments
/// * `graph` - Node snapshot
/// * `root_id` - Node at which upward propagation stops
/// * `critical_leaf_sets` - Leaf id sets, typically the critical paths of a tree
///
/// # Returns
/// Sorted set of marked node ids.
pub fn trace_ancestors<I, P, S>(
    graph: &AttackGraph,
    root_id: &str,
    critical_leaf_sets: I,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = P>,
    P: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parents = reverse_adjacency(graph);
    let mut marked: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<String> = VecDeque::new();

    for set in critical_leaf_sets {
        for leaf in set {
            let leaf = leaf.as_ref();
            if !graph.contains(leaf) {
                continue;
            }
            if marked.insert(leaf.to_string()) {
                frontier.push_back(leaf.to_string());
            }
        }
    }

    while let Some(current) = frontier.pop_front() {
        if current == root_id {
            continue;
        }

        let Some(direct) = parents.get(current.as_str()) else {
            continue;
        };

        for parent in direct {
            if marked.insert((*parent).to_string()) {
                frontier.push_back((*parent).to_string());
            }
        }
    }

    tracing::trace!(root_id, marked = marked.len(), "critical ancestors traced");
    marked.into_iter().collect()
}
