//! Path enumeration algorithm.
//!
//! Post-order expansion with an explicit stack. `Visit` frames classify a
//! node and either resolve it immediately (leaf, pruned, masked, childless)
//! or schedule its children followed by a `Combine` frame that merges the
//! children's memoized path lists according to the node's gate.

use std::collections::HashMap;

use crate::model::{AttackGraph, AttackNode, LogicGate};
use crate::traversal::TraversalMask;

use super::types::{AttackPath, PathEnumeration};

/// Enumerate every attack path satisfying `node_id`.
///
/// # Arguments
/// * `graph` - Node snapshot
/// * `node_id` - Node to expand
/// * `mask` - Configuration pruning and circumvention masking
///
/// # Returns
/// Paths in depth-first order, children in declared order. Empty if the id
/// is unknown, not an attack node, pruned, masked, or has no reachable leaf.
pub fn enumerate_paths<'g>(
    graph: &'g AttackGraph,
    node_id: &str,
    mask: &TraversalMask,
) -> Vec<AttackPath<'g>> {
    enumerate_paths_bounded(graph, node_id, mask, None).paths
}

/// Enumerate attack paths, keeping at most `max_paths` per node.
///
/// When any node's list would exceed the bound, it is cut to its first
/// `max_paths` entries and the result is flagged as truncated. With
/// `max_paths = None` this is identical to [`enumerate_paths`].
pub fn enumerate_paths_bounded<'g>(
    graph: &'g AttackGraph,
    node_id: &str,
    mask: &TraversalMask,
    max_paths: Option<usize>,
) -> PathEnumeration<'g> {
    let Some(start) = graph.attack_node(node_id) else {
        tracing::trace!(node_id, "enumeration target not found");
        return PathEnumeration::default();
    };

    let mut enumerator = Enumerator {
        graph,
        mask,
        limit: max_paths.unwrap_or(usize::MAX),
        memo: HashMap::new(),
        truncated: false,
    };
    let paths = enumerator.run(start.id.as_str());

    tracing::debug!(
        node_id,
        paths = paths.len(),
        expanded = enumerator.memo.len(),
        truncated = enumerator.truncated,
        "path enumeration complete"
    );

    PathEnumeration {
        paths,
        truncated: enumerator.truncated,
    }
}

enum Frame<'g> {
    Visit(&'g str),
    Combine(&'g AttackNode),
}

/// Per-call enumeration state. Dropped when the call returns.
struct Enumerator<'g, 'm> {
    graph: &'g AttackGraph,
    mask: &'m TraversalMask,
    limit: usize,
    memo: HashMap<&'g str, Vec<AttackPath<'g>>>,
    truncated: bool,
}

impl<'g, 'm> Enumerator<'g, 'm> {
    fn run(&mut self, start: &'g str) -> Vec<AttackPath<'g>> {
        let mut stack = vec![Frame::Visit(start)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(id) => self.visit(id, &mut stack),
                Frame::Combine(node) => {
                    let (paths, truncated) = self.combine(node);
                    self.truncated |= truncated;
                    self.memo.insert(node.id.as_str(), paths);
                }
            }
        }

        self.memo.get(start).cloned().unwrap_or_default()
    }

    fn visit(&mut self, id: &'g str, stack: &mut Vec<Frame<'g>>) {
        if self.memo.contains_key(id) {
            return;
        }

        // Dangling and non-attack ids are dead ends.
        let Some(node) = self.graph.attack_node(id) else {
            return;
        };
        let key = node.id.as_str();

        if !self
            .mask
            .active_configurations
            .permits(&node.required_configurations)
        {
            tracing::trace!(node_id = key, "pruned by inactive configuration");
            self.memo.insert(key, Vec::new());
            return;
        }

        if node.is_circumvent_root() && !self.mask.include_circumvention {
            tracing::trace!(node_id = key, "circumvention sub-tree excluded");
            self.memo.insert(key, Vec::new());
            return;
        }

        if node.is_leaf() {
            self.memo.insert(key, vec![AttackPath::single(key)]);
            return;
        }

        if node.children.is_empty() || node.effective_gate().is_none() {
            self.memo.insert(key, Vec::new());
            return;
        }

        // In-progress placeholder: a cycle back to this node sees no paths.
        self.memo.insert(key, Vec::new());
        stack.push(Frame::Combine(node));
        for child in node.children.iter().rev() {
            stack.push(Frame::Visit(child.as_str()));
        }
    }

    fn child_paths(&self, child: &str) -> &[AttackPath<'g>] {
        self.memo.get(child).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Merge memoized child paths. Returns the paths and whether the bound cut them.
    fn combine(&self, node: &'g AttackNode) -> (Vec<AttackPath<'g>>, bool) {
        match node.effective_gate() {
            Some(LogicGate::Or) => self.combine_or(node),
            Some(LogicGate::And) => self.combine_and(node),
            None => (Vec::new(), false),
        }
    }

    fn combine_or(&self, node: &'g AttackNode) -> (Vec<AttackPath<'g>>, bool) {
        let mut out = Vec::new();

        for child in &node.children {
            for path in self.child_paths(child) {
                if out.len() == self.limit {
                    self.warn_truncated(node);
                    return (out, true);
                }
                out.push(path.clone());
            }
        }

        (out, false)
    }

    fn combine_and(&self, node: &'g AttackNode) -> (Vec<AttackPath<'g>>, bool) {
        let mut combos = vec![AttackPath::default()];
        let mut truncated = false;

        for child in &node.children {
            let paths = self.child_paths(child);
            if paths.is_empty() {
                // An AND with an unreachable child is itself unreachable.
                return (Vec::new(), truncated);
            }

            let mut next = Vec::with_capacity(combos.len().saturating_mul(paths.len()).min(self.limit));
            'product: for prefix in &combos {
                for path in paths {
                    if next.len() == self.limit {
                        truncated = true;
                        break 'product;
                    }
                    next.push(prefix.concat(path));
                }
            }
            combos = next;
        }

        if truncated {
            self.warn_truncated(node);
        }
        (combos, truncated)
    }

    fn warn_truncated(&self, node: &AttackNode) {
        tracing::warn!(
            node_id = %node.id,
            limit = self.limit,
            "attack path list truncated"
        );
    }
}
