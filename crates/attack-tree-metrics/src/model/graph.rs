//! Immutable snapshot of attack graph nodes.

use std::collections::HashMap;
use std::io::Read;

use crate::error::{AttackTreeError, AttackTreeResult};

use super::node::AttackNode;

/// Flat, immutable node snapshot keyed by id.
///
/// Insertion order is remembered so that every query that lists nodes
/// (parents, roots) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct AttackGraph {
    nodes: HashMap<String, AttackNode>,
    order: Vec<String>,
}

static_assertions::assert_impl_all!(AttackGraph: Send, Sync);

impl AttackGraph {
    /// Build a snapshot from node records.
    ///
    /// # Errors
    /// * `AttackTreeError::InvalidInput` - a record has an empty id
    /// * `AttackTreeError::DuplicateNode` - two records share an id
    pub fn from_nodes<I>(nodes: I) -> AttackTreeResult<Self>
    where
        I: IntoIterator<Item = AttackNode>,
    {
        let iter = nodes.into_iter();
        let (lower, _) = iter.size_hint();
        let mut graph = Self {
            nodes: HashMap::with_capacity(lower),
            order: Vec::with_capacity(lower),
        };

        for node in iter {
            if node.id.is_empty() {
                return Err(AttackTreeError::InvalidInput(
                    "node id must not be empty".to_string(),
                ));
            }
            if graph.nodes.contains_key(&node.id) {
                return Err(AttackTreeError::DuplicateNode(node.id));
            }
            graph.order.push(node.id.clone());
            graph.nodes.insert(node.id.clone(), node);
        }

        tracing::debug!(nodes = graph.order.len(), "attack graph snapshot built");
        Ok(graph)
    }

    /// Decode a snapshot from a JSON array of node records.
    ///
    /// # Example
    /// ```
    /// use attack_tree_metrics::model::AttackGraph;
    ///
    /// let graph = AttackGraph::from_json(r#"[
    ///     {"id": "root", "tags": ["attack-root"], "children": ["a"]},
    ///     {"id": "a", "attack_potential": {"time": 1, "expertise": 3}}
    /// ]"#).unwrap();
    /// assert_eq!(graph.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> AttackTreeResult<Self> {
        let nodes: Vec<AttackNode> = serde_json::from_str(json)?;
        Self::from_nodes(nodes)
    }

    /// Decode a snapshot from a reader yielding a JSON array of node records.
    pub fn from_reader<R: Read>(reader: R) -> AttackTreeResult<Self> {
        let nodes: Vec<AttackNode> = serde_json::from_reader(reader)?;
        Self::from_nodes(nodes)
    }

    /// Look up any node by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AttackNode> {
        self.nodes.get(id)
    }

    /// Look up a node by id, ignoring non-attack records.
    #[must_use]
    pub fn attack_node(&self, id: &str) -> Option<&AttackNode> {
        self.get(id).filter(|node| node.is_attack())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &AttackNode> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Attack nodes tagged `attack-root`, in insertion order.
    pub fn attack_roots(&self) -> impl Iterator<Item = &AttackNode> + '_ {
        self.nodes()
            .filter(|node| node.is_attack() && node.is_attack_root())
    }

    /// Nodes tagged `circumvent-root`, in insertion order.
    pub fn circumvention_roots(&self) -> impl Iterator<Item = &AttackNode> + '_ {
        self.nodes().filter(|node| node.is_circumvent_root())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
