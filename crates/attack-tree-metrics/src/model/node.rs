//! Attack tree node records.
//!
//! A node's role (leaf, intermediate, root) is never stored. It is derived
//! from the node's kind, tags and logic gate by [`AttackNode::role`].

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::potential::AttackPotential;

/// Tag marking a top-level attack objective.
pub const ATTACK_ROOT_TAG: &str = "attack-root";

/// Tag marking the root of an alternate, normally excluded sub-tree.
pub const CIRCUMVENT_ROOT_TAG: &str = "circumvent-root";

/// Record kind. Only attack nodes take part in evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Attack,
    /// Any other record kind (damage scenarios, assets, ...). Opaque here.
    #[serde(other)]
    Other,
}

/// Combination rule for a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicGate {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Role of a node, derived from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Tagged `attack-root`, or a gated node tagged `circumvent-root`.
    Root,
    /// Attack node with a logic gate, not a root.
    Intermediate,
    /// Attack node without a logic gate, not tagged `attack-root`.
    ///
    /// A gateless `circumvent-root` is a leaf: a single-step circumvention.
    Leaf,
    /// Non-attack record.
    Detached,
}

/// A vertex of the attack graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackNode {
    pub id: String,

    #[serde(default)]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic_gate: Option<LogicGate>,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Child ids in declared order. Ids missing from the snapshot are dead ends.
    #[serde(default)]
    pub children: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_potential: Option<AttackPotential>,

    /// Configurations that must ALL be active for this node to be reachable.
    #[serde(default)]
    pub required_configurations: Vec<String>,

    /// Caller-owned fields. Never read by the engine.
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl AttackNode {
    /// Create an attack node with no gate, tags or children.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Attack,
            logic_gate: None,
            tags: BTreeSet::new(),
            children: Vec::new(),
            attack_potential: None,
            required_configurations: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Create a leaf carrying an attack potential.
    pub fn leaf(id: impl Into<String>, potential: AttackPotential) -> Self {
        Self::new(id).potential(potential)
    }

    /// Create a gated intermediate node.
    pub fn gate<I, S>(id: impl Into<String>, gate: LogicGate, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id).logic_gate(gate).children(children)
    }

    /// Create a top-level attack root.
    pub fn attack_root<I, S>(id: impl Into<String>, gate: Option<LogicGate>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = Self::new(id).tag(ATTACK_ROOT_TAG).children(children);
        node.logic_gate = gate;
        node
    }

    /// Create the root of a circumvention sub-tree.
    pub fn circumvent_root<I, S>(id: impl Into<String>, gate: LogicGate, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::gate(id, gate, children).tag(CIRCUMVENT_ROOT_TAG)
    }

    /// Builder: set the record kind.
    #[must_use]
    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: set the logic gate.
    #[must_use]
    pub fn logic_gate(mut self, gate: LogicGate) -> Self {
        self.logic_gate = Some(gate);
        self
    }

    /// Builder: add a tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Builder: replace the children.
    #[must_use]
    pub fn children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the attack potential.
    #[must_use]
    pub fn potential(mut self, potential: AttackPotential) -> Self {
        self.attack_potential = Some(potential);
        self
    }

    /// Builder: add a required configuration.
    #[must_use]
    pub fn requires(mut self, configuration: impl Into<String>) -> Self {
        self.required_configurations.push(configuration.into());
        self
    }

    /// Builder: attach caller metadata.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind == NodeKind::Attack
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn is_attack_root(&self) -> bool {
        self.has_tag(ATTACK_ROOT_TAG)
    }

    #[must_use]
    pub fn is_circumvent_root(&self) -> bool {
        self.has_tag(CIRCUMVENT_ROOT_TAG)
    }

    /// Derive the node's role from kind, tags and gate.
    ///
    /// Only `attack-root` keeps a gateless node from being a leaf; such a
    /// root evaluates as an implicit OR over its children.
    #[must_use]
    pub fn role(&self) -> NodeRole {
        if !self.is_attack() {
            NodeRole::Detached
        } else if self.logic_gate.is_none() && !self.is_attack_root() {
            NodeRole::Leaf
        } else if self.is_attack_root() || self.is_circumvent_root() {
            NodeRole::Root
        } else {
            NodeRole::Intermediate
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.role() == NodeRole::Leaf
    }

    /// Gate used during enumeration; a gateless `attack-root` acts as OR.
    #[must_use]
    pub fn effective_gate(&self) -> Option<LogicGate> {
        match (self.logic_gate, self.role()) {
            (Some(gate), _) => Some(gate),
            (None, NodeRole::Root) => Some(LogicGate::Or),
            (None, _) => None,
        }
    }
}
