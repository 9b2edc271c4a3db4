//! Metric result types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{AttackPotential, Cost};

/// Cost of a single attack path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCost {
    pub cost: Cost,

    /// Component-wise maximum over the distinct leaves.
    pub potential: AttackPotential,

    /// Distinct leaf ids in first-seen order.
    pub leaves: Vec<String>,
}

/// Whole-tree metrics: the minimal cost and every path achieving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub min_cost: Cost,

    /// Minimal-cost paths in enumeration order, each as distinct leaf ids.
    pub critical_paths: Vec<Vec<String>>,

    /// Number of enumerated paths the minimum was taken over.
    pub path_count: usize,

    /// Whether the enumeration was cut by a path bound.
    #[serde(default)]
    pub truncated: bool,
}

impl TreeMetrics {
    /// True if no critical path is feasible.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        self.min_cost.is_infeasible()
    }
}

/// Single-node metrics: the cost and tuple of the winning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub cost: Cost,
    pub potential: AttackPotential,

    /// False when the node has no attack path at all.
    pub has_subtree: bool,
}

impl NodeMetrics {
    /// Metrics for an attack node without any attack path.
    #[must_use]
    pub fn no_paths() -> Self {
        Self {
            cost: Cost::Infinite,
            potential: AttackPotential::ZERO,
            has_subtree: false,
        }
    }
}

/// Tree metrics plus the nodes lying on any critical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalTree {
    pub metrics: TreeMetrics,
    pub critical_nodes: BTreeSet<String>,
}
