//! Bounded metrics evaluation over one snapshot.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::AttackTreeResult;
use crate::model::AttackGraph;
use crate::traversal::TraversalMask;

use super::resolver::{resolve_critical, resolve_node, resolve_tree};
use super::types::{CriticalTree, NodeMetrics, TreeMetrics};

/// Tree metrics for one attack root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootEvaluation {
    pub root_id: String,

    /// `None` when the root has no attack path under the mask.
    pub metrics: Option<TreeMetrics>,
}

/// Metrics queries over a snapshot with resource bounds applied.
///
/// Holds no cache: every query enumerates afresh with its own memo, so one
/// engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct MetricsEngine<'g> {
    graph: &'g AttackGraph,
    config: EngineConfig,
}

impl<'g> MetricsEngine<'g> {
    /// Create an engine after validating `config`.
    ///
    /// # Errors
    /// Returns `AttackTreeError::InvalidConfig` if the config is invalid.
    pub fn new(graph: &'g AttackGraph, config: EngineConfig) -> AttackTreeResult<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    #[must_use]
    pub fn graph(&self) -> &'g AttackGraph {
        self.graph
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bounded [`tree_metrics`](super::tree_metrics).
    pub fn tree_metrics(&self, root_id: &str, mask: &TraversalMask) -> Option<TreeMetrics> {
        resolve_tree(self.graph, root_id, mask, self.config.max_paths)
    }

    /// Bounded [`node_metrics`](super::node_metrics).
    pub fn node_metrics(&self, node_id: &str, mask: &TraversalMask) -> Option<NodeMetrics> {
        resolve_node(self.graph, node_id, mask, self.config.max_paths)
    }

    /// Bounded [`critical_nodes`](super::critical_nodes).
    pub fn critical_nodes(&self, root_id: &str, mask: &TraversalMask) -> Option<CriticalTree> {
        resolve_critical(self.graph, root_id, mask, self.config.max_paths)
    }

    /// Tree metrics for every `attack-root` in the snapshot.
    ///
    /// Roots are evaluated in parallel; results keep snapshot insertion order.
    pub fn evaluate_roots(&self, mask: &TraversalMask) -> Vec<RootEvaluation> {
        let roots: Vec<&str> = self
            .graph
            .attack_roots()
            .map(|node| node.id.as_str())
            .collect();

        tracing::debug!(roots = roots.len(), "evaluating attack roots");

        roots
            .par_iter()
            .map(|root_id| RootEvaluation {
                root_id: (*root_id).to_string(),
                metrics: self.tree_metrics(root_id, mask),
            })
            .collect()
    }
}
