//! Configuration for the metrics engine.

use serde::{Deserialize, Serialize};

use crate::error::AttackTreeError;

/// Resource bounds applied by [`MetricsEngine`](crate::metrics::MetricsEngine).
///
/// AND gates multiply the path lists of their children, so a tree with wide
/// conjunctions can produce an exponential number of attack paths. A bound
/// on the number of paths kept per node caps memory use at the price of an
/// incomplete (flagged) result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Maximum number of paths kept for any single node.
    /// Default: None (unbounded)
    #[serde(default)]
    pub max_paths: Option<usize>,
}

impl EngineConfig {
    /// Create a config that keeps at most `max_paths` paths per node.
    #[must_use]
    pub fn bounded(max_paths: usize) -> Self {
        Self {
            max_paths: Some(max_paths),
        }
    }

    /// Builder: remove the path bound.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_paths = None;
        self
    }

    /// Validate configuration parameters.
    ///
    /// # Errors
    /// Returns `AttackTreeError::InvalidConfig` if `max_paths` is zero.
    ///
    /// # Example
    /// ```
    /// use attack_tree_metrics::config::EngineConfig;
    ///
    /// assert!(EngineConfig::default().validate().is_ok());
    /// assert!(EngineConfig::bounded(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), AttackTreeError> {
        if self.max_paths == Some(0) {
            return Err(AttackTreeError::InvalidConfig(
                "max_paths must be at least 1 (use None for unbounded)".to_string(),
            ));
        }

        Ok(())
    }
}
