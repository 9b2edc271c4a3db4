//! Masks applied during path enumeration.

use crate::model::{ActiveConfigurations, Configuration};

/// Configuration pruning and circumvention masking for one evaluation.
#[derive(Debug, Clone, Default)]
pub struct TraversalMask {
    /// Active configuration ids. Nodes requiring anything else are pruned.
    pub active_configurations: ActiveConfigurations,

    /// Walk through `circumvent-root` sub-trees as ordinary nodes.
    /// Default: false (initial-risk view)
    pub include_circumvention: bool,
}

impl TraversalMask {
    /// Mask for initial-risk views: circumvention sub-trees excluded.
    #[must_use]
    pub fn initial_risk() -> Self {
        Self::default()
    }

    /// Mask for residual-risk views: circumvention sub-trees included.
    #[must_use]
    pub fn residual_risk() -> Self {
        Self {
            include_circumvention: true,
            ..Default::default()
        }
    }

    /// Builder: replace the active configuration set.
    #[must_use]
    pub fn active(mut self, active: ActiveConfigurations) -> Self {
        self.active_configurations = active;
        self
    }

    /// Builder: derive the active set from configuration records.
    #[must_use]
    pub fn configurations<'a, I>(self, records: I) -> Self
    where
        I: IntoIterator<Item = &'a Configuration>,
    {
        self.active(ActiveConfigurations::from_records(records))
    }

    /// Builder: set circumvention inclusion.
    #[must_use]
    pub fn include_circumvention(mut self, include: bool) -> Self {
        self.include_circumvention = include;
        self
    }
}
