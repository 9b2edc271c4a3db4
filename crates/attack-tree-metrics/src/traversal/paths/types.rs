//! Attack path types.

use std::collections::HashSet;

/// Ordered sequence of leaf ids satisfying a node.
///
/// The raw sequence may contain the same leaf more than once when
/// convergent AND branches share it. [`AttackPath::distinct_leaves`] gives
/// the set form used for cost aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttackPath<'g> {
    leaves: Vec<&'g str>,
}

impl<'g> AttackPath<'g> {
    #[must_use]
    pub fn new(leaves: Vec<&'g str>) -> Self {
        Self { leaves }
    }

    /// Single-leaf path.
    #[must_use]
    pub fn single(leaf: &'g str) -> Self {
        Self { leaves: vec![leaf] }
    }

    /// Raw leaf sequence, duplicates included.
    #[must_use]
    pub fn leaves(&self) -> &[&'g str] {
        &self.leaves
    }

    /// Leaves with duplicates removed, in first-seen order.
    #[must_use]
    pub fn distinct_leaves(&self) -> Vec<&'g str> {
        let mut seen = HashSet::with_capacity(self.leaves.len());
        self.leaves
            .iter()
            .copied()
            .filter(|leaf| seen.insert(*leaf))
            .collect()
    }

    /// Path made of `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut leaves = Vec::with_capacity(self.leaves.len() + other.leaves.len());
        leaves.extend_from_slice(&self.leaves);
        leaves.extend_from_slice(&other.leaves);
        Self { leaves }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

/// Result of a bounded enumeration.
#[derive(Debug, Clone, Default)]
pub struct PathEnumeration<'g> {
    /// Enumerated paths, in depth-first order with children in declared order.
    pub paths: Vec<AttackPath<'g>>,

    /// Whether any node's path list was cut to the configured bound.
    pub truncated: bool,
}

impl<'g> PathEnumeration<'g> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
