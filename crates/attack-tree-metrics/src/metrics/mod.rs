//! Attack tree metrics.
//!
//! - **aggregate**: cost of a single path (dedup, component-wise max,
//!   infeasibility sentinel)
//! - **resolver**: minimal-cost selection for whole trees and single nodes
//! - **engine**: bounded evaluation and parallel evaluation of every root
//!
//! # Result shapes
//!
//! | Condition | `tree_metrics` | `node_metrics` |
//! |-----------|----------------|----------------|
//! | Unknown / non-attack id | `None` | `None` |
//! | No attack path | `None` | cost `Infinite`, `has_subtree = false` |
//! | Every path infeasible | cost `99` | cost `99` |

mod aggregate;
mod engine;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

pub use self::aggregate::cost_of;
pub use self::engine::{MetricsEngine, RootEvaluation};
pub use self::resolver::{critical_nodes, node_metrics, tree_metrics};
pub use self::types::{CriticalTree, NodeMetrics, PathCost, TreeMetrics};
