//! Attack graph data model.
//!
//! - **node**: node records, tags and derived roles
//! - **potential**: five-dimensional attack potential and scalar costs
//! - **configuration**: configuration records and the active-set gate
//! - **graph**: the immutable snapshot consumed by every query

mod configuration;
mod graph;
mod node;
mod potential;

pub use self::configuration::{ActiveConfigurations, Configuration};
pub use self::graph::AttackGraph;
pub use self::node::{
    AttackNode, LogicGate, NodeKind, NodeRole, ATTACK_ROOT_TAG, CIRCUMVENT_ROOT_TAG,
};
pub use self::potential::{AttackPotential, Cost, INFEASIBLE_RATING};
