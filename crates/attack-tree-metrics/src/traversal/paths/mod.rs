//! Attack path enumeration.
//!
//! Expands a node into every leaf sequence that satisfies it:
//!
//! - leaf: the single path `[leaf]`
//! - OR: the concatenation of every child's paths
//! - AND: the Cartesian product of the children's paths
//!
//! # Termination
//!
//! Uses an explicit stack instead of recursion. A node is memoized as soon
//! as it is first visited (with an empty placeholder), so revisiting it
//! through a cycle contributes nothing and every id is expanded at most once
//! per call. Shared sub-trees are computed once and reused. Inside a cycle,
//! a node's paths depend on where the call entered the cycle.

mod enumerate;
mod types;


pub use self::enumerate::{enumerate_paths, enumerate_paths_bounded};
pub use self::types::{AttackPath, PathEnumeration};
