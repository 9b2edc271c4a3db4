//! Ancestry and sub-tree queries.
//!
//! - **trace_ancestors**: breadth-first back-propagation from critical leaves
//!   to every ancestor up to a root, for highlighting
//! - **circumvention helpers**: membership tests for `circumvent-root`
//!   sub-trees and one-hop parent lookup
//!
//! None of these compute costs. They are plain reachability over the
//! snapshot's child lists and ignore configuration masks.

mod circumvention;
mod critical;


pub use self::circumvention::{
    direct_parents_of, has_circumvention_children, is_in_circumvention_subtree,
};
pub use self::critical::trace_ancestors;
