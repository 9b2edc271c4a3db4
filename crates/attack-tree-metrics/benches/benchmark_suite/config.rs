//! Benchmark configuration constants.

/// Root fan-out for wide OR trees.
pub const WIDE_WIDTHS: &[usize] = &[10, 100, 1000];

/// Leaves per AND gate in wide trees.
pub const WIDE_FAN_IN: usize = 4;

/// Depths for product trees; each yields PRODUCT_BRANCHING^depth paths.
pub const PRODUCT_DEPTHS: &[usize] = &[2, 4, 6];

pub const PRODUCT_BRANCHING: usize = 4;

/// Number of independent roots for parallel evaluation.
pub const ROOT_COUNTS: &[usize] = &[1, 8, 64];
