//! Benchmark suite for attack-tree-metrics.
//!
//! Covers the two shapes that dominate enumeration cost:
//! - wide OR trees (path count grows linearly with width)
//! - AND-of-OR product trees (path count grows as branching^depth)
//!
//! plus the critical-node trace and parallel root evaluation.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --package attack-tree-metrics
//!
//! # Run one group
//! cargo bench --package attack-tree-metrics -- product_tree
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;

mod enumeration_benches;

criterion_group!(
    name = enumeration_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = enumeration_benches::bench_wide_tree, enumeration_benches::bench_product_tree
);

criterion_group!(
    name = metrics_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(3));
    targets = metrics_benches::bench_critical_nodes, metrics_benches::bench_evaluate_roots
);

criterion_main!(enumeration_bench_group, metrics_bench_group);
