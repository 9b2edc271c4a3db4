//! Path enumeration benchmarks.

use attack_tree_metrics::{enumerate_paths, TraversalMask};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};

use super::config;
use super::generators::{product_tree, wide_tree};

pub fn bench_wide_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree");
    let mask = TraversalMask::initial_risk();

    for &width in config::WIDE_WIDTHS {
        let graph = wide_tree(width, config::WIDE_FAN_IN);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("enumerate", width), &width, |b, _| {
            b.iter(|| enumerate_paths(black_box(&graph), black_box("root"), black_box(&mask)))
        });
    }

    group.finish();
}

pub fn bench_product_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_tree");
    let mask = TraversalMask::initial_risk();

    for &depth in config::PRODUCT_DEPTHS {
        let graph = product_tree(depth, config::PRODUCT_BRANCHING);
        let paths = config::PRODUCT_BRANCHING.pow(depth as u32);
        group.throughput(Throughput::Elements(paths as u64));
        group.bench_with_input(BenchmarkId::new("enumerate", depth), &depth, |b, _| {
            b.iter(|| enumerate_paths(black_box(&graph), black_box("root"), black_box(&mask)))
        });
    }

    group.finish();
}
