//! Benchmarks for edge selection over dense attention matrices.
//!
//! Run with: cargo bench -p attnview-graph --bench selection_bench

use attnview_graph::{AttentionMatrix, SelectionConfig, select_edges};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn dense_matrix(n: usize) -> AttentionMatrix {
    // Deterministic pseudo-weights; no RNG so runs are comparable.
    let rows = (0..n)
        .map(|from| {
            (0..n)
                .map(|to| {
                    let mixed = (from * 31 + to * 17) % 100;
                    mixed as f64 / 100.0
                })
                .collect()
        })
        .collect();
    AttentionMatrix::from_rows(rows)
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_edges");
    let config = SelectionConfig::default();

    for n in [16usize, 64, 256] {
        let matrix = dense_matrix(n);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("overview", n), &matrix, |b, matrix| {
            b.iter(|| black_box(select_edges(matrix, n, None, &config)));
        });

        group.bench_with_input(BenchmarkId::new("focused", n), &matrix, |b, matrix| {
            b.iter(|| black_box(select_edges(matrix, n, Some(n / 2), &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
