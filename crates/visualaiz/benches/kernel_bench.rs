//! Criterion benchmarks for the 2D kernel.
//! Focus sizes: n in {0, 100, 1_000, 10_000} edges.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p visualaiz

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use visualaiz::geom2::rand::{draw_edge_soup, draw_points, EdgeSoupCfg, PointCloudCfg, ReplayToken};
use visualaiz::geom2::{orientation, remove_duplicate_edges};

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");
    for &n in &[0usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("remove_duplicate_edges", n), &n, |b, &n| {
            let cfg = EdgeSoupCfg {
                // pool sized so roughly half the soup repeats
                vertices: ((n as f64).sqrt() as usize).max(2) * 2,
                edges: n,
                ..EdgeSoupCfg::default()
            };
            b.iter_batched(
                || draw_edge_soup(cfg, ReplayToken::new(43, n as u64)),
                |soup| {
                    let _unique = remove_duplicate_edges(&soup);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_orientation(c: &mut Criterion) {
    let cfg = PointCloudCfg {
        count: 3_000,
        snap: 0.0,
        ..PointCloudCfg::default()
    };
    let pts = draw_points(cfg, ReplayToken::new(44, 0));
    c.bench_function("orientation_triples_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for t in pts.chunks_exact(3) {
                acc += orientation(black_box(t[0]), black_box(t[1]), black_box(t[2]));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_dedup, bench_orientation);
criterion_main!(benches);
