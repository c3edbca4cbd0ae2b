//! Criterion micro-benchmarks for the stencil kernel and arena rotation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use wavefield_arena::GenerationArena;
use wavefield_core::{partition, split_windows, update, update_window, DEFAULT_COUPLING};
use wavefield_test_utils::sine_pair;

const LEN: usize = 100_000;

/// Benchmark: one full-interior stencil sweep over 100K points.
fn bench_update_100k(c: &mut Criterion) {
    let field = sine_pair(LEN, 5.0, 0.01);
    let mut next = vec![0.0; LEN];

    let mut group = c.benchmark_group("stencil");
    group.throughput(Throughput::Elements((LEN - 2) as u64));
    group.bench_function("update_100k", |b| {
        b.iter(|| {
            update(&field.previous, &field.current, &mut next, 1, LEN - 1, DEFAULT_COUPLING);
            black_box(next[LEN / 2]);
        });
    });

    // Same sweep through 8 windows, to show the split costs nothing.
    let parts = partition(LEN, 8);
    group.bench_function("update_windows_8x", |b| {
        b.iter(|| {
            for w in split_windows(&parts, &mut next) {
                update_window(&field.previous, &field.current, w.cells, w.start, DEFAULT_COUPLING);
            }
            black_box(next[LEN / 2]);
        });
    });
    group.finish();
}

/// Benchmark: resolving step views and rotating, with no compute.
fn bench_rotate(c: &mut Criterion) {
    let mut arena = GenerationArena::zeroed(LEN).unwrap();
    c.bench_function("arena_step_views_rotate", |b| {
        b.iter(|| {
            let views = arena.step_views();
            black_box(views.next.len());
            arena.rotate();
        });
    });
}

criterion_group!(benches, bench_update_100k, bench_rotate);
criterion_main!(benches);
