//! Benchmark for the three list operation strategies.
//!
//! Compares recursive, trampolined and iterative forms of the same
//! operation. The recursive form is only measured at sizes its stack depth
//! can take.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use recursia::Sequence;
use recursia::list_ops::{iterative, recursive, stack_safe};
use std::hint::black_box;

const RECURSIVE_LIMIT: u64 = 10_000;

// =============================================================================
// sum Benchmark
// =============================================================================

fn benchmark_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sum");

    for size in [100u64, 1000, 10000, 100_000] {
        let sequence: Sequence<u64> = (0..size).collect();

        if size <= RECURSIVE_LIMIT {
            group.bench_with_input(BenchmarkId::new("recursive", size), &sequence, |bencher, sequence| {
                bencher.iter(|| recursive::sum(black_box(sequence)));
            });
        }

        group.bench_with_input(BenchmarkId::new("stack_safe", size), &sequence, |bencher, sequence| {
            bencher.iter(|| stack_safe::sum(black_box(sequence)));
        });

        group.bench_with_input(BenchmarkId::new("iterative", size), &sequence, |bencher, sequence| {
            bencher.iter(|| iterative::sum(black_box(sequence)));
        });
    }

    group.finish();
}

// =============================================================================
// index_of Benchmark (worst case: element at the end)
// =============================================================================

fn benchmark_index_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_of");

    for size in [100u64, 1000, 10000, 100_000] {
        let sequence: Sequence<u64> = (0..size).collect();
        let last = size - 1;

        if size <= RECURSIVE_LIMIT {
            group.bench_with_input(BenchmarkId::new("recursive", size), &sequence, |bencher, sequence| {
                bencher.iter(|| recursive::index_of(black_box(&last), black_box(sequence)));
            });
        }

        group.bench_with_input(BenchmarkId::new("stack_safe", size), &sequence, |bencher, sequence| {
            bencher.iter(|| stack_safe::index_of(black_box(&last), black_box(sequence)));
        });

        group.bench_with_input(BenchmarkId::new("iterative", size), &sequence, |bencher, sequence| {
            bencher.iter(|| iterative::index_of(black_box(&last), black_box(sequence)));
        });
    }

    group.finish();
}

// =============================================================================
// reverse Benchmark
// =============================================================================

fn benchmark_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reverse");

    // The recursive form appends at the end on every step and is quadratic.
    for size in [100u64, 1000] {
        let sequence: Sequence<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("recursive", size), &sequence, |bencher, sequence| {
            bencher.iter(|| recursive::reverse(black_box(sequence)));
        });
    }

    for size in [100u64, 1000, 10000, 100_000] {
        let sequence: Sequence<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("stack_safe", size), &sequence, |bencher, sequence| {
            bencher.iter(|| stack_safe::reverse(black_box(sequence)));
        });
        group.bench_with_input(BenchmarkId::new("iterative", size), &sequence, |bencher, sequence| {
            bencher.iter(|| iterative::reverse(black_box(sequence)));
        });
    }

    group.finish();
}

// =============================================================================
// filter / unique Benchmark
// =============================================================================

fn benchmark_filter_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_unique");

    for size in [100u64, 1000, 10000] {
        let sequence: Sequence<u64> = (0..size).map(|value| value % 64).collect();

        group.bench_with_input(BenchmarkId::new("filter_recursive", size), &sequence, |bencher, sequence| {
            bencher.iter(|| recursive::filter(|value: &u64| value % 2 == 0, black_box(sequence)));
        });
        group.bench_with_input(BenchmarkId::new("filter_stack_safe", size), &sequence, |bencher, sequence| {
            bencher.iter(|| stack_safe::filter(|value: &u64| value % 2 == 0, black_box(sequence)));
        });
        group.bench_with_input(BenchmarkId::new("unique_recursive", size), &sequence, |bencher, sequence| {
            bencher.iter(|| recursive::unique(black_box(sequence)));
        });
        group.bench_with_input(BenchmarkId::new("unique_iterative", size), &sequence, |bencher, sequence| {
            bencher.iter(|| iterative::unique(black_box(sequence)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sum,
    benchmark_index_of,
    benchmark_reverse,
    benchmark_filter_unique
);
criterion_main!(benches);
