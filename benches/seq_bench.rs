//! Criterion benchmarks for the core sequence operations.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recollect::group::group_by;
use recollect::seq::{Depth, Nested, chunk, dedup, flatten, union};

fn chunk_bench(criterion: &mut Criterion) {
    let input: Vec<u64> = (0..10_000).collect();
    criterion.bench_function("chunk_10k_by_64", |bencher| {
        bencher.iter(|| chunk(black_box(&input), black_box(64)));
    });
}

fn dedup_bench(criterion: &mut Criterion) {
    let input: Vec<u64> = (0..10_000).map(|value| value % 500).collect();
    criterion.bench_function("dedup_10k_500_distinct", |bencher| {
        bencher.iter(|| dedup(black_box(&input)));
    });
}

fn union_bench(criterion: &mut Criterion) {
    let a: Vec<u64> = (0..5_000).collect();
    let b: Vec<u64> = (2_500..7_500).collect();
    criterion.bench_function("union_5k_5k", |bencher| {
        bencher.iter(|| union(black_box(&a), black_box(&b)));
    });
}

fn group_by_bench(criterion: &mut Criterion) {
    let input: Vec<u64> = (0..10_000).collect();
    criterion.bench_function("group_by_10k_16_keys", |bencher| {
        bencher.iter(|| group_by(black_box(input.clone()), |value| value % 16));
    });
}

fn flatten_bench(criterion: &mut Criterion) {
    // 100 sequences of 100 items nested two levels deep.
    let input: Vec<Nested<u64>> = (0..100)
        .map(|outer| {
            Nested::Seq(
                (0..100)
                    .map(|inner| Nested::Item(outer * 100 + inner))
                    .collect(),
            )
        })
        .collect();
    criterion.bench_function("flatten_10k_unbounded", |bencher| {
        bencher.iter(|| flatten(black_box(input.clone()), Depth::Unbounded));
    });
}

criterion_group!(
    benches,
    chunk_bench,
    dedup_bench,
    union_bench,
    group_by_bench,
    flatten_bench
);
criterion_main!(benches);
