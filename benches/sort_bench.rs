// In arraykit-core/benches/sort_bench.rs

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, Bencher, BenchmarkId, Criterion,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arraykit::{bubble_sort, insertion_sort, kth_smallest, max_subarray_sum, selection_sort};

// --- MOCK DATA GENERATION ---

/// Generates uniformly random values; worst-ish case for the quadratic sorts.
fn generate_random(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.random_range(-10_000..10_000)).collect()
}

/// Generates ascending values; the best case for insertion sort.
fn generate_sorted(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Sorts a fresh copy of `data` on every iteration so each run starts unsorted.
fn run_sort(b: &mut Bencher, data: &[i64], sort: impl Fn(&mut [i64])) {
    b.iter_batched(
        || data.to_vec(),
        |mut v| {
            sort(black_box(v.as_mut_slice()));
            v
        },
        BatchSize::SmallInput,
    )
}

// --- Benchmark Suite ---

const BENCH_SIZES: [usize; 3] = [64, 256, 1024];

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadratic Sorts (Random)");
    for size in BENCH_SIZES {
        let data = generate_random(size);
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bubble", size), &data, |b, data| {
            run_sort(b, data, |v| {
                bubble_sort(v);
            })
        });
        group.bench_with_input(BenchmarkId::new("selection", size), &data, |b, data| {
            run_sort(b, data, |v| {
                selection_sort(v);
            })
        });
        group.bench_with_input(BenchmarkId::new("insertion", size), &data, |b, data| {
            run_sort(b, data, |v| {
                insertion_sort(v);
            })
        });
        // Baseline: the standard library's pattern-defeating quicksort.
        group.bench_with_input(BenchmarkId::new("std_unstable", size), &data, |b, data| {
            run_sort(b, data, |v| v.sort_unstable())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Quadratic Sorts (Sorted)");
    let data = generate_sorted(1024);
    group.bench_function("bubble", |b| {
        run_sort(b, &data, |v| {
            bubble_sort(v);
        })
    });
    group.bench_function("insertion", |b| {
        run_sort(b, &data, |v| {
            insertion_sort(v);
        })
    });
    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let data = generate_random(1024);
    c.bench_function("max_subarray_sum (1024)", |b| {
        b.iter(|| black_box(max_subarray_sum(black_box(&data))))
    });
    c.bench_function("kth_smallest k=512 (1024)", |b| {
        b.iter(|| black_box(kth_smallest(black_box(&data), 512)))
    });
}

criterion_group!(benches, bench_sorts, bench_scans);
criterion_main!(benches);
