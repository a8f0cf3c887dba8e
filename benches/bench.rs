// Criterion benchmarks for FarFetchr

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use farfetchr::core::{clean_address, haversine, is_valid_address};

const ADDRESSES: [&str; 4] = [
    "415 Mission St, San Francisco, CA 94105",
    "415 Mission St Suite 4800, San Francisco, CA 94105",
    "123 Main St,,,   City,   State,",
    "123 Main St San Francisco CA",
];

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine", |b| {
        b.iter(|| {
            haversine(
                black_box(37.7897),
                black_box(-122.3941),
                black_box(37.4449),
                black_box(-122.1617),
            )
        });
    });
}

fn bench_is_valid_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_address");

    for (i, address) in ADDRESSES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), address, |b, address| {
            b.iter(|| is_valid_address(black_box(address)));
        });
    }

    group.finish();
}

fn bench_clean_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_address");

    for (i, address) in ADDRESSES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), address, |b, address| {
            b.iter(|| clean_address(black_box(address)));
        });
    }

    group.finish();
}

fn bench_validate_then_clean(c: &mut Criterion) {
    c.bench_function("validate_then_clean_batch", |b| {
        b.iter(|| {
            let cleaned: Vec<String> = ADDRESSES
                .iter()
                .filter(|a| is_valid_address(a))
                .map(|a| clean_address(a))
                .collect();

            black_box(cleaned)
        });
    });
}

criterion_group!(
    benches,
    bench_haversine,
    bench_is_valid_address,
    bench_clean_address,
    bench_validate_then_clean
);

criterion_main!(benches);
