//! Pipeline Benchmark
//!
//! Measures per-enumeration generation cost, reverse lookup, and batch
//! throughput (enumerations/sec) across contiguous and sparse value sets.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use enumtab::{Collection, DeclaredEnum, EnumDomain, EnumValue, GenerateOptions, RawConstant};
use enumtab::{process_batch, process_enum};

// =============================================================================
// Inputs
// =============================================================================

/// `count` constants with values `0, stride, 2 * stride, ...`.
fn declared(type_name: &str, count: usize, stride: i128) -> DeclaredEnum {
    let constants = (0..count)
        .map(|i| RawConstant::new(format!("{type_name}Value{i}"), EnumValue(i as i128 * stride)))
        .collect();
    DeclaredEnum::new(EnumDomain::signed(type_name), constants)
}

fn collection(enums: usize, constants: usize) -> Collection {
    Collection::new(
        (0..enums)
            .map(|i| declared(&format!("E{i}"), constants, 1 + (i % 3) as i128))
            .collect(),
    )
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_process_enum(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_enum");
    let options = GenerateOptions::default().with_trim_prefix("E");

    for &count in &[8usize, 64, 512] {
        let contiguous = declared("Dense", count, 1);
        let sparse = declared("Sparse", count, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("contiguous", count), &contiguous, |b, input| {
            b.iter(|| black_box(process_enum(black_box(input), &options)))
        });
        group.bench_with_input(BenchmarkId::new("sparse", count), &sparse, |b, input| {
            b.iter(|| black_box(process_enum(black_box(input), &options)))
        });
    }

    group.finish();
}

fn bench_from_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_name");
    let Ok(artifacts) = process_enum(&declared("Lookup", 512, 3), &GenerateOptions::default()) else {
        return;
    };
    let accessor = artifacts.accessor();
    let names: Vec<String> = accessor
        .all_values()
        .iter()
        .map(|&v| accessor.to_name(v).into_owned())
        .collect();

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("hit", |b| {
        b.iter(|| {
            for name in &names {
                let _ = black_box(accessor.from_name(black_box(name)));
            }
        })
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(accessor.from_name(black_box("NotARealName"))))
    });

    group.finish();
}

fn bench_batch_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let options = GenerateOptions::default();

    for &enums in &[16usize, 128] {
        let input = collection(enums, 64);
        group.throughput(Throughput::Elements(enums as u64));
        group.bench_with_input(BenchmarkId::from_parameter(enums), &input, |b, input| {
            b.iter(|| black_box(process_batch(black_box(input), &options)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_process_enum,
    bench_from_name,
    bench_batch_throughput,
);

criterion_main!(benches);
