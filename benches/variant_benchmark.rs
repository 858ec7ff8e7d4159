// ============================================================================
// Variant Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Same-format arithmetic - no promotion, no simplification
// 2. Mixed-format arithmetic - signedness and width promotion
// 3. Text operands - simplification before arithmetic
// 4. Comparison - exact integer/float and text paths
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scalar_variant::prelude::*;
use std::hint::black_box;

// ============================================================================
// Arithmetic
// ============================================================================

fn benchmark_same_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_format");

    group.bench_function("u32_add", |b| {
        let rhs = Variant::from(3u32);
        b.iter(|| {
            let mut v = Variant::from(1000u32);
            v.apply(Operator::Add, black_box(&rhs)).ok();
            black_box(v)
        });
    });

    group.bench_function("f64_mul", |b| {
        let rhs = Variant::from(1.5f64);
        b.iter(|| {
            let mut v = Variant::from(2.0f64);
            v.apply(Operator::Multiply, black_box(&rhs)).ok();
            black_box(v)
        });
    });

    group.finish();
}

fn benchmark_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("overflowing_add");

    for (name, config) in [
        ("wrapping", VariantConfig::wrapping()),
        ("saturating", VariantConfig::saturating()),
        ("promoting", VariantConfig::new()),
    ] {
        let rhs = Variant::from(10u8);
        group.bench_with_input(BenchmarkId::new("u8", name), &config, |b, config| {
            b.iter(|| {
                let mut v = Variant::from(250u8).with_config(*config);
                v.apply(Operator::Add, black_box(&rhs)).ok();
                black_box(v)
            });
        });
    }

    group.finish();
}

fn benchmark_mixed_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_format");

    group.bench_function("u8_plus_i8", |b| {
        let rhs = Variant::from(10i8);
        b.iter(|| {
            let mut v = Variant::from(250u8);
            v.apply(Operator::Add, black_box(&rhs)).ok();
            black_box(v)
        });
    });

    group.bench_function("inexact_division", |b| {
        let rhs = Variant::from(2u8);
        b.iter(|| {
            let mut v = Variant::from(5u8);
            v.apply(Operator::Divide, black_box(&rhs)).ok();
            black_box(v)
        });
    });

    group.finish();
}

fn benchmark_text_operands(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_operands");

    for text in ["5", "65000", "2.5", "foo"] {
        let rhs = Variant::from(1i32);
        group.bench_with_input(BenchmarkId::new("text_plus_i32", text), &text, |b, text| {
            b.iter(|| {
                let mut v = Variant::from(*text);
                v.apply(Operator::Add, black_box(&rhs)).ok();
                black_box(v)
            });
        });
    }

    group.bench_function("simplify", |b| {
        b.iter(|| black_box(Variant::parse(black_box("4294967296"))));
    });

    group.finish();
}

// ============================================================================
// Comparison
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let cases = [
        ("int_int", Variant::from(-5i64), Variant::from(7u64)),
        ("int_float", Variant::from(u64::MAX), Variant::from(1.8e19f64)),
        ("text_int", Variant::from("12"), Variant::from(12u8)),
        ("text_text", Variant::from("apple"), Variant::from("banana")),
    ];

    for (name, lhs, rhs) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(lhs.compare(black_box(rhs))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_same_format,
    benchmark_policies,
    benchmark_mixed_format,
    benchmark_text_operands,
    benchmark_comparison,
);
criterion_main!(benches);
