// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Parsing and context application
// 2. Arithmetic - Add, multiply and the identity fast paths
// 3. Division - Context-bounded division at different widths
// 4. Comparison - Stripped equality and ordering
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_money::prelude::*;
use std::hint::black_box;

fn usd() -> Currency {
    Currency::new("USD").unwrap()
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("of_integer", |b| {
        b.iter(|| black_box(Money::of(black_box(123_456_789i64), usd()).unwrap()))
    });

    group.bench_function("of_f64", |b| {
        b.iter(|| black_box(Money::of(black_box(1234.5678f64), usd()).unwrap()))
    });

    group.bench_function("parse_display_form", |b| {
        b.iter(|| black_box("USD 1234567.891".parse::<Money>().unwrap()))
    });

    // Rounding into a narrow context
    let narrow = NumericContext::from_width(CanonicalWidth::Decimal32);
    let long: BigDecimal = "3.14159265358979323846264338327950288".parse().unwrap();
    group.bench_function("round_into_decimal32", |b| {
        b.iter(|| black_box(Money::with_context(black_box(&long), usd(), narrow).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Money::of_code(1_234_567.89, "USD").unwrap();
    let b_amount = Money::of_code(0.11, "USD").unwrap();
    let zero = Money::zero(usd());

    group.bench_function("add", |b| b.iter(|| black_box(a.add(&b_amount).unwrap())));
    group.bench_function("add_zero_fast_path", |b| {
        b.iter(|| black_box(a.add(&zero).unwrap()))
    });
    group.bench_function("multiply", |b| {
        b.iter(|| black_box(a.multiply(black_box(1.0825)).unwrap()))
    });
    group.bench_function("multiply_one_fast_path", |b| {
        b.iter(|| black_box(a.multiply(black_box(1)).unwrap()))
    });
    group.bench_function("divide_and_remainder", |b| {
        b.iter(|| black_box(a.divide_and_remainder(black_box(7)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Division Benchmarks
// Non-terminating quotients at each canonical width
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    for width in [
        CanonicalWidth::Decimal32,
        CanonicalWidth::Decimal64,
        CanonicalWidth::Decimal128,
    ] {
        let ctx = NumericContext::from_width(width);
        let amount = Money::with_context(10, usd(), ctx).unwrap();
        group.bench_with_input(BenchmarkId::new("divide_by_3", width), &amount, |b, amount| {
            b.iter(|| black_box(amount.divide(black_box(3)).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let short = "USD 1.5".parse::<Money>().unwrap();
    let padded = "USD 1.500000".parse::<Money>().unwrap();

    group.bench_function("eq_across_scales", |b| {
        b.iter(|| black_box(black_box(&short) == black_box(&padded)))
    });
    group.bench_function("is_less_than", |b| {
        b.iter(|| black_box(short.is_less_than(&padded).unwrap()))
    });
    group.bench_function("compare_to", |b| {
        b.iter(|| black_box(short.compare_to(&padded).unwrap()))
    });

    let mut amounts: Vec<Money> = (0..1000)
        .map(|i| Money::of_code(((i * 7919) % 1000) as i64, "USD").unwrap())
        .collect();
    group.bench_function("sort_1000", |b| {
        b.iter(|| {
            amounts.sort();
            black_box(amounts.first().cloned())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_arithmetic,
    benchmark_division,
    benchmark_comparison
);
criterion_main!(benches);
