//! Benchmarks for number spelling.
//!
//! Run with: `cargo bench --package estonian-numbers --bench format_bench`
//!
//! Covers the three cost drivers: digit count (one table lookup run per
//! group), the inflected final word (one extra allocation), and stacking past
//! the scale table for very large magnitudes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use estonian_numbers::{Mode, Number, NumeralFormatter};
use std::hint::black_box;

/// Decimal string of `len` digits cycling through 1..=9.
fn digits(len: usize) -> String {
    (0..len)
        .map(|i| char::from(b'1' + (i % 9) as u8))
        .collect()
}

fn bench_format_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_cardinal");
    let formatter = NumeralFormatter::new();

    for len in [3usize, 9, 30, 120] {
        let input = digits(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| formatter.format(black_box(input), Mode::Cardinal));
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_modes");
    let formatter = NumeralFormatter::new();
    let number: Number = digits(18).parse().expect("valid digits");

    for mode in Mode::ALL {
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| formatter.spell(black_box(&number), mode));
        });
    }

    group.finish();
}

fn bench_parse_only(c: &mut Criterion) {
    let input = digits(120);
    c.bench_function("parse_120_digits", |b| {
        b.iter(|| Number::parse(black_box(&input)));
    });
}

criterion_group!(benches, bench_format_by_length, bench_modes, bench_parse_only);
criterion_main!(benches);
