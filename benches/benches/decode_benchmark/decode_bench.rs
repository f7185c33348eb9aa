use std::hint::black_box;

use aeu_core::{decode, StatusFormat};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Слово нужной длины: корректный заголовок, тело из повторяющегося байта.
fn synthetic_word(format: StatusFormat) -> String {
    let mut tokens = vec![
        "5A".to_string(),
        format!("{:02X}", format.as_u8()),
        "01".to_string(),
        "01".to_string(),
        "1A".to_string(),
    ];
    tokens.extend(std::iter::repeat("C4".to_string()).take(format.body_len()));
    tokens.join(" ")
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for format in StatusFormat::ALL {
        let word = synthetic_word(format);
        group.bench_with_input(BenchmarkId::from_parameter(format), &word, |b, w| {
            b.iter(|| decode(black_box(w)))
        });
    }

    group.finish();
}

fn bench_decode_failures(c: &mut Criterion) {
    c.bench_function("decode/truncated", |b| {
        b.iter(|| decode(black_box("5A 02 01 01 1A 51")))
    });
    c.bench_function("decode/malformed", |b| {
        b.iter(|| decode(black_box("5A 02 01 01 1A ZZ")))
    });
}

criterion_group!(benches, bench_decode, bench_decode_failures);
criterion_main!(benches);
