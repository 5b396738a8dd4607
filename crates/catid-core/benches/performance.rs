// Rust guideline compliant 2026-10-19

use catid_core::{normalize_catalog_identifier, parse_catalog_identifier, unique_identifiers};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Mixed identifiers: early, late and unmatched rules.
fn sample_identifiers() -> Vec<String> {
    let mut names = Vec::with_capacity(1000);
    for i in 1..=250 {
        names.push(format!("M {}", i % 110 + 1));
        names.push(format!("SAO {}", 60000 + i));
        names.push(format!("PSR J{:04}-{:04}", i, 4715));
        names.push(format!("Target number {}", i));
    }
    names
}

fn bench_parse_first_rule(c: &mut Criterion) {
    c.bench_function("parse_messier", |b| {
        b.iter(|| black_box(parse_catalog_identifier(black_box("M 31"))))
    });
}

fn bench_parse_last_rule(c: &mut Criterion) {
    c.bench_function("parse_bare_pulsar", |b| {
        b.iter(|| black_box(parse_catalog_identifier(black_box("J1939+2134"))))
    });
}

fn bench_normalize_batch(c: &mut Criterion) {
    let names = sample_identifiers();
    c.bench_function("normalize_1000", |b| {
        b.iter(|| {
            for name in &names {
                black_box(normalize_catalog_identifier(name));
            }
        })
    });
}

fn bench_unique_identifiers(c: &mut Criterion) {
    let names = sample_identifiers();
    c.bench_function("unique_identifiers_1000", |b| {
        b.iter(|| black_box(unique_identifiers(names.iter().map(Some))))
    });
}

criterion_group!(
    benches,
    bench_parse_first_rule,
    bench_parse_last_rule,
    bench_normalize_batch,
    bench_unique_identifiers
);
criterion_main!(benches);
