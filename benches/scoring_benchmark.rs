//! Benchmarks for vector parsing and scoring.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cvss2_tools::corpus::{parse_corpus, verify_entries, CorpusMode};
use cvss2_tools::{compute, parse_vector, Cvss2};
use std::hint::black_box;

const VECTORS: &[(&str, &str)] = &[
    ("base", "AV:N/AC:L/Au:N/C:P/I:P/A:P"),
    ("temporal", "AV:L/AC:M/Au:S/C:P/I:C/A:N/E:U/RL:OF/RC:UR"),
    (
        "full",
        "AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C/CDP:H/TD:H/CR:M/IR:M/AR:H",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_vector");
    for (name, vector) in VECTORS {
        group.bench_with_input(BenchmarkId::from_parameter(name), vector, |b, vector| {
            b.iter(|| parse_vector(black_box(vector)));
        });
    }
    group.finish();
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for (name, vector) in VECTORS {
        let metrics = parse_vector(vector).expect("valid vector");
        group.bench_with_input(BenchmarkId::from_parameter(name), &metrics, |b, metrics| {
            b.iter(|| compute(black_box(metrics)));
        });
    }
    group.finish();
}

fn bench_clean_vector(c: &mut Criterion) {
    let cvss = Cvss2::new("AV:A/AC:H/Au:M/C:C/I:N/A:C/CR:ND/IR:L/RL:W/RC:ND/CDP:H/E:POC/TD:N/AR:M")
        .expect("valid vector");
    c.bench_function("clean_vector", |b| b.iter(|| black_box(&cvss).clean_vector()));
}

fn bench_corpus(c: &mut Criterion) {
    let content = include_str!("../tests/data/vectors_simple2");
    let entries = parse_corpus(content).expect("valid corpus");

    let mut group = c.benchmark_group("corpus");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("parse", |b| b.iter(|| parse_corpus(black_box(content))));
    for mode in [CorpusMode::Plain, CorpusMode::RedHat] {
        group.bench_with_input(
            BenchmarkId::new("verify", format!("{mode:?}")),
            &entries,
            |b, entries| b.iter(|| verify_entries("vectors_simple2", black_box(entries), mode)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_compute,
    bench_clean_vector,
    bench_corpus
);
criterion_main!(benches);
