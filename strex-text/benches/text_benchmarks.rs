//! Performance benchmarks for the text helpers
//!
//! Run with: cargo bench --bench text_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use strex_text::{FrequencyOptions, MarkerOptions, SortOrder, StrExt};

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Visit https://example.com or call (555) 123-4567 today. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

fn bench_word_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_frequency");
    let options = FrequencyOptions::sorted(SortOrder::Descending).ignore_case(true);

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("descending", size), &text, |b, text| {
            b.iter(|| black_box(text.as_str()).word_frequency(&options));
        });
    }

    group.finish();
}

fn bench_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("markers");
    let text = generate_text(10_240);
    let options = MarkerOptions::default();

    group.bench_function("left_of", |b| {
        b.iter(|| black_box(text.as_str()).left_of("TODAY", &options));
    });
    group.bench_function("right_of", |b| {
        b.iter(|| black_box(text.as_str()).right_of("visit", &options));
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for size in [1024, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("urls", size), &text, |b, text| {
            b.iter(|| black_box(text.as_str()).extract_urls(None).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("phones", size), &text, |b, text| {
            b.iter(|| black_box(text.as_str()).extract_phone_numbers(None).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_word_frequency, bench_markers, bench_extraction);
criterion_main!(benches);
