// ============================================================================
// Price Rewriter Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Detection - Pattern scan and overlap resolution only
// 2. Full Rewrite - Detect, mark up, render and substitute
// 3. Batch - Buffers of captions across worker threads
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use naira_markup::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

const CAPTIONS: [&str; 6] = [
    "iPhone 12 64gb 450k",
    "MacBook Pro M2 4.5m DM",
    "Dell Inspiron i7 ₦450,000",
    "HP EliteBook\nPrice: 420k\nCall 08012345678",
    "AirPods 85k, iPhone 1.2m, Watch 250,000",
    "Good morning everyone, new stock arriving Monday",
];

fn rewriter() -> PriceRewriter {
    PriceRewriterBuilder::new()
        .markup_percent(Decimal::from(2))
        .build()
        .unwrap()
}

// ============================================================================
// Detection
// ============================================================================

fn benchmark_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");
    let detector = PriceDetector::default();

    for (i, caption) in CAPTIONS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("find_all_prices", i), caption, |b, caption| {
            b.iter(|| black_box(detector.find_all_prices(caption)));
        });
    }

    group.finish();
}

// ============================================================================
// Full Rewrite
// ============================================================================

fn benchmark_replace_prices(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_prices");
    let rewriter = rewriter();

    for (i, caption) in CAPTIONS.iter().enumerate() {
        group.throughput(Throughput::Bytes(caption.len() as u64));
        group.bench_with_input(BenchmarkId::new("caption", i), caption, |b, caption| {
            b.iter(|| black_box(rewriter.replace_prices(caption)));
        });
    }

    group.finish();
}

fn benchmark_long_caption(c: &mut Criterion) {
    let rewriter = rewriter();
    let caption = (0..50)
        .map(|i| format!("Item {} going for {}k", i, 10 + i * 7))
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("replace_prices_50_lines", |b| {
        b.iter(|| black_box(rewriter.replace_prices(&caption)));
    });
}

// ============================================================================
// Batch
// ============================================================================

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let rewriter = rewriter();

    for size in [10, 100, 1000] {
        let buffer: Vec<&str> = CAPTIONS.iter().copied().cycle().take(size).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &buffer, |b, buffer| {
            b.iter(|| {
                black_box(
                    buffer
                        .iter()
                        .map(|c| rewriter.replace_prices(c).into_owned())
                        .collect::<Vec<_>>(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &buffer, |b, buffer| {
            let batch = BatchRewriter::new(&rewriter);
            b.iter(|| black_box(batch.rewrite_all(buffer)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_detection,
    benchmark_replace_prices,
    benchmark_long_caption,
    benchmark_batch
);
criterion_main!(benches);
