//! Criterion benchmarks for daylog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use daylog::core::formatter::render;
use daylog::prelude::*;
use daylog::{info, parts};
use std::time::Duration;
use tempfile::TempDir;

fn bench_logger(dir: &TempDir) -> Logger {
    Logger::builder()
        .base_path(dir.path())
        .name("bench")
        .flush_period(Duration::from_millis(50))
        .build()
        .expect("Failed to build logger")
}

// ============================================================================
// Emit Path Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = bench_logger(&dir);

    group.bench_function("text", |b| {
        b.iter(|| {
            logger.info(parts![black_box("Info message")]);
        });
    });

    group.bench_function("mixed_parts", |b| {
        b.iter(|| {
            info!(logger, "request ", black_box(42u64), " payload ", black_box(&[1u8, 2, 3, 4][..]));
        });
    });

    group.bench_function("filtered", |b| {
        b.iter(|| {
            logger.debug(parts![black_box("Debug message")]);
        });
    });

    group.finish();
    logger.close();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let text = LogEntry::with_origin(LogLevel::Info, 0x1a, 1_736_332_245_123, "connected");
    group.bench_function("text", |b| {
        b.iter(|| black_box(render(black_box(&text))));
    });

    let bytes = LogEntry::with_origin(LogLevel::Warning, 0x1a, 1_736_332_245_123, vec![0xabu8; 256]);
    group.bench_function("bytes_256", |b| {
        b.iter(|| black_box(render(black_box(&bytes))));
    });

    let error = LogEntry::with_origin(
        LogLevel::Error,
        0x1a,
        1_736_332_245_123,
        ErrorPart::new("io error").with_frames((0..16).map(|i| format!("at frame {}", i))),
    );
    group.bench_function("error_16_frames", |b| {
        b.iter(|| black_box(render(black_box(&error))));
    });

    group.finish();
}

// ============================================================================
// Flush Benchmarks
// ============================================================================

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");
    group.throughput(Throughput::Elements(1_000));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .base_path(dir.path())
        .name("flush")
        .flush_period(Duration::from_secs(3600))
        .build()
        .expect("Failed to build logger");

    group.bench_function("drain_1000", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                info!(logger, "line ", i);
            }
            black_box(logger.flush())
        });
    });

    group.finish();
    logger.close();
}

criterion_group!(benches, bench_emit, bench_render, bench_flush);
criterion_main!(benches);
