//! Criterion benchmarks for rust_field_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_field_logger::prelude::*;
use std::io;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let sink = io::sink();

    group.bench_function("runtime", |b| {
        b.iter(|| {
            let logger = Logger::new(JsonDriver::new(&sink), LogLevel::Info);
            black_box(logger)
        });
    });

    group.bench_function("static", |b| {
        b.iter(|| {
            let logger = InfoLogger::new(JsonDriver::new(&sink));
            black_box(logger)
        });
    });

    let base = Logger::new(JsonDriver::new(&sink), LogLevel::Info)
        .with(&[Field::new("service", "api"), Field::new("region", "eu")]);

    group.bench_function("with", |b| {
        b.iter(|| {
            let derived = base.with(black_box(&[Field::new("request_id", 42)]));
            black_box(derived)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("drivers");
    group.throughput(Throughput::Elements(1));

    let sink = io::sink();
    let console = Logger::new(ConsoleDriver::new(&sink), LogLevel::Info);
    let json = Logger::new(JsonDriver::new(&sink), LogLevel::Info);
    let escaped = Logger::new(JsonDriver::new(&sink).with_escaping(true), LogLevel::Info);

    group.bench_function("console", |b| {
        b.iter(|| {
            console.info(black_box("Request served"), &[Field::new("status", 200)]);
        });
    });

    group.bench_function("json", |b| {
        b.iter(|| {
            json.info(black_box("Request served"), &[Field::new("status", 200)]);
        });
    });

    group.bench_function("json_escaped", |b| {
        b.iter(|| {
            escaped.info(black_box("Request \"served\""), &[Field::new("status", 200)]);
        });
    });

    group.finish();
}

fn bench_field_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_counts");

    let sink = io::sink();
    let logger = Logger::new(JsonDriver::new(&sink), LogLevel::Info);

    for count in [0usize, 1, 4, 16] {
        let fields: Vec<Field> = (0..count)
            .map(|i| Field::new(format!("key{}", i), i))
            .collect();
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("fields_{}", count), |b| {
            b.iter(|| {
                logger.info(black_box("Message"), black_box(&fields));
            });
        });
    }

    for depth in [1usize, 4, 16] {
        let mut bound = logger.clone();
        for i in 0..depth {
            bound = bound.with(&[Field::new(format!("bound{}", i), i)]);
        }
        group.bench_function(format!("bound_groups_{}", depth), |b| {
            b.iter(|| {
                bound.info(black_box("Message"), &[]);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Gating Benchmarks
// ============================================================================

fn bench_gating(c: &mut Criterion) {
    let mut group = c.benchmark_group("gating");
    group.throughput(Throughput::Elements(1));

    let sink = io::sink();
    let runtime = Logger::new(JsonDriver::new(&sink), LogLevel::Info);
    let fixed = InfoLogger::new(JsonDriver::new(&sink));

    group.bench_function("runtime_suppressed", |b| {
        b.iter(|| {
            runtime.debug(black_box("Filtered"), &[Field::new("n", 1)]);
        });
    });

    group.bench_function("static_suppressed", |b| {
        b.iter(|| {
            fixed.debug(black_box("Filtered"), &[Field::new("n", 1)]);
        });
    });

    group.bench_function("runtime_enabled", |b| {
        b.iter(|| {
            runtime.info(black_box("Written"), &[Field::new("n", 1)]);
        });
    });

    group.bench_function("static_enabled", |b| {
        b.iter(|| {
            fixed.info(black_box("Written"), &[Field::new("n", 1)]);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_drivers,
    bench_field_counts,
    bench_gating,
);

criterion_main!(benches);
