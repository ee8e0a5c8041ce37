// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metric_metadata::metadata::Metadata;

fn bench_add_or_update(c: &mut Criterion) {
    c.bench_function("metadata_add_or_update", |b| {
        let mut metadata = Metadata::new_forced();
        let mut i = 0_u64;
        b.iter(|| {
            metadata.add_or_update(black_box(&format!("key{i}")), "value");
            i += 1;
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("metadata_snapshot");
    for size in [5_usize, 50, 500] {
        let mut metadata = Metadata::new_forced();
        for i in 0..size {
            metadata.add_or_update(&format!("key{i}"), "value");
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &metadata, |b, metadata| {
            b.iter(|| black_box(metadata.snapshot()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_or_update, bench_snapshot);
criterion_main!(benches);
