// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use vitrine_layout::{LayoutConfig, ScatterItem, scatter};

fn gen_items(n: usize, seed: u64) -> Vec<ScatterItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let size = Size::new(rng.gen_range(400.0..1500.0), rng.gen_range(400.0..1500.0));
            ScatterItem::new(size, true)
        })
        .collect()
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/scatter");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    // Placement is quadratic in the item count: every candidate is checked
    // against all earlier items.
    for len in [16usize, 64, 128] {
        let items = gen_items(len, 7);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            let config = LayoutConfig::default();
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(scatter(items, &config, &mut rng)));
        });
    }

    group.finish();
}

fn bench_scatter_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/scatter_half_inactive");
    group.sample_size(20);

    let mut items = gen_items(128, 11);
    for item in items.iter_mut().step_by(2) {
        item.active = false;
    }
    group.bench_function("128", |b| {
        let config = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(scatter(&items, &config, &mut rng)));
    });

    group.finish();
}

criterion_group!(benches, bench_scatter, bench_scatter_filtered);
criterion_main!(benches);
