// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vitrine::{Catalog, Gallery, GalleryConfig, ImageDescriptor, Intent};
use vitrine_event_state::InputCapabilities;

const CATEGORIES: [&str; 4] = ["blog", "raison", "outils", "Facilitation graphique"];

fn gen_catalog(n: usize) -> Catalog {
    let images = (0..n)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let (width, height) = if i % 3 == 0 { (1500, 1000) } else { (1000, 1500) };
            ImageDescriptor {
                src: format!("./thumbs/{category}/img{i}"),
                width,
                height,
                name: format!("img{i}"),
                category: category.to_owned(),
                filter: category.to_owned(),
            }
        })
        .collect();
    Catalog::new(images).expect("generated catalog is valid")
}

fn gallery(n: usize) -> Gallery {
    Gallery::with_rng(
        &gen_catalog(n),
        GalleryConfig::default(),
        Size::new(1920.0, 1080.0),
        InputCapabilities::DESKTOP,
        StdRng::seed_from_u64(3),
    )
    .expect("default config is valid")
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/frames");

    let overview = gallery(100);
    group.bench_function("overview_100", |b| {
        b.iter(|| black_box(overview.frames()));
    });

    let mut zoomed = gallery(100);
    zoomed.apply(Intent::Focus(0)).expect("image 0 is shown");
    group.bench_function("focused_100", |b| {
        b.iter(|| black_box(zoomed.frames()));
    });

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/drag");

    group.bench_function("drag_then_frames", |b| {
        b.iter_batched(
            || gallery(100),
            |mut gallery| {
                gallery.pointer_down(None, Point::new(500.0, 500.0), 0);
                for step in 1..=30_u32 {
                    let x = 500.0 + f64::from(step) * 10.0;
                    gallery.pointer_move(Point::new(x, 500.0), u64::from(step) * 16);
                }
                gallery.pointer_up(Point::new(800.0, 500.0));
                black_box(gallery.frames().len());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_frames, bench_drag);
criterion_main!(benches);
