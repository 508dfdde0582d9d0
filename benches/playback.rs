// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the playback hot path.
//!
//! Measures the performance of:
//! - Tick handling (runs ten times a second while playing)
//! - Manual navigation (next/previous)
//! - The progress row projection (recomputed on every view)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_stories::player::{progress, AdvanceMode, PlaybackController};
use iced_stories::story::Story;
use std::fmt::Write as _;
use std::hint::black_box;
use std::path::Path;

/// Builds a story with `count` five second slides.
fn story_with_slides(count: usize) -> Story {
    let mut manifest = String::from("id = \"bench\"\ntitle = \"Bench\"\n");
    for i in 0..count {
        write!(
            manifest,
            "\n[[slides]]\nid = \"s{i}\"\norder = {}\nimage = \"s{i}.jpg\"\ncaption = \"Slide {i}\"\nduration_secs = 5.0\n",
            i + 1
        )
        .expect("writing to a String cannot fail");
    }
    Story::from_toml(&manifest, Path::new(".")).expect("bench manifest must parse")
}

/// Benchmark tick handling, including the advance on slide boundaries.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    let controller = PlaybackController::new(story_with_slides(20), AdvanceMode::Loop);

    group.bench_function("tick", |b| {
        b.iter(|| {
            let mut player = controller.clone();
            let generation = player.timer_generation();
            player.tick(generation);
            black_box(&player);
        });
    });

    group.bench_function("tick_full_loop", |b| {
        b.iter(|| {
            let mut player = controller.clone();
            // 20 slides of 5 s each, one tick per 100 ms.
            for _ in 0..(20 * 50) {
                let generation = player.timer_generation();
                player.tick(generation);
            }
            black_box(&player);
        });
    });

    group.finish();
}

/// Benchmark manual navigation operations.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    let controller = PlaybackController::new(story_with_slides(20), AdvanceMode::Loop);

    group.bench_function("next", |b| {
        b.iter(|| {
            let mut player = controller.clone();
            player.next();
            black_box(&player);
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            let mut player = controller.clone();
            player.next();
            player.previous();
            black_box(&player);
        });
    });

    group.finish();
}

/// Benchmark the per-frame progress projection.
fn bench_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    let mut controller = PlaybackController::new(story_with_slides(20), AdvanceMode::Loop);
    for _ in 0..75 {
        let generation = controller.timer_generation();
        controller.tick(generation);
    }
    let snapshot = controller.snapshot();
    let slide_count = controller.story().len();

    group.bench_function("segment_fills", |b| {
        b.iter(|| {
            black_box(progress::segment_fills(&snapshot, slide_count));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_navigate, bench_progress);
criterion_main!(benches);
