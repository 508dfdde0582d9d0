// SPDX-License-Identifier: MPL-2.0
//! End-to-end playback scenarios against the controller and the progress
//! projection, driven the way the subscription drives them: one tick per
//! 100 ms, always carrying the live timer generation.

use approx::assert_relative_eq;
use iced_stories::player::{progress, AdvanceMode, PlaybackController};
use iced_stories::story::Story;
use std::path::Path;

const FRACTION_EPSILON: f64 = 1e-6;

fn three_slide_story() -> Story {
    let manifest = r#"
        id = "morning-briefing"
        title = "Morning Briefing"

        [[slides]]
        id = "a"
        order = 1
        image = "a.jpg"
        caption = "Opening"
        duration_secs = 3.0

        [[slides]]
        id = "b"
        order = 2
        image = "b.jpg"
        caption = "Middle"
        duration_secs = 1.0

        [[slides]]
        id = "c"
        order = 3
        image = "c.jpg"
        caption = "Closing"
        duration_secs = 5.0
    "#;
    Story::from_toml(manifest, Path::new(".")).expect("manifest must parse")
}

/// Delivers `count` ticks, re-reading the live generation each time as the
/// subscription would after a restart.
fn run_ticks(controller: &mut PlaybackController, count: usize) {
    for _ in 0..count {
        let generation = controller.timer_generation();
        controller.tick(generation);
    }
}

#[test]
fn three_second_slide_advances_after_thirty_ticks() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::Loop);

    run_ticks(&mut controller, 29);
    assert_eq!(controller.snapshot().current_index, 0);

    run_ticks(&mut controller, 1);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert_relative_eq!(snapshot.elapsed_fraction, 0.0, epsilon = FRACTION_EPSILON);
}

#[test]
fn pause_and_resume_preserve_mid_slide_progress() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::Loop);

    // Finish slide a, then run 0.4 s into the one second slide b.
    run_ticks(&mut controller, 30);
    run_ticks(&mut controller, 4);
    assert_relative_eq!(
        controller.snapshot().elapsed_fraction,
        0.4,
        epsilon = FRACTION_EPSILON
    );

    let stale = controller.timer_generation();
    controller.pause();
    assert!(controller.snapshot().paused);

    // Ticks from the cancelled stream must not move anything.
    controller.tick(stale);
    controller.tick(stale);
    assert_relative_eq!(
        controller.snapshot().elapsed_fraction,
        0.4,
        epsilon = FRACTION_EPSILON
    );

    controller.resume();
    assert_relative_eq!(
        controller.snapshot().elapsed_fraction,
        0.4,
        epsilon = FRACTION_EPSILON
    );

    run_ticks(&mut controller, 1);
    assert_relative_eq!(
        controller.snapshot().elapsed_fraction,
        0.5,
        epsilon = FRACTION_EPSILON
    );
    assert_eq!(controller.snapshot().current_index, 1);
}

#[test]
fn loop_mode_wraps_back_to_the_first_slide() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::Loop);

    // 3 s + 1 s + 5 s of ticks plays the whole story once.
    run_ticks(&mut controller, 30 + 10 + 50);
    let snapshot = controller.snapshot();
    assert!(!snapshot.closed);
    assert_eq!(snapshot.current_index, 0);
}

#[test]
fn single_pass_closes_after_the_last_slide() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::SinglePass);

    run_ticks(&mut controller, 30 + 10 + 50);
    let snapshot = controller.snapshot();
    assert!(snapshot.closed);

    // The session is terminal; further input changes nothing.
    controller.next();
    controller.resume();
    run_ticks(&mut controller, 10);
    assert!(controller.snapshot().closed);
}

#[test]
fn progress_row_tracks_playback() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::SinglePass);

    // Half-way through slide b: a is full, b is half, c is empty.
    run_ticks(&mut controller, 30 + 5);
    let fills = progress::segment_fills(&controller.snapshot(), controller.story().len());
    assert_eq!(fills.len(), 3);
    assert_relative_eq!(fills[0], 1.0, epsilon = FRACTION_EPSILON);
    assert_relative_eq!(fills[1], 0.5, epsilon = FRACTION_EPSILON);
    assert_relative_eq!(fills[2], 0.0, epsilon = FRACTION_EPSILON);

    // After close, every segment reads full.
    controller.close();
    let fills = progress::segment_fills(&controller.snapshot(), controller.story().len());
    assert!(fills.iter().all(|fill| *fill == 1.0));
}

#[test]
fn manual_navigation_restarts_slide_timing() {
    let mut controller = PlaybackController::new(three_slide_story(), AdvanceMode::Loop);

    run_ticks(&mut controller, 10);
    let stale = controller.timer_generation();

    controller.next();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert_relative_eq!(snapshot.elapsed_fraction, 0.0, epsilon = FRACTION_EPSILON);

    // A tick left over from before the jump carries the old generation.
    controller.tick(stale);
    assert_relative_eq!(
        controller.snapshot().elapsed_fraction,
        0.0,
        epsilon = FRACTION_EPSILON
    );

    controller.previous();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.current_index, 0);
    assert_relative_eq!(snapshot.elapsed_fraction, 0.0, epsilon = FRACTION_EPSILON);
}
