// SPDX-License-Identifier: MPL-2.0
//! Story playback engine.
//!
//! [`PlaybackController`] owns all playback state for one open viewer: the
//! current slide index, how much of the current slide has elapsed, whether
//! playback is paused, and the identity of the single recurring tick stream
//! that drives auto-advance. Every external interaction goes through its
//! command methods; the timer's self-advance calls the same `next()` entry
//! point as keyboard and pointer input, so there is no separate internal
//! path that could race with the user.
//!
//! The controller is headless: it knows nothing about widgets or
//! subscriptions. The viewer component feeds it `tick()` messages from the
//! stream in [`subscription`] and renders from [`Snapshot`] values.
//!
//! # Timer discipline
//!
//! At most one tick stream may exist per live controller. Every command
//! that changes the index or paused-ness bumps `timer_generation`; the tick
//! subscription's identity includes the generation, so the runtime drops
//! the old stream and starts a fresh one, and `tick()` ignores messages
//! that carry a stale generation. A tick already in flight when the user
//! pauses, navigates, or closes therefore lands harmlessly instead of
//! compounding the elapsed fraction.

pub mod progress;
pub mod subscription;

use crate::story::{Slide, Story};
use std::time::Duration;

/// Wall-clock granularity of the auto-advance tick loop.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What happens when playback advances past the last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvanceMode {
    /// Wrap around to the first slide and keep playing.
    Loop,
    /// Close the viewer.
    #[default]
    SinglePass,
}

/// Durable playback phases.
///
/// Auto-advance is a transient step inside `Playing` (a tick reaching a
/// full elapsed fraction), not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    Paused,
    /// Terminal. No timer exists and every further command is a no-op.
    Closed,
}

/// Read-only view of playback state, suitable for driving presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Index of the slide currently shown.
    pub current_index: usize,
    /// Fraction of the current slide's duration already elapsed, in `[0, 1]`.
    pub elapsed_fraction: f64,
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether the viewer has been closed.
    pub closed: bool,
}

/// The playback state machine for one open story viewer.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    story: Story,
    mode: AdvanceMode,
    phase: Phase,
    current_index: usize,
    elapsed_fraction: f64,
    /// Identity of the currently valid tick stream. Bumped by every command
    /// that changes the index or paused-ness; ticks carrying an older value
    /// are discarded.
    timer_generation: u64,
}

impl PlaybackController {
    /// Creates a controller for `story` and starts playing the first slide.
    ///
    /// An empty story never enters `Playing`: the controller comes back
    /// already closed. (The manifest loader rejects empty stories, so this
    /// is a structural guard, not an expected path.)
    pub fn new(story: Story, mode: AdvanceMode) -> Self {
        let phase = if story.is_empty() {
            Phase::Closed
        } else {
            Phase::Playing
        };

        Self {
            story,
            mode,
            phase,
            current_index: 0,
            elapsed_fraction: 0.0,
            timer_generation: 0,
        }
    }

    /// Returns the story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Returns the configured advance mode.
    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    /// Returns the slide currently shown.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.story.slide(self.current_index)
    }

    /// Returns a read-only snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_index: self.current_index,
            elapsed_fraction: self.elapsed_fraction,
            paused: self.phase == Phase::Paused,
            closed: self.phase == Phase::Closed,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Identity of the tick stream that is currently allowed to advance
    /// playback. The subscription includes this in its id so the runtime
    /// recreates the stream whenever it changes.
    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    /// Starts playback.
    ///
    /// Idempotent: a no-op while already playing or after close. From
    /// `Paused` this behaves like [`resume`](Self::resume), continuing from
    /// the preserved elapsed fraction.
    pub fn play(&mut self) {
        match self.phase {
            Phase::Paused => self.resume(),
            Phase::Playing | Phase::Closed => {}
        }
    }

    /// Pauses playback, cancelling the tick stream.
    ///
    /// The elapsed fraction is preserved exactly; resuming must not lose or
    /// jump progress.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
            self.bump_timer_generation();
        }
    }

    /// Resumes playback from the preserved elapsed fraction.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
            self.bump_timer_generation();
        }
    }

    /// Advances to the next slide.
    ///
    /// Cancels any outstanding tick stream first, resets the elapsed
    /// fraction, and lets a fresh stream start unless paused. Past the last
    /// slide this wraps in [`AdvanceMode::Loop`] and closes in
    /// [`AdvanceMode::SinglePass`]. Calling while paused still moves the
    /// index but stays paused.
    pub fn next(&mut self) {
        if self.phase == Phase::Closed {
            return;
        }

        self.bump_timer_generation();
        self.elapsed_fraction = 0.0;

        if self.current_index + 1 < self.story.len() {
            self.current_index += 1;
        } else {
            match self.mode {
                AdvanceMode::Loop => self.current_index = 0,
                AdvanceMode::SinglePass => self.phase = Phase::Closed,
            }
        }
    }

    /// Moves back to the previous slide.
    ///
    /// A defined no-op at the first slide: the state is left fully
    /// unchanged, including the elapsed fraction and timer identity.
    pub fn previous(&mut self) {
        if self.phase == Phase::Closed || self.current_index == 0 {
            return;
        }

        self.bump_timer_generation();
        self.elapsed_fraction = 0.0;
        self.current_index -= 1;
    }

    /// Closes the viewer session.
    ///
    /// The tick stream is invalidated before this returns, so no tick can
    /// fire into torn-down state. All further commands are silent no-ops.
    pub fn close(&mut self) {
        if self.phase == Phase::Closed {
            return;
        }

        self.bump_timer_generation();
        self.phase = Phase::Closed;
    }

    /// Advances the elapsed fraction by one tick of wall-clock time.
    ///
    /// `generation` identifies the stream that produced the tick; stale
    /// ticks (from a stream that a command has since invalidated) are
    /// discarded. When the fraction reaches 1.0 it is clamped and the
    /// controller invokes its own [`next`](Self::next), going through the
    /// exact same cancel-then-restart logic as user navigation.
    pub fn tick(&mut self, generation: u64) {
        if self.phase != Phase::Playing || generation != self.timer_generation {
            return;
        }

        let Some(slide) = self.current_slide() else {
            return;
        };

        let increment = TICK_INTERVAL.as_secs_f64() / f64::from(slide.duration_secs());
        self.elapsed_fraction += increment;

        // Tolerance absorbs accumulated float error so a 2 s slide advances
        // on its 20th tick, not its 21st.
        if self.elapsed_fraction >= 1.0 - 1e-9 {
            self.elapsed_fraction = 1.0;
            self.next();
        }
    }

    fn bump_timer_generation(&mut self) {
        self.timer_generation = self.timer_generation.wrapping_add(1);
    }
}
