// SPDX-License-Identifier: MPL-2.0
//! Input mapping for the story viewer.
//!
//! Translates keyboard keys and pointer tap zones into playback commands.
//! Everything here is a pure function over zone geometry and the current
//! playing/paused flags; the component issues the resulting [`Command`]
//! through the same `PlaybackController` entry points the tick loop uses,
//! so input handling and timer handling cannot diverge in behavior. No
//! debouncing or queuing happens here: rapid repeated input is safe because
//! the controller's cancel-before-restart discipline absorbs it.

use iced::keyboard::{key, Key};

/// A playback command produced from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Pause,
    Resume,
    Close,
    Share,
}

/// Class of the pointing device, latched from the most recent raw event.
///
/// Iced reports mouse and touch as separate event families; the center tap
/// zone only toggles pause for touch-class input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerClass {
    #[default]
    Mouse,
    Touch,
}

/// Horizontal thirds of the viewport used for tap navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Center,
    Right,
}

/// Maps an x coordinate to its tap zone.
///
/// A degenerate viewport width maps everything to the right (forward)
/// zone.
pub fn zone_at(x: f32, viewport_width: f32) -> TapZone {
    if viewport_width <= 0.0 {
        return TapZone::Right;
    }

    let third = viewport_width / 3.0;
    if x < third {
        TapZone::Left
    } else if x < 2.0 * third {
        TapZone::Center
    } else {
        TapZone::Right
    }
}

/// Maps a pressed key to a playback command.
///
/// Space toggles between pause and resume depending on whether playback is
/// currently running.
pub fn command_for_key(key: &Key, playing: bool) -> Option<Command> {
    match key {
        Key::Named(key::Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(key::Named::ArrowRight) => Some(Command::Next),
        Key::Named(key::Named::Space) => {
            if playing {
                Some(Command::Pause)
            } else {
                Some(Command::Resume)
            }
        }
        Key::Named(key::Named::Escape) => Some(Command::Close),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(Command::Share),
        _ => None,
    }
}

/// Maps a tap to a playback command.
///
/// While paused, tapping anywhere resumes (the whole viewport acts as the
/// pause overlay). While playing: left third goes back, right two thirds
/// go forward, and on touch-class input the center third pauses instead of
/// navigating.
pub fn command_for_tap(zone: TapZone, class: PointerClass, paused: bool) -> Option<Command> {
    if paused {
        return Some(Command::Resume);
    }

    match (zone, class) {
        (TapZone::Left, _) => Some(Command::Previous),
        (TapZone::Center, PointerClass::Touch) => Some(Command::Pause),
        (TapZone::Center, PointerClass::Mouse) => Some(Command::Next),
        (TapZone::Right, _) => Some(Command::Next),
    }
}
