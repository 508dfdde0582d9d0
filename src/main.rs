// SPDX-License-Identifier: MPL-2.0

use iced_stories::app::{self, Flags};
use iced_stories::config::PlaybackMode;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let mode_override = if args.contains("--loop") {
        Some(PlaybackMode::Loop)
    } else if args.contains("--single-pass") {
        Some(PlaybackMode::SinglePass)
    } else {
        None
    };

    let flags = Flags {
        story_path: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
        mode_override,
    };

    app::run(flags)
}
