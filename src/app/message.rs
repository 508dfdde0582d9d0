// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::config::PlaybackMode;
use crate::ui::viewer::component;
use std::path::PathBuf;

/// Launch options collected from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Path to the story manifest to play.
    pub story_path: Option<PathBuf>,
    /// Advance mode requested on the command line; overrides the config
    /// file when present.
    pub mode_override: Option<PlaybackMode>,
}

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the story viewer component.
    Viewer(component::Message),
}
