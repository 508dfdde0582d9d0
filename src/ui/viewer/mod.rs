// SPDX-License-Identifier: MPL-2.0
//! The story viewer: playback component, input mapping, and progress row.

pub mod component;
pub mod navigation;
pub mod progress_bar;
