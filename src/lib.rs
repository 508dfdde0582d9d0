// SPDX-License-Identifier: MPL-2.0
//! `iced_stories` is a full-screen story player built with the Iced GUI
//! framework.
//!
//! It plays a sequence of captioned image slides with per-slide timing,
//! tap and keyboard navigation, and a segmented progress row, in the style
//! of mobile story viewers.

#![doc(html_root_url = "https://docs.rs/iced_stories/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod player;
pub mod story;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
