// SPDX-License-Identifier: MPL-2.0
//! Story and slide data model plus TOML manifest loading.
//!
//! A story is an ordered, non-empty sequence of slides (image + caption +
//! duration). The playback engine treats these values as immutable; all
//! validation happens here, at load time, so the engine never has to report
//! errors of its own.
//!
//! # Manifest format
//!
//! ```toml
//! id = "sunrise-walk"
//! title = "A walk at sunrise"
//!
//! [[slides]]
//! id = "intro"
//! order = 1
//! image = "slides/01.jpg"
//! caption = "Leaving the house"
//! duration_secs = 5.0
//! ```
//!
//! Relative `image` paths are resolved against the manifest's directory.

use crate::error::{Result, StoryError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Shortest duration a slide may be shown for, in seconds.
/// Missing or non-positive durations clamp to this instead of failing,
/// since continuing playback beats crashing a full-screen viewer.
pub const MIN_SLIDE_DURATION_SECS: f32 = 1.0;

/// Longest duration a slide may be shown for, in seconds.
pub const MAX_SLIDE_DURATION_SECS: f32 = 30.0;

/// One image + caption + duration unit within a story.
///
/// Immutable once loaded; the playback engine only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Opaque identifier from the manifest.
    pub id: String,
    /// Rank within the story. Unique and strictly increasing after load.
    pub order: u32,
    /// Path to the slide image, resolved against the manifest directory.
    pub image: PathBuf,
    /// Caption shown over the image.
    pub caption: String,
    duration_secs: f32,
}

impl Slide {
    /// Returns the display duration in seconds, clamped to the supported
    /// range so a bad manifest value can never divide by zero or race
    /// through the story.
    pub fn duration_secs(&self) -> f32 {
        if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            self.duration_secs
                .clamp(MIN_SLIDE_DURATION_SECS, MAX_SLIDE_DURATION_SECS)
        } else {
            MIN_SLIDE_DURATION_SECS
        }
    }
}

/// An ordered, non-empty sequence of slides shown as one playback session.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: String,
    pub title: String,
    slides: Vec<Slide>,
}

impl Story {
    /// Builds a story from already-validated parts.
    ///
    /// Returns `StoryError::Empty` for an empty slide list and
    /// `StoryError::DuplicateOrder` when two slides share a rank. Slides
    /// are sorted by `order` so callers can index them positionally.
    pub fn new(id: String, title: String, mut slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(StoryError::Empty.into());
        }

        slides.sort_by_key(|slide| slide.order);
        for pair in slides.windows(2) {
            if pair[0].order == pair[1].order {
                return Err(StoryError::DuplicateOrder(pair[0].order).into());
            }
        }

        Ok(Self { id, title, slides })
    }

    /// Loads and validates a story manifest from disk.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(manifest_path)?;
        let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml(&contents, base_dir)
    }

    /// Parses a manifest from TOML text, resolving image paths against
    /// `base_dir`.
    pub fn from_toml(contents: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawManifest = toml::from_str(contents)
            .map_err(|e| StoryError::Malformed(e.to_string()))?;

        let slides = raw
            .slides
            .into_iter()
            .map(|slide| Slide {
                id: slide.id,
                order: slide.order,
                image: resolve_image_path(base_dir, &slide.image),
                caption: slide.caption.unwrap_or_default(),
                duration_secs: slide.duration_secs.unwrap_or(0.0),
            })
            .collect();

        Self::new(raw.id, raw.title, slides)
    }

    /// Returns the slides in playback order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the slide at `index`, if it exists.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Returns the number of slides. Always at least 1 for a validated story.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn resolve_image_path(base_dir: &Path, image: &str) -> PathBuf {
    let path = Path::new(image);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

// =============================================================================
// Raw manifest shapes (serde targets, pre-validation)
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    slides: Vec<RawSlide>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    id: String,
    order: u32,
    image: String,
    caption: Option<String>,
    duration_secs: Option<f32>,
}
