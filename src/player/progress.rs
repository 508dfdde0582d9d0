// SPDX-License-Identifier: MPL-2.0
//! Pure projection of playback state into per-slide progress fills.
//!
//! Recomputed from every [`Snapshot`]; carries no state and has no side
//! effects, so the progress row can be tested without any rendering
//! surface.

use super::Snapshot;

/// Returns the fill fraction for each slide's progress segment.
///
/// Slides before the current index are fully filled, the current slide
/// shows its elapsed fraction, and upcoming slides are empty. A closed
/// single-pass session reports every segment full.
pub fn segment_fills(snapshot: &Snapshot, slide_count: usize) -> Vec<f64> {
    (0..slide_count)
        .map(|i| segment_fill(snapshot, i))
        .collect()
}

/// Fill fraction for the segment at `index`.
pub fn segment_fill(snapshot: &Snapshot, index: usize) -> f64 {
    if snapshot.closed {
        return 1.0;
    }

    if index < snapshot.current_index {
        1.0
    } else if index == snapshot.current_index {
        snapshot.elapsed_fraction
    } else {
        0.0
    }
}
