// SPDX-License-Identifier: MPL-2.0
//! Iced subscription producing the recurring playback tick.
//!
//! The subscription's identity includes the controller's timer generation.
//! Whenever a command bumps the generation, the iced runtime drops the old
//! stream and starts this one fresh, which is how cancel-before-restart is
//! realized: there is never more than one live tick stream, and the first
//! tick after a restart arrives a full interval later, so pause/resume
//! neither loses nor double-counts progress. Each emitted tick carries the
//! generation it was produced under; the controller discards stale ones.

use super::TICK_INTERVAL;
use iced::futures::SinkExt;
use iced::stream;

/// Subscription ID for the playback tick stream.
/// Each timer generation gets a unique ID to ensure the stream is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TickStreamId(u64);

/// Creates the tick stream for the given timer generation.
///
/// Emits the generation itself at every [`TICK_INTERVAL`]; the caller maps
/// it into its tick message and hands it to
/// [`PlaybackController::tick`](super::PlaybackController::tick).
pub fn ticks(generation: u64) -> iced::Subscription<u64> {
    iced::Subscription::run_with(TickStreamId(generation), |id: &TickStreamId| {
        let generation = id.0;
        stream::channel(8, move |mut output: iced::futures::channel::mpsc::Sender<u64>| async move {
            // First tick fires a full interval after the stream starts;
            // an immediate tick would jump progress on every resume.
            let first = tokio::time::Instant::now() + TICK_INTERVAL;
            let mut interval = tokio::time::interval_at(first, TICK_INTERVAL);

            loop {
                interval.tick().await;
                if output.send(generation).await.is_err() {
                    break;
                }
            }
        })
    })
}
