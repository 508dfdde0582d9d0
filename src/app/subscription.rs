// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse, touch, window) to the viewer
//! component and exposes its playback tick stream at the application level.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Routes unhandled runtime events to the viewer.
///
/// The viewer is a full-screen component with no focusable widgets, so any
/// event the widget tree ignored belongs to it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent(event))),
        event::Status::Captured => None,
    })
}

/// Exposes the viewer's playback tick stream.
///
/// The viewer returns an empty subscription whenever playback is not
/// running, so pausing or closing tears the timer down here as well.
pub fn create_tick_subscription(viewer: &component::State) -> Subscription<Message> {
    viewer.subscription().map(Message::Viewer)
}
