// SPDX-License-Identifier: MPL-2.0
//! Story viewer component - playback state, input routing, and rendering.
//!
//! Owns the [`PlaybackController`] for one viewing session and translates
//! between the iced world (messages, raw events, subscriptions, widgets)
//! and the headless engine. All playback mutation funnels through
//! [`State::apply`], so keyboard input, tap zones, and the tick loop share
//! one code path.

use crate::config::Config;
use crate::player::{progress, subscription, AdvanceMode, PlaybackController, Snapshot};
use crate::story::{Slide, Story};
use crate::ui::viewer::navigation::{self, Command, PointerClass};
use crate::ui::viewer::progress_bar;
use iced::widget::{container, image, Column, Container, Image, Stack, Text};
use iced::{keyboard, mouse, touch, window, Color, Element, Length, Point, Theme};
use std::path::PathBuf;

/// Viewport width assumed until the first window resize event arrives.
const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;

/// Story viewer state.
pub struct State {
    controller: PlaybackController,

    /// Whether slide captions are drawn over the image.
    show_captions: bool,

    /// Pointer class latched from the most recent raw event; decides
    /// whether the center tap zone toggles pause.
    pointer_class: PointerClass,

    /// Last known cursor position, used to resolve mouse clicks into tap
    /// zones.
    cursor_position: Option<Point>,

    /// Current viewport width for tap zone geometry.
    viewport_width: f32,
}

/// Messages for the story viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    /// One playback tick, carrying the generation of the stream that
    /// produced it.
    Tick(u64),
    /// Unhandled runtime event routed in by the application subscription.
    RawEvent(iced::Event),
}

/// Effects produced by viewer updates for the application to act on.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The playback session reached its terminal state; the host should
    /// tear the viewer down.
    Closed,
    /// The user requested sharing of the current slide.
    Share { caption: String, image: PathBuf },
}

impl State {
    /// Creates a viewer for `story` and starts playback immediately.
    pub fn new(story: Story, mode: AdvanceMode, config: &Config) -> Self {
        Self {
            controller: PlaybackController::new(story, mode),
            show_captions: config.display.show_captions,
            pointer_class: PointerClass::default(),
            cursor_position: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// Returns the current playback snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Returns the title of the story being played.
    pub fn story_title(&self) -> &str {
        &self.controller.story().title
    }

    /// Returns true once the playback session has closed.
    pub fn is_closed(&self) -> bool {
        self.controller.is_closed()
    }

    /// Handles a component message.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Tick(generation) => {
                self.controller.tick(generation);
                self.closed_effect()
            }
            Message::RawEvent(event) => self.handle_raw_event(&event),
        }
    }

    /// Issues one playback command through the controller.
    ///
    /// This is the single entry point shared by keyboard handling, tap
    /// zones, and (indirectly, via the controller's own `next()`) the tick
    /// loop.
    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::Next => self.controller.next(),
            Command::Previous => self.controller.previous(),
            Command::Pause => self.controller.pause(),
            Command::Resume => self.controller.resume(),
            Command::Close => self.controller.close(),
            Command::Share => {
                if let Some(slide) = self.controller.current_slide() {
                    return Effect::Share {
                        caption: slide.caption.clone(),
                        image: slide.image.clone(),
                    };
                }
                return Effect::None;
            }
        }

        self.closed_effect()
    }

    /// Returns the tick subscription while playing; no subscription exists
    /// in any other phase, which is what guarantees at most one live timer.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.controller.is_playing() {
            subscription::ticks(self.controller.timer_generation()).map(Message::Tick)
        } else {
            iced::Subscription::none()
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> Effect {
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                match navigation::command_for_key(key, self.controller.is_playing()) {
                    Some(command) => self.apply(command),
                    None => Effect::None,
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.pointer_class = PointerClass::Mouse;
                self.cursor_position = Some(*position);
                Effect::None
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let Some(position) = self.cursor_position else {
                    return Effect::None;
                };
                self.tap_at(position.x, PointerClass::Mouse)
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.pointer_class = PointerClass::Touch;
                self.tap_at(position.x, PointerClass::Touch)
            }
            iced::Event::Window(window::Event::Resized(size)) => {
                self.viewport_width = size.width;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn tap_at(&mut self, x: f32, class: PointerClass) -> Effect {
        let zone = navigation::zone_at(x, self.viewport_width);
        match navigation::command_for_tap(zone, class, self.controller.is_paused()) {
            Some(command) => self.apply(command),
            None => Effect::None,
        }
    }

    fn closed_effect(&self) -> Effect {
        if self.controller.is_closed() {
            Effect::Closed
        } else {
            Effect::None
        }
    }

    /// Renders the viewer: slide image, progress row, caption, and the
    /// pause overlay.
    pub fn view(&self) -> Element<'_, Message> {
        let snapshot = self.controller.snapshot();
        let Some(slide) = self.controller.current_slide() else {
            return Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        };

        let picture = Image::new(image::Handle::from_path(&slide.image))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(iced::ContentFit::Contain);

        let fills = progress::segment_fills(&snapshot, self.controller.story().len());

        let mut chrome = Column::new().push(progress_bar::view(&fills));
        chrome = chrome.push(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill),
        );
        if self.show_captions && !slide.caption.is_empty() {
            chrome = chrome.push(caption_bar(slide));
        }

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                Container::new(picture)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(chrome);

        if snapshot.paused {
            layers = layers.push(pause_overlay());
        }

        layers.into()
    }
}

fn caption_bar(slide: &Slide) -> Element<'_, Message> {
    Container::new(
        Text::new(slide.caption.as_str())
            .size(18)
            .color(Color::WHITE),
    )
    .width(Length::Fill)
    .padding(16)
    .align_x(iced::alignment::Horizontal::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
        ..Default::default()
    })
    .into()
}

fn pause_overlay<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Paused").size(24).color(Color::WHITE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.4).into()),
            ..Default::default()
        })
        .into()
}
