// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the story viewer.
//!
//! The `App` struct loads the configuration and the story manifest named on
//! the command line, hands both to the viewer component, and translates the
//! viewer's effects into side effects like exiting the process or writing
//! share text to the clipboard. Policy decisions (window size, what a share
//! produces) live here so user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::player::AdvanceMode;
use crate::story::Story;
use crate::ui::viewer::component::{self, Effect};
use iced::widget::{Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::path::Path;

/// Root Iced application state bridging the viewer component and the
/// outside world.
pub struct App {
    viewer: Option<component::State>,
    load_error: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 300;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher: loads the config, then the story manifest, and starts
    /// playback when both succeed.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Warning: {warning}");
        }

        let mode: AdvanceMode = flags.mode_override.unwrap_or(config.playback.mode).into();

        let app = match flags.story_path {
            None => Self {
                viewer: None,
                load_error: Some(String::from(
                    "no story manifest given; pass the path to a story .toml file",
                )),
            },
            Some(path) => match Story::load(&path) {
                Ok(story) => Self {
                    viewer: Some(component::State::new(story, mode, &config)),
                    load_error: None,
                },
                Err(err) => Self {
                    viewer: None,
                    load_error: Some(format!("failed to load {}: {err}", path.display())),
                },
            },
        };

        if let Some(error) = &app.load_error {
            eprintln!("Error: {error}");
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.viewer {
            Some(viewer) => format!("{} - Iced Stories", viewer.story_title()),
            None => String::from("Iced Stories"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                let Some(viewer) = &mut self.viewer else {
                    return Task::none();
                };

                match viewer.handle_message(viewer_message) {
                    Effect::None => Task::none(),
                    Effect::Closed => {
                        self.viewer = None;
                        iced::exit()
                    }
                    Effect::Share { caption, image } => {
                        let text = share_text(&caption, &image);
                        eprintln!("Sharing: {text}");
                        iced::clipboard::write(text)
                    }
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.viewer {
            Some(viewer) => Subscription::batch([
                subscription::create_event_subscription(),
                subscription::create_tick_subscription(viewer),
            ]),
            None => Subscription::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.viewer {
            Some(viewer) => viewer.view().map(Message::Viewer),
            None => {
                let text = self
                    .load_error
                    .as_deref()
                    .unwrap_or("No story loaded")
                    .to_string();
                Container::new(Text::new(text))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center)
                    .align_y(iced::alignment::Vertical::Center)
                    .into()
            }
        }
    }
}

/// Text placed on the clipboard when the user shares a slide.
fn share_text(caption: &str, image: &Path) -> String {
    if caption.is_empty() {
        image.display().to_string()
    } else {
        format!("{caption} ({})", image.display())
    }
}
