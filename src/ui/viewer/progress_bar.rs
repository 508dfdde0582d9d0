// SPDX-License-Identifier: MPL-2.0
//! Segmented progress row shown along the top edge of the viewer.
//!
//! One thin segment per slide, filled according to the pure projection in
//! [`crate::player::progress`].

use iced::widget::{progress_bar, Container, Row};
use iced::{Element, Length};

const SEGMENT_HEIGHT: f32 = 3.0;
const SEGMENT_SPACING: f32 = 4.0;
const ROW_PADDING: f32 = 8.0;

/// Renders the per-slide fill fractions as a row of progress segments.
pub fn view<'a, Message: 'a>(fills: &[f64]) -> Element<'a, Message> {
    let mut segments = Row::new().spacing(SEGMENT_SPACING);
    for fill in fills {
        segments = segments.push(
            progress_bar(0.0..=1.0, *fill as f32)
                .girth(Length::Fixed(SEGMENT_HEIGHT))
                .length(Length::Fill),
        );
    }

    Container::new(segments)
        .width(Length::Fill)
        .padding(ROW_PADDING)
        .into()
}
