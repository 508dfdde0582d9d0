// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Story(StoryError),
}

/// Specific error types for story manifest problems.
///
/// These surface at load time, before the playback engine is constructed;
/// the engine itself never reports errors (degenerate inputs are corrected
/// silently).
#[derive(Debug, Clone)]
pub enum StoryError {
    /// Manifest contains no slides.
    Empty,

    /// Two slides share the same `order` rank.
    DuplicateOrder(u32),

    /// Manifest could not be parsed.
    Malformed(String),
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryError::Empty => write!(f, "story has no slides"),
            StoryError::DuplicateOrder(order) => {
                write!(f, "duplicate slide order: {}", order)
            }
            StoryError::Malformed(msg) => write!(f, "malformed story manifest: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Story(e) => write!(f, "Story Error: {}", e),
        }
    }
}

impl From<StoryError> for Error {
    fn from(err: StoryError) -> Self {
        Error::Story(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
