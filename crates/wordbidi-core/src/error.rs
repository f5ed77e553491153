//! Error types for wordbidi

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordBidiError>;

/// Main error type for wordbidi
#[derive(Debug, Error)]
pub enum WordBidiError {
    #[error("argument base_direction={value} is invalid; should be one of ({expected})")]
    InvalidDirection { value: String, expected: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Reorder engine failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Word {index} ({word:?}) has no counterpart in the visual text")]
    UnmatchedWord { index: usize, word: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a reorder engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to order string: {0}")]
    Failed(String),

    #[error("Not supported by this engine: {0}")]
    Unsupported(String),
}

impl WordBidiError {
    /// Build an `InvalidDirection` error from the rejected value and the accepted names.
    pub fn invalid_direction<'a>(
        value: impl std::fmt::Display,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::InvalidDirection {
            value: value.to_string(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
