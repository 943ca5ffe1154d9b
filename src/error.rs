//! Error types.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Why the engine could not produce a password.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please select at least one option")]
    EmptyCharset,

    #[error("length {length} is outside {min}..={max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange { length: usize },
}

/// Copying to the system clipboard failed. Never fatal.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
}
