//! Error types for cue sheet parsing and editing.

use std::io;

use thiserror::Error;

/// Result type for cue sheet operations.
pub type Result<T> = std::result::Result<T, CueError>;

/// Error type for cue sheet operations.
///
/// Precondition failures of [`Sheet::update`](super::Sheet::update) (missing file,
/// wrong file type, empty field map) are not errors: they are reported as `Ok(false)`.
#[derive(Debug, Error)]
pub enum CueError {
    /// Reading or writing the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An `INDEX` timecode does not fit in `u64` milliseconds.
    #[error("invalid timecode '{value}' at line {line}")]
    Format { line: usize, value: String },

    /// A track starts before the start of the track preceding it.
    #[error(
        "track at line {line} starts at {start_ms} ms, before the previous track ({previous_ms} ms)"
    )]
    OutOfOrder {
        line: usize,
        start_ms: u64,
        previous_ms: u64,
    },

    /// No track with the requested ID exists in the sheet.
    #[error("cannot find cue sheet track: {0}")]
    TrackNotFound(String),
}

impl CueError {
    pub(crate) fn format(line: usize, value: impl Into<String>) -> Self {
        Self::Format {
            line,
            value: value.into(),
        }
    }
}
