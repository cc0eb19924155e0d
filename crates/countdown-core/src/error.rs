//! Error types for loading a countdown file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single event line could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventParseError {
    /// The date before the optional `/` is not a valid `YYYY-MM-DD` date.
    #[error("invalid start date: {token}")]
    InvalidStartDate { token: String },

    /// The date after the `/` is not a valid `YYYY-MM-DD` date.
    #[error("invalid stop date: {token}")]
    InvalidStopDate { token: String },
}

/// Errors that abort loading a countdown report.
#[derive(Debug, Error)]
pub enum CountdownError {
    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-comment, non-header line is not a valid event.
    #[error("invalid event format: {line}")]
    InvalidEvent {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
        #[source]
        reason: EventParseError,
    },
}
