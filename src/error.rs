//! Unified error types for whatstat.
//!
//! This module provides a single [`WhatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Format and transcript errors are fatal for the whole run: the pipeline
//!   either produces a fully populated [`ChatManager`](crate::ChatManager)
//!   or aborts before any statistic is computed. Lines whose sender cannot
//!   be isolated are silently filtered during parsing and never surface
//!   as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for whatstat operations.
///
/// # Example
///
/// ```rust
/// use whatstat::error::Result;
/// use whatstat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WhatstatError>;

/// The error type for all whatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WhatstatError {
    /// The transcript file does not exist at the given path.
    ///
    /// Surfaced separately from other I/O failures so the CLI can tell the
    /// operator to re-check the path.
    #[error("chat file not found: {}\nRe-check the path and the file name.", path.display())]
    FileNotFound {
        /// The path that was tried
        path: PathBuf,
    },

    /// Any other I/O error (permission denied, broken pipe, ...).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript contains no message lines after the export header
    /// and the left-to-right marks have been stripped.
    #[error("transcript is empty: no lines left after the export header")]
    EmptyTranscript,

    /// The first logical line matches neither known timestamp convention.
    ///
    /// Without a detected format no line can be parsed, so this is fatal.
    #[error("first line matches no known WhatsApp export format: {line:?}")]
    UnknownFormat {
        /// The line that failed detection
        line: String,
    },

    /// Parsing produced zero valid messages; every line was a system
    /// notice or malformed.
    #[error("no messages with a valid sender found in the transcript")]
    NoUsersFound,

    /// All messages fall on the same calendar day, so the per-day message
    /// average has a zero day span. Callers that want a number for
    /// single-day chats must decide on a fallback themselves.
    #[error("all messages fall on the same calendar day; messages-per-day is undefined")]
    SingleDaySpan,
}

impl WhatstatError {
    /// Creates a [`FileNotFound`](Self::FileNotFound) error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        WhatstatError::FileNotFound { path: path.into() }
    }

    /// Creates an [`UnknownFormat`](Self::UnknownFormat) error.
    pub fn unknown_format(line: impl Into<String>) -> Self {
        WhatstatError::UnknownFormat { line: line.into() }
    }

    /// Returns `true` if this is an I/O error (including a missing file).
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            WhatstatError::Io(_) | WhatstatError::FileNotFound { .. }
        )
    }

    /// Returns `true` if this error means the transcript could not be
    /// parsed at all (empty, unknown format, or no valid messages).
    pub fn is_fatal_parse(&self) -> bool {
        matches!(
            self,
            WhatstatError::EmptyTranscript
                | WhatstatError::UnknownFormat { .. }
                | WhatstatError::NoUsersFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = WhatstatError::file_not_found("/chats/missing.txt");
        let display = err.to_string();
        assert!(display.contains("/chats/missing.txt"));
        assert!(display.contains("Re-check"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = WhatstatError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("access denied"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = WhatstatError::unknown_format("hello world");
        assert!(err.to_string().contains("hello world"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let err = WhatstatError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        assert!(WhatstatError::file_not_found("x.txt").is_io());
        assert!(!WhatstatError::file_not_found("x.txt").is_fatal_parse());

        assert!(WhatstatError::EmptyTranscript.is_fatal_parse());
        assert!(WhatstatError::unknown_format("???").is_fatal_parse());
        assert!(WhatstatError::NoUsersFound.is_fatal_parse());
        assert!(!WhatstatError::SingleDaySpan.is_fatal_parse());
        assert!(!WhatstatError::SingleDaySpan.is_io());
    }

    #[test]
    fn test_error_debug() {
        let err = WhatstatError::EmptyTranscript;
        assert!(format!("{:?}", err).contains("EmptyTranscript"));
    }
}
