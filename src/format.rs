//! Export format detection.
//!
//! WhatsApp writes its text exports differently depending on the phone's
//! operating system. Each [`ExportFormat`] variant carries the timestamp
//! regex pattern, the chrono parse template, and the prefix structure for
//! one of the two conventions. The format is detected once from the first
//! line of the transcript and stays fixed for the whole run.
//!
//! Recognized conventions:
//! - iOS: `[dd.mm.yy, HH:MM:SS] Sender: body`
//! - Android: `dd.mm.yy, HH:MM - Sender: body` (seconds omitted)

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WhatstatError};

/// The detected transcript convention.
///
/// Governs the timestamp shape, the prefix separator, and the timestamp
/// parse template for every line of a transcript.
///
/// # Example
///
/// ```rust
/// use whatstat::format::ExportFormat;
///
/// let format = ExportFormat::detect("[01.01.23, 10:00:00] Alice: Hello")?;
/// assert_eq!(format, ExportFormat::Ios);
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Bracketed timestamp with seconds: `[01.01.23, 10:00:00] Sender: body`
    Ios,
    /// Bare timestamp without seconds: `01.01.23, 10:00 - Sender: body`
    Android,
}

impl ExportFormat {
    /// Returns the anchored timestamp-prefix pattern for this format.
    ///
    /// A physical line that does not match this pattern is a continuation
    /// of the previous logical line.
    pub fn timestamp_pattern(self) -> &'static str {
        match self {
            ExportFormat::Ios => r"^\[\d{2}\.\d{2}\.\d{2},\s\d{2}:\d{2}:\d{2}\]",
            ExportFormat::Android => r"^\d{2}\.\d{2}\.\d{2},\s\d{2}:\d{2}",
        }
    }

    /// Returns the chrono template matching [`timestamp_pattern`](Self::timestamp_pattern).
    pub fn timestamp_template(self) -> &'static str {
        match self {
            ExportFormat::Ios => "[%d.%m.%y, %H:%M:%S]",
            ExportFormat::Android => "%d.%m.%y, %H:%M",
        }
    }

    /// Returns the timestamp pattern without the line-start anchor, for
    /// embedding into the composite message pattern.
    pub(crate) fn stamp_fragment(self) -> &'static str {
        match self {
            ExportFormat::Ios => r"\[\d{2}\.\d{2}\.\d{2},\s\d{2}:\d{2}:\d{2}\]",
            ExportFormat::Android => r"\d{2}\.\d{2}\.\d{2},\s\d{2}:\d{2}",
        }
    }

    /// Returns the separator between timestamp and sender, as a regex
    /// fragment. iOS uses a single space, Android a spaced dash.
    pub(crate) fn separator_fragment(self) -> &'static str {
        match self {
            ExportFormat::Ios => r"\s",
            ExportFormat::Android => r"\s-\s",
        }
    }

    /// Returns both format variants.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Ios, ExportFormat::Android]
    }

    /// Detects the transcript format from its first logical line.
    ///
    /// The two timestamp patterns are mutually exclusive (iOS requires the
    /// opening bracket); the first one to match wins.
    ///
    /// # Errors
    ///
    /// Returns [`WhatstatError::UnknownFormat`] if neither pattern matches.
    /// This is fatal for the whole pipeline: no format, no parsing.
    pub fn detect(first_line: &str) -> Result<ExportFormat> {
        for &format in ExportFormat::all() {
            let regex = Regex::new(format.timestamp_pattern()).expect("static pattern");
            if regex.is_match(first_line) {
                return Ok(format);
            }
        }
        Err(WhatstatError::unknown_format(first_line))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Ios => write!(f, "iOS"),
            ExportFormat::Android => write!(f, "Android"),
        }
    }
}
