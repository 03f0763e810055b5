//! Transcript loading and logical-line reconstruction.
//!
//! A WhatsApp export is a plain UTF-8 text file. Its first physical line is
//! platform metadata ("Messages to this chat are encrypted...") and every
//! line may carry left-to-right mark characters (U+200E). Both are stripped
//! before parsing. A single message can span several physical lines; a line
//! that does not start with the active format's timestamp prefix belongs to
//! the previous message and is re-joined with a single space.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, WhatstatError};
use crate::format::ExportFormat;

/// The left-to-right mark WhatsApp sprinkles into exports.
pub const LTR_MARK: char = '\u{200e}';

/// Reads a transcript file and returns its stripped line sequence.
///
/// # Errors
///
/// Returns [`WhatstatError::FileNotFound`] when the file does not exist
/// and [`WhatstatError::Io`] for any other read failure.
pub fn read(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            WhatstatError::file_not_found(path)
        } else {
            WhatstatError::Io(e)
        }
    })?;
    Ok(strip(&raw))
}

/// Strips the left-to-right marks and the metadata header line from a raw
/// export, returning the remaining lines.
///
/// The result may be empty; [`join_lines`] and the
/// [`ChatManager`](crate::ChatManager) constructors report that as
/// [`WhatstatError::EmptyTranscript`].
pub fn strip(raw: &str) -> Vec<String> {
    let cleaned: String = raw.chars().filter(|&c| c != LTR_MARK).collect();
    cleaned.lines().skip(1).map(str::to_owned).collect()
}

/// Reassembles multi-line messages into one logical line per message.
///
/// The first line always starts a new logical line. Every later line that
/// does not match the format's timestamp prefix is appended to the previous
/// logical line, separated by a single space. Single forward pass, no
/// lookahead.
///
/// # Errors
///
/// Returns [`WhatstatError::EmptyTranscript`] if `lines` is empty.
pub fn join_lines(lines: &[String], format: ExportFormat) -> Result<Vec<String>> {
    if lines.is_empty() {
        return Err(WhatstatError::EmptyTranscript);
    }

    let prefix = Regex::new(format.timestamp_pattern()).expect("static pattern");
    let mut logical: Vec<String> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if i == 0 || prefix.is_match(line) {
            logical.push(line.clone());
        } else if let Some(last) = logical.last_mut() {
            last.push(' ');
            last.push_str(line);
        }
    }

    Ok(logical)
}
