//! Chat aggregate: users and the [`ChatManager`] root.
//!
//! The manager owns the full parsed message sequence, the detected export
//! format, and the per-sender [`User`] records. It is built once from a
//! transcript and read-only afterwards; all statistics are computed from
//! its accessors.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, WhatstatError};
use crate::format::ExportFormat;
use crate::message::Message;
use crate::parser::{MessageParser, ParseOptions};
use crate::transcript;

/// One chat participant and their messages, in transcript order.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    username: String,
    messages: Vec<Message>,
}

impl User {
    /// Returns the user's chat name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the user's messages in transcript order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns how many messages this user sent (media included).
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Eq for User {}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.username.cmp(&other.username)
    }
}

/// The parsed chat: messages, detected format, and users.
///
/// # Example
///
/// ```rust,no_run
/// use whatstat::ChatManager;
///
/// let manager = ChatManager::load("chats/holiday_group.txt")?;
/// println!("{} messages from {:?}", manager.messages().len(), manager.usernames());
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChatManager {
    format: ExportFormat,
    messages: Vec<Message>,
    usernames: Vec<String>,
    users: Vec<User>,
}

impl ChatManager {
    /// Loads and parses a transcript file with default options.
    ///
    /// # Errors
    ///
    /// [`WhatstatError::FileNotFound`] / [`WhatstatError::Io`] for read
    /// failures, plus everything [`from_lines`](Self::from_lines) returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &ParseOptions::default())
    }

    /// Loads a transcript file with custom parse options.
    pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let lines = transcript::read(path.as_ref())?;
        Self::from_lines_with(lines, options)
    }

    /// Parses a raw export string, applying the same header and
    /// left-to-right-mark stripping as [`load`](Self::load).
    pub fn parse_str(raw: &str) -> Result<Self> {
        Self::parse_str_with(raw, &ParseOptions::default())
    }

    /// Parses a raw export string with custom parse options.
    pub fn parse_str_with(raw: &str, options: &ParseOptions) -> Result<Self> {
        Self::from_lines_with(transcript::strip(raw), options)
    }

    /// Builds a chat from an already-stripped line sequence (no header,
    /// no left-to-right marks).
    ///
    /// # Errors
    ///
    /// - [`WhatstatError::EmptyTranscript`] when `lines` is empty
    /// - [`WhatstatError::UnknownFormat`] when the first line matches
    ///   neither export convention
    /// - [`WhatstatError::NoUsersFound`] when no line yields a message
    pub fn from_lines(lines: Vec<String>) -> Result<Self> {
        Self::from_lines_with(lines, &ParseOptions::default())
    }

    /// Builds a chat from an already-stripped line sequence with custom
    /// parse options.
    pub fn from_lines_with(lines: Vec<String>, options: &ParseOptions) -> Result<Self> {
        let first = lines.first().ok_or(WhatstatError::EmptyTranscript)?;
        let format = ExportFormat::detect(first)?;

        let logical = transcript::join_lines(&lines, format)?;
        let parser = MessageParser::with_options(format, options);
        let messages = parser.parse_lines(logical.iter().map(String::as_str));

        if messages.is_empty() {
            return Err(WhatstatError::NoUsersFound);
        }

        let usernames: Vec<String> = messages
            .iter()
            .map(|m| m.sender.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let users = usernames
            .iter()
            .map(|name| User {
                username: name.clone(),
                messages: messages
                    .iter()
                    .filter(|m| m.sender == *name)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(Self {
            format,
            messages,
            usernames,
            users,
        })
    }

    /// Returns the detected export format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Returns all parsed messages in transcript order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the users, sorted by username.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the distinct usernames, sorted.
    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// Looks up a user by name.
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }
}
