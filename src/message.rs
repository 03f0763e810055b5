//! The parsed message record.
//!
//! [`Message`] is the central entity of the pipeline. The parser builds one
//! per logical line whose sender could be isolated; lines without a sender
//! (system notices like "X joined the group") are never materialized.
//!
//! # Field invariants
//!
//! - `media_type` is `Some` only when the body is a media placeholder, not
//!   real text.
//! - A media message carries no word lists: `media_type.is_some()` implies
//!   `words == None` and `words_filtered == None`.
//! - `emoji_tokens` is `None` when the body contains no emoji, never an
//!   empty list.
//!
//! Messages are created once during parsing and immutable afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One parsed chat message.
///
/// # Example
///
/// ```rust
/// use whatstat::ChatManager;
///
/// let manager = ChatManager::from_lines(vec![
///     "[01.01.23, 10:00:00] Alice: Hello world".to_string(),
/// ])?;
/// let msg = &manager.messages()[0];
/// assert_eq!(msg.sender(), "Alice");
/// assert_eq!(msg.body(), "Hello world");
/// assert!(msg.media_type().is_none());
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// When the message was sent. Exports carry no timezone.
    pub timestamp: NaiveDateTime,

    /// Message content with the timestamp/sender prefix stripped. For a
    /// media message this is the matched placeholder region.
    pub body: String,

    /// The placeholder word when the body is a media marker
    /// (e.g. `Bild` from "Bild weggelassen").
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media_type: Option<String>,

    /// Lowercase word tokens of the body. `None` for media messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub words: Option<Vec<String>>,

    /// [`words`](Self::words) with stopwords removed. `None` for media
    /// messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub words_filtered: Option<Vec<String>>,

    /// Emoji name tokens (`:smiling_face:`) in order of appearance.
    /// `None` when the body contains none.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub emoji_tokens: Option<Vec<String>>,
}

impl Message {
    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the send timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the send timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the media placeholder word, if this is a media message.
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Returns the word tokens, if this message carries text.
    pub fn words(&self) -> Option<&[String]> {
        self.words.as_deref()
    }

    /// Returns the stopword-filtered word tokens, if this message
    /// carries text.
    pub fn words_filtered(&self) -> Option<&[String]> {
        self.words_filtered.as_deref()
    }

    /// Returns the emoji name tokens, if any were found.
    pub fn emoji_tokens(&self) -> Option<&[String]> {
        self.emoji_tokens.as_deref()
    }

    /// Returns `true` if this message is a media placeholder.
    pub fn is_media(&self) -> bool {
        self.media_type.is_some()
    }
}
