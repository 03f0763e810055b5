//! # whatstat
//!
//! A Rust library for parsing WhatsApp chat exports and computing per-user
//! and per-chat statistics.
//!
//! ## Overview
//!
//! WhatsApp exports a chat as a plain text log whose exact line shape
//! depends on the phone's operating system. whatstat turns such a log into
//! a validated message stream and derives aggregates from it:
//!
//! - message counts (total, per user, per hour/weekday/day)
//! - word frequencies with stopword filtering
//! - emoji frequencies
//! - conversation-start attribution per calendar day
//! - media placeholder counts
//! - most linked sites
//!
//! The pipeline is a single eager pass: raw text → logical lines → format
//! detection → structured [`Message`]s → [`ChatManager`] → [`Analyzer`].
//! Everything is immutable once built.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use whatstat::{Analyzer, ChatManager};
//!
//! fn main() -> whatstat::Result<()> {
//!     let manager = ChatManager::load("chats/holiday_group.txt")?;
//!     let analyzer = Analyzer::new(&manager);
//!
//!     println!("{} messages", analyzer.total_message_count());
//!     for (user, count) in analyzer.user_message_count() {
//!         println!("{user}: {count}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## In-memory parsing
//!
//! Content that is already in memory parses the same way:
//!
//! ```rust
//! use whatstat::ChatManager;
//!
//! // First line is the export's metadata header and is skipped.
//! let raw = "chat with Alice\n[01.01.23, 10:00:00] Alice: Hello world\n";
//! let manager = ChatManager::parse_str(raw)?;
//! assert_eq!(manager.messages().len(), 1);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`chat`] — [`ChatManager`] aggregate root and [`User`](chat::User)
//! - [`stats`] — [`Analyzer`] and the stable [`FrequencyCounter`](stats::FrequencyCounter)
//! - [`format`] — [`ExportFormat`](format::ExportFormat) detection
//! - [`transcript`] — file loading and logical-line reconstruction
//! - [`parser`] — [`MessageParser`](parser::MessageParser), [`ParseOptions`](parser::ParseOptions)
//! - [`text`] — word/emoji/link extraction
//! - [`stopwords`] — the default German stopword list
//! - [`report`] — console and HTML rendering of the aggregates
//! - [`error`] — unified error type ([`WhatstatError`], [`Result`])

pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod report;
pub mod stats;
pub mod stopwords;
pub mod text;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use chat::{ChatManager, User};
pub use error::{Result, WhatstatError};
pub use message::Message;
pub use stats::Analyzer;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use whatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chat::{ChatManager, User};
    pub use crate::error::{Result, WhatstatError};
    pub use crate::format::ExportFormat;
    pub use crate::message::Message;
    pub use crate::parser::{MessageParser, ParseOptions};
    pub use crate::stats::{Analyzer, FrequencyCounter};
    pub use crate::text::TextExtractor;
}
