//! Logical-line parsing into [`Message`] records.
//!
//! One composite pattern per format captures, in order: the prefix region
//! (timestamp, separator, sender name terminated by a colon), an optional
//! media placeholder anchored to the end of the line, and the remaining
//! body text. A logical line whose sender cannot be isolated — typically a
//! system notice like "Alice hat die Gruppe erstellt" — yields no message
//! and is silently dropped.
//!
//! The media placeholder words ("ausgeschlossen", "weggelassen" in German
//! exports) are configuration, not something re-derived from the data;
//! pass different words via [`ParseOptions`] for other export locales.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::format::ExportFormat;
use crate::message::Message;
use crate::text::TextExtractor;

/// Default placeholder words marking a media body in German exports.
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &["ausgeschlossen", "weggelassen"];

/// Parser configuration: media marker words and the stopword set.
///
/// # Example
///
/// ```rust
/// use whatstat::parser::ParseOptions;
///
/// let options = ParseOptions::new()
///     .with_media_markers(["omitted"]);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Words that mark a body as a media placeholder.
    pub media_markers: Vec<String>,

    /// Stopword set for the filtered word lists; `None` uses the default
    /// German set.
    pub stopwords: Option<HashSet<String>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            media_markers: DEFAULT_MEDIA_MARKERS.iter().map(|m| (*m).to_owned()).collect(),
            stopwords: None,
        }
    }
}

impl ParseOptions {
    /// Creates options with the default marker words and stopword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the media marker words.
    #[must_use]
    pub fn with_media_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.media_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the stopword set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: HashSet<String>) -> Self {
        self.stopwords = Some(stopwords);
        self
    }
}

/// Parses logical lines of one detected format into messages.
///
/// # Example
///
/// ```rust
/// use whatstat::format::ExportFormat;
/// use whatstat::parser::MessageParser;
///
/// let parser = MessageParser::new(ExportFormat::Ios);
/// let msg = parser
///     .parse_line("[01.01.23, 10:00:00] Alice: Hello world")
///     .unwrap();
/// assert_eq!(msg.sender(), "Alice");
/// assert_eq!(msg.words().unwrap(), ["hello", "world"]);
/// ```
pub struct MessageParser {
    format: ExportFormat,
    pattern: Regex,
    extractor: TextExtractor,
}

impl MessageParser {
    /// Creates a parser for the given format with default options.
    pub fn new(format: ExportFormat) -> Self {
        Self::with_options(format, &ParseOptions::default())
    }

    /// Creates a parser with custom marker words and stopwords.
    pub fn with_options(format: ExportFormat, options: &ParseOptions) -> Self {
        let extractor = match &options.stopwords {
            Some(set) => TextExtractor::with_stopwords(set.clone()),
            None => TextExtractor::new(),
        };
        Self {
            format,
            pattern: build_pattern(format, &options.media_markers),
            extractor,
        }
    }

    /// Returns the format this parser was built for.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Parses one logical line.
    ///
    /// Returns `None` when the sender cannot be isolated (system notice)
    /// or when the timestamp, despite matching the pattern shape, is not a
    /// real calendar date. Both cases drop the line from the stream.
    pub fn parse_line(&self, line: &str) -> Option<Message> {
        let caps = self.pattern.captures(line)?;

        let sender = caps.name("sender")?.as_str().trim().to_owned();
        let stamp = caps.name("stamp")?.as_str();
        let timestamp =
            NaiveDateTime::parse_from_str(stamp, self.format.timestamp_template()).ok()?;

        let media_type = caps.name("media").map(|m| m.as_str().to_owned());
        let body = match caps.name("mediaregion") {
            Some(region) => region.as_str().to_owned(),
            None => caps.name("body").map_or_else(String::new, |m| m.as_str().to_owned()),
        };

        // Media placeholders carry no words; their statistics come from
        // the media counters instead.
        let (words, words_filtered) = if media_type.is_none() {
            (
                Some(self.extractor.words(&body)),
                Some(self.extractor.words_filtered(&body)),
            )
        } else {
            (None, None)
        };
        let emoji_tokens = self.extractor.emoji_tokens(&body);

        Some(Message {
            sender,
            timestamp,
            body,
            media_type,
            words,
            words_filtered,
            emoji_tokens,
        })
    }

    /// Parses a sequence of logical lines, dropping the ones without a
    /// sender.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Vec<Message>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}

/// Builds the composite message pattern for a format.
fn build_pattern(format: ExportFormat, markers: &[String]) -> Regex {
    let prefix = format!(
        r"^(?P<prefix>(?P<stamp>{stamp}){sep}(?P<sender>.+?):\s?)",
        stamp = format.stamp_fragment(),
        sep = format.separator_fragment(),
    );

    // No markers configured: media detection is off and the pattern has no
    // media branch. Captures::name returns None for the absent groups.
    let pattern = if markers.is_empty() {
        format!(r"{prefix}(?P<body>.*)$")
    } else {
        let alternation = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        format!(
            r"{prefix}(?:(?P<mediaregion>\W?(?P<media>\w+)\s(?:{alternation})>?)$)?(?P<body>.*)$"
        )
    };

    Regex::new(&pattern).expect("markers are escaped, fragments are static")
}
