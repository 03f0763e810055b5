//! Word, emoji, and link extraction from message bodies.
//!
//! [`TextExtractor`] tokenizes a body into lowercase words (with and without
//! stopword filtering) and into colon-delimited emoji name tokens like
//! `:smiling_face:`. The stopword set is injected at construction; nothing
//! here reads global state.
//!
//! Tokenization keeps only ASCII letters, the lowercase German umlauts, and
//! whitespace before splitting; everything else (digits, punctuation,
//! emoji) is removed from the word stream. Emoji extraction works the other
//! way around: ordinary characters are removed and whatever remains is
//! matched against the emoji table.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

use crate::stopwords::german_stopwords;

/// Characters that can appear in words: ASCII letters, lowercase umlauts,
/// whitespace. Everything else is stripped before splitting.
static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-zäöü\s]").expect("static pattern"));

/// Ordinary characters removed before emoji matching.
static PLAIN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9\.,:!?\s]").expect("static pattern"));

/// Shape of a canonical emoji name token.
static EMOJI_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[a-z_]+:$").expect("static pattern"));

/// URL candidates inside a message body.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("static pattern"));

/// Tokenizes message bodies into word and emoji-name lists.
///
/// # Example
///
/// ```rust
/// use whatstat::text::TextExtractor;
///
/// let extractor = TextExtractor::new();
/// let words = extractor.words("Hallo Welt, wie geht's?");
/// assert_eq!(words, vec!["hallo", "welt", "wie", "gehts"]);
///
/// // "wie" is a stopword, "hallo" is not
/// let filtered = extractor.words_filtered("Hallo wie");
/// assert_eq!(filtered, vec!["hallo"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextExtractor {
    stopwords: HashSet<String>,
}

impl TextExtractor {
    /// Creates an extractor with the default German stopword set.
    pub fn new() -> Self {
        Self {
            stopwords: german_stopwords().iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    /// Creates an extractor with a custom stopword set.
    pub fn with_stopwords(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }

    /// Returns the active stopword set.
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Extracts lowercase word tokens from a body.
    ///
    /// Strips every character outside `[A-Za-zäöü\s]`, splits on single
    /// spaces, and drops empty tokens.
    pub fn words(&self, body: &str) -> Vec<String> {
        let cleaned = NON_LETTER.replace_all(body, "");
        cleaned
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Like [`words`](Self::words), with stopwords removed.
    pub fn words_filtered(&self, body: &str) -> Vec<String> {
        let cleaned = NON_LETTER.replace_all(body, "");
        cleaned
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.contains(w.as_str()))
            .collect()
    }

    /// Extracts emoji name tokens (`:smiling_face:`) from a body, in order
    /// of appearance.
    ///
    /// Returns `None` when no token is found, never an empty list.
    pub fn emoji_tokens(&self, body: &str) -> Option<Vec<String>> {
        let stripped = PLAIN_CHARS.replace_all(body, "");
        let mut tokens = Vec::new();

        for grapheme in stripped.graphemes(true) {
            if let Some(token) = shortcode_token(grapheme) {
                tokens.push(token);
            } else {
                // Sequences the emoji table doesn't know as a whole
                // (e.g. with a skin-tone modifier) still yield their
                // known components.
                let mut buf = [0u8; 4];
                for ch in grapheme.chars() {
                    if let Some(token) = shortcode_token(ch.encode_utf8(&mut buf)) {
                        tokens.push(token);
                    }
                }
            }
        }

        if tokens.is_empty() { None } else { Some(tokens) }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps one emoji candidate to its `:name:` token.
fn shortcode_token(candidate: &str) -> Option<String> {
    let emoji = emojis::get(candidate)
        .or_else(|| emojis::get(candidate.trim_end_matches('\u{fe0f}')))?;
    let code = emoji.shortcode()?;
    let token = format!(":{code}:");
    EMOJI_NAME.is_match(&token).then_some(token)
}

/// Extracts the hostnames of all URLs in a body, with a leading `www.`
/// prefix removed.
pub fn link_hosts(body: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(body)
        .filter_map(|m| Url::parse(m.as_str()).ok())
        .filter_map(|u| u.host_str().map(str::to_owned))
        .map(|host| match host.strip_prefix("www.") {
            Some(bare) => bare.to_owned(),
            None => host,
        })
        .collect()
}

/// Converts an emoji name token back to its glyph.
///
/// Unknown tokens are returned unchanged.
pub fn emojize(token: &str) -> String {
    emojis::get_by_shortcode(token.trim_matches(':'))
        .map(|e| e.as_str().to_owned())
        .unwrap_or_else(|| token.to_owned())
}
