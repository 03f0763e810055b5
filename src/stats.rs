//! Aggregate statistics over a parsed chat.
//!
//! [`Analyzer`] borrows a [`ChatManager`] and exposes pure functions; no
//! state is cached between calls. Per-user results are keyed by username in
//! a `BTreeMap`, so iteration order is the users' total order and output is
//! deterministic.
//!
//! Every "most common" operation goes through the same
//! [`FrequencyCounter`], which breaks frequency ties by first appearance.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::{Datelike, NaiveDate, Timelike};

use crate::chat::ChatManager;
use crate::error::{Result, WhatstatError};
use crate::text::{emojize, link_hosts};

/// Frequency counter with stable, first-seen tie-breaking.
///
/// Items with equal counts rank in the order they were first added, so
/// top-n results are reproducible for any input order.
///
/// # Example
///
/// ```rust
/// use whatstat::stats::FrequencyCounter;
///
/// let mut counter = FrequencyCounter::new();
/// for word in ["b", "a", "b", "a", "c"] {
///     counter.add(word);
/// }
/// // "b" and "a" both occur twice; "b" was seen first.
/// assert_eq!(counter.most_common(2), vec![("b", 2), ("a", 2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter<T> {
    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> FrequencyCounter<T> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Counts one occurrence of `value`.
    pub fn add(&mut self, value: T) {
        if let Some(&pos) = self.index.get(&value) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(value.clone(), self.entries.len());
            self.entries.push((value, 1));
        }
    }

    /// Counts every occurrence from an iterator.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Returns the `n` most frequent values with their counts, ties broken
    /// by first appearance.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut ranked = self.entries.clone();
        // Stable sort: equal counts keep their first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Returns the total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Returns `true` if nothing was counted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Statistics over one parsed chat.
///
/// # Example
///
/// ```rust
/// use whatstat::{Analyzer, ChatManager};
///
/// let manager = ChatManager::from_lines(vec![
///     "[01.01.23, 10:00:00] Alice: Hello world".to_string(),
///     "[02.01.23, 09:00:00] Bob: Hello again".to_string(),
/// ])?;
/// let analyzer = Analyzer::new(&manager);
///
/// assert_eq!(analyzer.total_message_count(), 2);
/// assert_eq!(analyzer.user_message_count()["Alice"], 1);
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
pub struct Analyzer<'a> {
    manager: &'a ChatManager,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer over a parsed chat.
    pub fn new(manager: &'a ChatManager) -> Self {
        Self { manager }
    }

    /// Returns the underlying chat.
    pub fn manager(&self) -> &'a ChatManager {
        self.manager
    }

    /// Number of messages per user, media messages included.
    pub fn user_message_count(&self) -> BTreeMap<&'a str, usize> {
        self.manager
            .users()
            .iter()
            .map(|u| (u.username(), u.message_count()))
            .collect()
    }

    /// Total number of parsed messages in the chat.
    pub fn total_message_count(&self) -> usize {
        self.manager.messages().len()
    }

    /// All words each user ever wrote, flattened across their non-media
    /// messages, in transcript order.
    pub fn user_word_corpus(&self, include_stopwords: bool) -> BTreeMap<&'a str, Vec<&'a str>> {
        self.manager
            .users()
            .iter()
            .map(|u| {
                let words: Vec<&str> = u
                    .messages()
                    .iter()
                    .filter_map(|m| {
                        if include_stopwords {
                            m.words()
                        } else {
                            m.words_filtered()
                        }
                    })
                    .flatten()
                    .map(String::as_str)
                    .collect();
                (u.username(), words)
            })
            .collect()
    }

    /// Average number of words per message for each user.
    ///
    /// The denominator is the user's full message count, media messages
    /// included, while media messages contribute no words — media-heavy
    /// users therefore show a lower average.
    pub fn user_avg_word_count(&self) -> BTreeMap<&'a str, f64> {
        let corpus = self.user_word_corpus(true);
        self.manager
            .users()
            .iter()
            .map(|u| {
                let words = corpus.get(u.username()).map_or(0, Vec::len);
                (u.username(), words as f64 / u.message_count() as f64)
            })
            .collect()
    }

    /// Average number of messages per day over the chat's lifetime.
    ///
    /// The day span is the calendar-day difference between the first and
    /// the last message.
    ///
    /// # Errors
    ///
    /// Returns [`WhatstatError::SingleDaySpan`] when first and last message
    /// share a calendar date; callers decide how to render single-day
    /// chats.
    pub fn chat_avg_msg_per_day(&self) -> Result<f64> {
        let messages = self.manager.messages();
        let (first, last) = match (messages.first(), messages.last()) {
            (Some(first), Some(last)) => (first, last),
            // A ChatManager is never built without messages.
            _ => return Err(WhatstatError::SingleDaySpan),
        };

        let span = (last.date() - first.date()).num_days();
        if span == 0 {
            return Err(WhatstatError::SingleDaySpan);
        }
        Ok(self.total_message_count() as f64 / span as f64)
    }

    /// The `n` most frequently linked hostnames across all messages,
    /// `www.` prefixes stripped.
    pub fn most_common_links(&self, n: usize) -> Vec<(String, usize)> {
        let mut counter = FrequencyCounter::new();
        for msg in self.manager.messages() {
            counter.extend(link_hosts(msg.body()));
        }
        counter.most_common(n)
    }

    /// The `n` most frequent stopword-filtered words per user.
    pub fn user_most_common_words(&self, n: usize) -> BTreeMap<&'a str, Vec<(String, usize)>> {
        self.user_word_corpus(false)
            .into_iter()
            .map(|(username, words)| {
                let mut counter = FrequencyCounter::new();
                counter.extend(words);
                let ranked = counter
                    .most_common(n)
                    .into_iter()
                    .map(|(word, count)| (word.to_owned(), count))
                    .collect();
                (username, ranked)
            })
            .collect()
    }

    /// Share of days on which each user started the conversation.
    ///
    /// The author of the chronologically first message of each calendar
    /// date gets one start; the shares are percentages of the number of
    /// distinct days with messages and sum to 100 across users.
    pub fn user_start_conversation(&self) -> BTreeMap<&'a str, f64> {
        let mut starts: HashMap<&str, usize> = HashMap::new();
        let mut last_date: Option<NaiveDate> = None;
        let mut day_total = 0usize;

        for msg in self.manager.messages() {
            let date = msg.date();
            if last_date != Some(date) {
                last_date = Some(date);
                day_total += 1;
                *starts.entry(msg.sender()).or_insert(0) += 1;
            }
        }

        self.manager
            .users()
            .iter()
            .map(|u| {
                let count = starts.get(u.username()).copied().unwrap_or(0);
                (u.username(), 100.0 * count as f64 / day_total as f64)
            })
            .collect()
    }

    /// The `n` most frequent emojis per user.
    ///
    /// With `as_text` the entries are bare shortcode names (`joy`),
    /// otherwise the displayable glyphs. Counting happens after the
    /// conversion, so ties follow the converted token's first appearance.
    pub fn user_most_common_emojis(
        &self,
        n: usize,
        as_text: bool,
    ) -> BTreeMap<&'a str, Vec<(String, usize)>> {
        self.manager
            .users()
            .iter()
            .map(|u| {
                let mut counter = FrequencyCounter::new();
                let tokens = u
                    .messages()
                    .iter()
                    .filter_map(|m| m.emoji_tokens())
                    .flatten();
                for token in tokens {
                    let rendered = if as_text {
                        token.replace(':', "")
                    } else {
                        emojize(token)
                    };
                    counter.add(rendered);
                }
                (u.username(), counter.most_common(n))
            })
            .collect()
    }

    /// The `n` most frequent media placeholder words per user.
    pub fn user_media_counts(&self, n: usize) -> BTreeMap<&'a str, Vec<(String, usize)>> {
        self.manager
            .users()
            .iter()
            .map(|u| {
                let mut counter = FrequencyCounter::new();
                counter.extend(
                    u.messages()
                        .iter()
                        .filter_map(|m| m.media_type())
                        .map(str::to_owned),
                );
                (u.username(), counter.most_common(n))
            })
            .collect()
    }

    /// Total number of media messages per user.
    pub fn user_media_total(&self) -> BTreeMap<&'a str, usize> {
        self.manager
            .users()
            .iter()
            .map(|u| {
                let total = u.messages().iter().filter(|m| m.is_media()).count();
                (u.username(), total)
            })
            .collect()
    }

    /// Message count per hour of day (index 0 = midnight hour).
    pub fn messages_by_hour(&self) -> [usize; 24] {
        let mut hours = [0usize; 24];
        for msg in self.manager.messages() {
            hours[msg.timestamp().hour() as usize] += 1;
        }
        hours
    }

    /// Message count per weekday (index 0 = Monday).
    pub fn messages_by_weekday(&self) -> [usize; 7] {
        let mut days = [0usize; 7];
        for msg in self.manager.messages() {
            days[msg.timestamp().weekday().num_days_from_monday() as usize] += 1;
        }
        days
    }

    /// Message count per calendar date, ascending. Days without messages
    /// do not appear.
    pub fn messages_per_day(&self) -> BTreeMap<NaiveDate, usize> {
        let mut days = BTreeMap::new();
        for msg in self.manager.messages() {
            *days.entry(msg.date()).or_insert(0) += 1;
        }
        days
    }
}
