//! Textual and HTML rendering of the computed statistics.
//!
//! Presentation only: everything here consumes [`Analyzer`] output and
//! formats it. No aggregate is computed in this module, and single-day
//! transcripts (where the per-day average is undefined) are rendered with
//! the total over one day instead of failing.

use std::fmt::Write;

use crate::stats::Analyzer;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Renders the console report.
pub fn render_console(analyzer: &Analyzer<'_>, top_n: usize) -> String {
    let mut out = String::new();
    let manager = analyzer.manager();

    let _ = writeln!(out, "Chat report ({} export)", manager.format());
    let _ = writeln!(out, "Participants: {}", manager.usernames().join(", "));
    let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let _ = writeln!(out, "Total messages: {}", analyzer.total_message_count());
    match analyzer.chat_avg_msg_per_day() {
        Ok(avg) => {
            let _ = writeln!(out, "Messages per day: {:.1}", avg);
        }
        Err(_) => {
            // Single-day chat: treat the span as one day.
            let _ = writeln!(
                out,
                "Messages per day: {:.1} (single-day chat)",
                analyzer.total_message_count() as f64
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Messages per user:");
    for (user, count) in analyzer.user_message_count() {
        let _ = writeln!(out, "  {user}: {count}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Conversation starts (share of days):");
    for (user, percent) in analyzer.user_start_conversation() {
        let _ = writeln!(out, "  {user}: {percent:.1}%");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Media messages per user:");
    for (user, total) in analyzer.user_media_total() {
        let _ = writeln!(out, "  {user}: {total}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Most common words (stopwords excluded):");
    for (user, ranked) in analyzer.user_most_common_words(top_n) {
        let _ = writeln!(out, "  {user}:");
        for (rank, (word, count)) in ranked.iter().enumerate() {
            let _ = writeln!(out, "    {}. \"{word}\" ({count}x)", rank + 1);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Most common emojis (as text):");
    for (user, ranked) in analyzer.user_most_common_emojis(top_n, true) {
        let _ = writeln!(out, "  {user}:");
        for (rank, (emoji, count)) in ranked.iter().enumerate() {
            let _ = writeln!(out, "    {}. \"{emoji}\" ({count}x)", rank + 1);
        }
    }
    let _ = writeln!(out);

    let links = analyzer.most_common_links(top_n);
    if !links.is_empty() {
        let _ = writeln!(out, "Most linked sites:");
        for (host, count) in links {
            let _ = writeln!(out, "  {host}: {count}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Messages per weekday:");
    let by_weekday = analyzer.messages_by_weekday();
    for (label, count) in WEEKDAY_LABELS.iter().zip(by_weekday.iter()) {
        let _ = writeln!(out, "  {label}: {count}");
    }

    out
}

/// Renders the HTML report.
///
/// The layout mirrors the console report: one section per aggregate,
/// rendered as tables.
pub fn render_html(analyzer: &Analyzer<'_>, chat_name: &str, top_n: usize) -> String {
    let manager = analyzer.manager();
    let mut body = String::new();

    let _ = writeln!(
        body,
        "    <h1 id=\"title\">WhatsApp report for \"{}\"</h1>",
        escape(chat_name)
    );
    let _ = writeln!(
        body,
        "    <p>Participants: {}</p>",
        escape(&manager.usernames().join(", "))
    );

    let per_day = match analyzer.chat_avg_msg_per_day() {
        Ok(avg) => format!("{avg:.1}"),
        Err(_) => format!("{:.1} (single-day chat)", analyzer.total_message_count() as f64),
    };
    let _ = writeln!(body, "    <h2>Chat facts</h2>");
    let _ = writeln!(body, "    <table>");
    let _ = writeln!(
        body,
        "      <tr><td>Total messages</td><td>{}</td></tr>",
        analyzer.total_message_count()
    );
    let _ = writeln!(
        body,
        "      <tr><td>Messages per day</td><td>{per_day}</td></tr>"
    );
    let _ = writeln!(body, "    </table>");

    let _ = writeln!(body, "    <h2>Messages per user</h2>");
    let _ = writeln!(body, "    <table>");
    for (user, count) in analyzer.user_message_count() {
        let _ = writeln!(
            body,
            "      <tr><td>{}</td><td>{count}</td></tr>",
            escape(user)
        );
    }
    let _ = writeln!(body, "    </table>");

    let _ = writeln!(body, "    <h2>Conversation starts</h2>");
    let _ = writeln!(body, "    <table>");
    for (user, percent) in analyzer.user_start_conversation() {
        let _ = writeln!(
            body,
            "      <tr><td>{}</td><td>{percent:.1}%</td></tr>",
            escape(user)
        );
    }
    let _ = writeln!(body, "    </table>");

    let _ = writeln!(body, "    <h2>Most common words</h2>");
    for (user, ranked) in analyzer.user_most_common_words(top_n) {
        let _ = writeln!(body, "    <h3>{}</h3>", escape(user));
        let _ = writeln!(body, "    <table>");
        for (word, count) in ranked {
            let _ = writeln!(
                body,
                "      <tr><td>{}</td><td>{count}</td></tr>",
                escape(&word)
            );
        }
        let _ = writeln!(body, "    </table>");
    }

    let _ = writeln!(body, "    <h2>Most common emojis</h2>");
    for (user, ranked) in analyzer.user_most_common_emojis(top_n, false) {
        let _ = writeln!(body, "    <h3>{}</h3>", escape(user));
        let _ = writeln!(body, "    <table>");
        for (emoji, count) in ranked {
            let _ = writeln!(
                body,
                "      <tr><td>{}</td><td>{count}</td></tr>",
                escape(&emoji)
            );
        }
        let _ = writeln!(body, "    </table>");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    \
         <title>WhatsApp report</title>\n  </head>\n\n  <body style=\"font-family: sans-serif\">\n\
         {body}  </body>\n</html>\n"
    )
}

/// Minimal HTML escaping for user-controlled text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
