//! End-to-end tests for the parsing and statistics pipeline.

use std::fs;

use whatstat::parser::ParseOptions;
use whatstat::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

fn ios_lines() -> Vec<String> {
    vec![
        "[01.01.23, 10:00:00] Alice: Hello world".to_string(),
        "[01.01.23, 10:05:00] Bob: <Medien ausgeschlossen>".to_string(),
        "[02.01.23, 09:00:00] Alice: Hi again".to_string(),
    ]
}

fn android_raw() -> String {
    "header: messages are end-to-end encrypted\n\
     01.01.23, 10:00 - Alice: Guten Morgen zusammen\n\
     01.01.23, 10:05 - Bob: Servus! Kaffee?\n\
     noch eine Zeile ohne Zeitstempel\n\
     02.01.23, 08:00 - Alice: <Medien ausgeschlossen>\n"
        .to_string()
}

// ============================================================================
// Core scenarios
// ============================================================================

#[test]
fn ios_transcript_counts_and_media() {
    let manager = ChatManager::from_lines(ios_lines()).unwrap();
    let analyzer = Analyzer::new(&manager);

    assert_eq!(analyzer.total_message_count(), 3);

    let counts = analyzer.user_message_count();
    assert_eq!(counts["Alice"], 2);
    assert_eq!(counts["Bob"], 1);

    // Bob's message is a media placeholder: counted, but wordless.
    let bob = manager.user("Bob").unwrap();
    assert!(bob.messages()[0].is_media());
    assert!(bob.messages()[0].words().is_none());
    assert!(analyzer.user_word_corpus(true)["Bob"].is_empty());

    // Alice wrote the first message of both days.
    let starts = analyzer.user_start_conversation();
    assert!((starts["Alice"] - 100.0).abs() < f64::EPSILON);
    assert!((starts["Bob"] - 0.0).abs() < f64::EPSILON);
}

#[test]
fn continuation_line_joins_previous_message() {
    let lines = vec![
        "[01.01.23, 10:00:00] Alice: first part".to_string(),
        "second part".to_string(),
        "[01.01.23, 10:01:00] Bob: reply".to_string(),
    ];
    let manager = ChatManager::from_lines(lines).unwrap();
    assert_eq!(manager.messages().len(), 2);
    assert_eq!(manager.messages()[0].body(), "first part second part");
}

#[test]
fn garbage_first_line_is_fatal() {
    let err = ChatManager::from_lines(vec!["complete nonsense".to_string()]).unwrap_err();
    assert!(matches!(err, WhatstatError::UnknownFormat { .. }));
}

#[test]
fn single_day_transcript_has_no_per_day_average() {
    let manager = ChatManager::from_lines(vec![
        "[01.01.23, 10:00:00] Alice: eins".to_string(),
        "[01.01.23, 22:00:00] Bob: zwei".to_string(),
    ])
    .unwrap();
    let analyzer = Analyzer::new(&manager);
    assert!(matches!(
        analyzer.chat_avg_msg_per_day(),
        Err(WhatstatError::SingleDaySpan)
    ));
}

#[test]
fn empty_transcript_is_fatal() {
    assert!(matches!(
        ChatManager::from_lines(vec![]),
        Err(WhatstatError::EmptyTranscript)
    ));
    // A raw export with only the header line is empty too.
    assert!(matches!(
        ChatManager::parse_str("only a header\n"),
        Err(WhatstatError::EmptyTranscript)
    ));
}

// ============================================================================
// Invariants across formats
// ============================================================================

#[test]
fn user_counts_sum_to_total() {
    for manager in [
        ChatManager::from_lines(ios_lines()).unwrap(),
        ChatManager::parse_str(&android_raw()).unwrap(),
    ] {
        let analyzer = Analyzer::new(&manager);
        let sum: usize = analyzer.user_message_count().values().sum();
        assert_eq!(sum, analyzer.total_message_count());
    }
}

#[test]
fn media_messages_never_carry_words() {
    let manager = ChatManager::parse_str(&android_raw()).unwrap();
    for msg in manager.messages() {
        if msg.is_media() {
            assert!(msg.words().is_none());
            assert!(msg.words_filtered().is_none());
        } else {
            assert!(msg.words().is_some());
        }
    }
}

#[test]
fn start_conversation_percentages_sum_to_100() {
    let manager = ChatManager::parse_str(&android_raw()).unwrap();
    let analyzer = Analyzer::new(&manager);
    let sum: f64 = analyzer.user_start_conversation().values().sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn most_common_respects_cap_and_excludes_stopwords() {
    let lines = vec![
        "[01.01.23, 10:00:00] Alice: kaffee tee wasser kaffee tee kaffee und und und".to_string(),
    ];
    let manager = ChatManager::from_lines(lines).unwrap();
    let analyzer = Analyzer::new(&manager);

    let ranked = &analyzer.user_most_common_words(2)["Alice"];
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0], ("kaffee".to_owned(), 3));
    assert_eq!(ranked[1], ("tee".to_owned(), 2));
    assert!(ranked.iter().all(|(w, _)| w != "und"));
}

#[test]
fn equal_frequency_words_rank_by_first_appearance() {
    let lines = vec![
        "[01.01.23, 10:00:00] Alice: zebra apfel zebra apfel".to_string(),
    ];
    let manager = ChatManager::from_lines(lines).unwrap();
    let analyzer = Analyzer::new(&manager);
    let ranked = &analyzer.user_most_common_words(5)["Alice"];
    assert_eq!(ranked[0].0, "zebra");
    assert_eq!(ranked[1].0, "apfel");
    assert_eq!(ranked[0].1, ranked[1].1);
}

// ============================================================================
// Android format details
// ============================================================================

#[test]
fn android_transcript_parses() {
    let manager = ChatManager::parse_str(&android_raw()).unwrap();
    assert_eq!(manager.format(), ExportFormat::Android);
    assert_eq!(manager.messages().len(), 3);

    // The orphan line was appended to Bob's message.
    assert_eq!(
        manager.messages()[1].body(),
        "Servus! Kaffee? noch eine Zeile ohne Zeitstempel"
    );

    assert_eq!(manager.messages()[2].media_type(), Some("Medien"));
}

#[test]
fn ltr_marks_are_stripped() {
    let raw = "header\n\u{200e}[01.01.23, 10:00:00] Alice: \u{200e}Bild weggelassen\n";
    let manager = ChatManager::parse_str(raw).unwrap();
    assert_eq!(manager.messages().len(), 1);
    assert_eq!(manager.messages()[0].media_type(), Some("Bild"));
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    let mut raw = String::from("export header line\n");
    for line in ios_lines() {
        raw.push_str(&line);
        raw.push('\n');
    }
    fs::write(&path, raw).unwrap();

    let manager = ChatManager::load(&path).unwrap();
    assert_eq!(manager.messages().len(), 3);
    assert_eq!(manager.format(), ExportFormat::Ios);
}

#[test]
fn load_missing_file() {
    let err = ChatManager::load("/no/such/chat.txt").unwrap_err();
    assert!(matches!(err, WhatstatError::FileNotFound { .. }));
    assert!(err.is_io());
}

// ============================================================================
// Options injection
// ============================================================================

#[test]
fn custom_stopword_set_is_honored() {
    let stopwords: std::collections::HashSet<String> =
        ["kaffee".to_owned()].into_iter().collect();
    let options = ParseOptions::new().with_stopwords(stopwords);
    let manager = ChatManager::from_lines_with(
        vec!["[01.01.23, 10:00:00] Alice: kaffee und tee".to_string()],
        &options,
    )
    .unwrap();
    let analyzer = Analyzer::new(&manager);
    let ranked = &analyzer.user_most_common_words(5)["Alice"];
    let words: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, ["und", "tee"]);
}

#[test]
fn custom_media_markers_are_honored() {
    let options = ParseOptions::new().with_media_markers(["omitted"]);
    let manager = ChatManager::from_lines_with(
        vec!["[01.01.23, 10:00:00] Alice: <Media omitted>".to_string()],
        &options,
    )
    .unwrap();
    assert_eq!(manager.messages()[0].media_type(), Some("Media"));
}

// ============================================================================
// Emojis and links through the full pipeline
// ============================================================================

#[test]
fn emoji_statistics_through_pipeline() {
    let lines = vec![
        "[01.01.23, 10:00:00] Alice: super 😂😂🎉".to_string(),
        "[02.01.23, 10:00:00] Alice: nochmal 😂".to_string(),
        "[02.01.23, 11:00:00] Bob: nur text".to_string(),
    ];
    let manager = ChatManager::from_lines(lines).unwrap();
    let analyzer = Analyzer::new(&manager);

    let as_text = analyzer.user_most_common_emojis(5, true);
    assert_eq!(as_text["Alice"][0], ("joy".to_owned(), 3));
    assert_eq!(as_text["Alice"][1], ("tada".to_owned(), 1));
    assert!(as_text["Bob"].is_empty());

    let glyphs = analyzer.user_most_common_emojis(1, false);
    assert_eq!(glyphs["Alice"], vec![("😂".to_owned(), 3)]);
}

#[test]
fn link_statistics_through_pipeline() {
    let lines = vec![
        "[01.01.23, 10:00:00] Alice: schau mal https://www.example.com/watch".to_string(),
        "[01.01.23, 11:00:00] Bob: https://example.com/other und https://docs.rs/regex".to_string(),
    ];
    let manager = ChatManager::from_lines(lines).unwrap();
    let analyzer = Analyzer::new(&manager);

    let links = analyzer.most_common_links(5);
    assert_eq!(links[0], ("example.com".to_owned(), 2));
    assert_eq!(links[1], ("docs.rs".to_owned(), 1));
}
