//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of the parse pipeline and the
//! empty or degenerate inputs every query must survive.

use chatlens::analytics::{
    ActivityHeatmap, DAY_NAMES, EmojiMatcher, LinkExtractor, MessageClassifier, MessageKind,
    SentimentScorer, StopWords, activity_heatmap, daily_timeline, emoji_frequency, fetch_stats,
    hourly_activity, message_type_breakdown, month_activity_map, monthly_timeline,
    most_busy_users, most_common_words, sender_share, sentiment_summary, week_activity_map,
    word_cloud,
};
use chatlens::config::DEFAULT_MEDIA_MARKER;
use chatlens::core::filter::{FilterConfig, SenderFilter, apply_filters};
use chatlens::core::models::RecordTable;
use chatlens::message::{MessageRecord, Sender};
use chatlens::parser::Parser;
use chatlens::parsers::WhatsAppParser;
use chatlens::parsing::period_label;

fn parse(text: &str) -> RecordTable {
    WhatsAppParser::new().parse_str(text).unwrap()
}

// =========================================================================
// Tokenizer boundaries
// =========================================================================

#[test]
fn test_preamble_before_first_boundary_is_dropped() {
    let table = parse("garbage header\n1/2/24, 3:45 PM - Alice: hi\n");
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].body, "hi\n");
}

#[test]
fn test_multiline_body_keeps_continuations() {
    let table = parse("1/2/24, 3:45 PM - Alice: line one\nline two\n\nline four\n1/2/24, 3:46 PM - Bob: ok\n");
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].body, "line one\nline two\n\nline four\n");
}

#[test]
fn test_lowercase_meridiem_and_four_digit_year() {
    let table = parse("12/31/2023, 11:59 pm - Alice: bye\n");
    assert_eq!(table.len(), 1);
    let f = &table.records()[0].fields;
    assert_eq!(f.year, 2023);
    assert_eq!(f.hour, 23);
    assert_eq!(f.period, "23-00");
}

#[test]
fn test_last_message_without_trailing_newline() {
    let table = parse("1/2/24, 3:45 PM - Alice: no newline");
    assert_eq!(table.records()[0].body, "no newline");
}

#[test]
fn test_boundary_inside_body_starts_new_record() {
    // A quoted timestamp followed by " - " is indistinguishable from a boundary
    let table = parse("1/2/24, 3:45 PM - Alice: see 1/2/24, 3:40 PM - Bob: earlier\n");
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[1].sender, Sender::user("Bob"));
}

#[test]
fn test_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n\n").is_empty());
}

// =========================================================================
// Sender splitting
// =========================================================================

#[test]
fn test_colon_in_content() {
    let table = parse("1/2/24, 3:45 PM - Alice: note: meet at 10:30\n");
    let r = &table.records()[0];
    assert_eq!(r.sender, Sender::user("Alice"));
    assert_eq!(r.body, "note: meet at 10:30\n");
}

#[test]
fn test_phone_number_and_unicode_senders() {
    let table = parse(
        "1/2/24, 3:45 PM - +91 98765 43210: hello\n1/2/24, 3:46 PM - Иван: привет\n1/2/24, 3:47 PM - 村上: こんにちは\n",
    );
    let senders: Vec<&str> = table.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(senders, vec!["+91 98765 43210", "Иван", "村上"]);
}

#[test]
fn test_colon_without_space_is_notification() {
    let table = parse("1/2/24, 3:45 PM - Group subject changed to:Weekend\n");
    assert!(table.records()[0].is_notification());
}

#[test]
fn test_participant_named_like_sentinel_is_a_user_when_parsed() {
    let table = parse("1/2/24, 3:45 PM - group_notification: hi\n");
    assert_eq!(table.records()[0].sender, Sender::user("group_notification"));
}

#[test]
fn test_sentinel_name_is_lossy_through_string_form() {
    // Parsed as a user, but the string form cannot tell it from a notification
    let parsed = Sender::user("group_notification");
    let read_back: Sender = String::from(parsed.clone()).into();
    assert_ne!(read_back, parsed);
    assert_eq!(read_back, Sender::Notification);
}

// =========================================================================
// Tolerant dates
// =========================================================================

#[test]
fn test_invalid_calendar_date_is_kept() {
    let table = parse("2/30/24, 3:45 PM - Alice: leap?\n13/1/24, 3:45 PM - Bob: month 13\n");
    assert_eq!(table.len(), 2);
    for record in &table {
        assert!(record.timestamp.is_none());
        assert_eq!(record.fields.day_name, "");
        assert_eq!(record.fields.year, 0);
        assert_eq!(record.fields.hour, 0);
        assert_eq!(record.fields.period, "00-01");
    }
}

#[test]
fn test_null_timestamps_skipped_by_time_queries() {
    let table = parse("2/30/24, 3:45 PM - Alice: bad date\n1/2/24, 3:45 PM - Alice: good date\n");
    let overall = SenderFilter::Overall;

    assert_eq!(monthly_timeline(&overall, &table).len(), 1);
    assert_eq!(daily_timeline(&overall, &table).len(), 1);
    assert_eq!(hourly_activity(&overall, &table), vec![(15, 1)]);
    assert_eq!(activity_heatmap(&overall, &table).total(), 1);

    // Non-time queries still see both
    let links = LinkExtractor::new().unwrap();
    assert_eq!(fetch_stats(&overall, &table, &links, DEFAULT_MEDIA_MARKER).messages, 2);
}

#[test]
fn test_date_filter_drops_null_timestamps() {
    let table = parse("2/30/24, 3:45 PM - Alice: bad date\n1/2/24, 3:45 PM - Alice: good date\n");
    let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
    assert_eq!(apply_filters(&table, &config).len(), 1);

    // An inactive filter keeps everything
    assert_eq!(apply_filters(&table, &FilterConfig::new()).len(), 2);
}

#[test]
fn test_period_labels_cover_the_clock() {
    let labels: Vec<String> = (0..24).map(period_label).collect();
    assert_eq!(labels.first().unwrap(), "00-01");
    assert_eq!(labels.last().unwrap(), "23-00");
    assert_eq!(labels.len(), 24);
}

// =========================================================================
// Empty and degenerate selections
// =========================================================================

#[test]
fn test_every_query_on_empty_table() {
    let table = RecordTable::default();
    let overall = SenderFilter::Overall;
    let links = LinkExtractor::new().unwrap();
    let emoji = EmojiMatcher::new().unwrap();
    let classifier = MessageClassifier::new(DEFAULT_MEDIA_MARKER, &links, &emoji);

    let stats = fetch_stats(&overall, &table, &links, DEFAULT_MEDIA_MARKER);
    assert_eq!((stats.messages, stats.words, stats.media, stats.links), (0, 0, 0, 0));
    assert!(most_busy_users(&overall, &table).is_empty());
    assert!(sender_share(&overall, &table).is_empty());
    assert!(monthly_timeline(&overall, &table).is_empty());
    assert!(daily_timeline(&overall, &table).is_empty());
    assert!(week_activity_map(&overall, &table).is_empty());
    assert!(month_activity_map(&overall, &table).is_empty());
    assert_eq!(activity_heatmap(&overall, &table), ActivityHeatmap::default());
    assert!(hourly_activity(&overall, &table).is_empty());
    assert!(most_common_words(&overall, &table, &StopWords::empty(), DEFAULT_MEDIA_MARKER, 20).is_empty());
    assert!(word_cloud(&overall, &table).is_empty());
    assert!(emoji_frequency(&overall, &table, &emoji).is_empty());
    assert!(message_type_breakdown(&overall, &table, &classifier).is_empty());

    let sentiment = sentiment_summary(&overall, &table, &SentimentScorer::new());
    assert_eq!(sentiment.messages, 0);
    assert!(sentiment.score.abs() < f64::EPSILON);
}

#[test]
fn test_notifications_only() {
    let table = parse("1/2/24, 3:45 PM - Alice added Bob\n1/2/24, 3:46 PM - Bob left\n");
    let overall = SenderFilter::Overall;

    assert!(most_busy_users(&overall, &table).is_empty());
    assert!(sender_share(&overall, &table).is_empty());
    assert!(most_common_words(&overall, &table, &StopWords::empty(), DEFAULT_MEDIA_MARKER, 20).is_empty());
    // Notifications still have timestamps
    assert_eq!(hourly_activity(&overall, &table), vec![(15, 2)]);
}

#[test]
fn test_media_only_user() {
    let table = parse("1/2/24, 3:45 PM - Bob: <Media omitted>\n1/2/24, 3:46 PM - Bob: <Media omitted>\n");
    let bob = SenderFilter::user("Bob");
    let links = LinkExtractor::new().unwrap();
    let emoji = EmojiMatcher::new().unwrap();
    let classifier = MessageClassifier::new(DEFAULT_MEDIA_MARKER, &links, &emoji);

    assert_eq!(fetch_stats(&bob, &table, &links, DEFAULT_MEDIA_MARKER).media, 2);
    assert!(most_common_words(&bob, &table, &StopWords::empty(), DEFAULT_MEDIA_MARKER, 20).is_empty());

    let kinds = message_type_breakdown(&bob, &table, &classifier);
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].kind, MessageKind::Media);
    assert_eq!(kinds[0].count, 2);
}

#[test]
fn test_top_n_zero() {
    let table = parse("1/2/24, 3:45 PM - Alice: one two three\n");
    assert!(most_common_words(&SenderFilter::Overall, &table, &StopWords::empty(), DEFAULT_MEDIA_MARKER, 0).is_empty());
}

#[test]
fn test_heatmap_only_observed_cells() {
    // Tuesday 2024-01-02 at 15:00 and 23:00
    let table = parse("1/2/24, 3:45 PM - Alice: a\n1/2/24, 11:10 PM - Alice: b\n");
    let heatmap = activity_heatmap(&SenderFilter::Overall, &table);

    assert_eq!(heatmap.days, vec!["Tuesday"]);
    assert_eq!(heatmap.periods, vec!["15-16", "23-00"]);
    assert_eq!(heatmap.get("Tuesday", "23-00"), 1);
    assert_eq!(heatmap.get("Monday", "23-00"), 0);
    assert!(DAY_NAMES.contains(&"Tuesday"));
}

#[test]
fn test_records_built_by_hand() {
    let table: RecordTable = vec![
        MessageRecord::new(None, Sender::user("Alice"), "so happy 😀"),
        MessageRecord::new(None, Sender::Notification, "Alice left"),
    ]
    .into_iter()
    .collect();

    let emoji = EmojiMatcher::new().unwrap();
    let found = emoji_frequency(&SenderFilter::Overall, &table, &emoji);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].emoji, "😀");

    let sentiment = sentiment_summary(&SenderFilter::user("Alice"), &table, &SentimentScorer::new());
    assert!(sentiment.score > 0.0);
}
