//! Volume counts and per-sender rankings.

use std::collections::BTreeMap;

use super::links::LinkExtractor;
use super::types::{ChatStats, SenderShare, UserWordCount};
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;

/// Message, word, media and link totals for the selection.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{LinkExtractor, fetch_stats};
/// use chatlens::config::DEFAULT_MEDIA_MARKER;
/// use chatlens::core::filter::SenderFilter;
/// use chatlens::parser::Parser;
/// use chatlens::parsers::WhatsAppParser;
///
/// let text = "1/2/24, 3:45 PM - Alice: Hello there\n1/2/24, 3:46 PM - Bob: <Media omitted>\n";
/// let table = WhatsAppParser::new().parse_str(text)?;
/// let links = LinkExtractor::new()?;
///
/// let stats = fetch_stats(&SenderFilter::Overall, &table, &links, DEFAULT_MEDIA_MARKER);
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.media, 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn fetch_stats(
    filter: &SenderFilter,
    table: &RecordTable,
    links: &LinkExtractor,
    media_marker: &str,
) -> ChatStats {
    table
        .select(filter)
        .fold(ChatStats::default(), |mut stats, record| {
            stats.messages += 1;
            stats.words += record.word_count();
            if record.body == media_marker {
                stats.media += 1;
            }
            stats.links += links.count(&record.body);
            stats
        })
}

/// Words typed per sender, most first; equal counts sorted by name.
///
/// Notifications never appear.
pub fn most_busy_users(filter: &SenderFilter, table: &RecordTable) -> Vec<UserWordCount> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for record in table.select(filter) {
        if let Some(name) = record.sender.name() {
            *totals.entry(name).or_insert(0) += record.word_count();
        }
    }

    let mut ranking: Vec<UserWordCount> = totals
        .into_iter()
        .map(|(user, words)| UserWordCount {
            user: user.to_string(),
            words,
        })
        .collect();
    // BTreeMap yields names in order, the stable sort keeps it for ties
    ranking.sort_by(|a, b| b.words.cmp(&a.words));
    ranking
}

/// Each sender's percentage of the human messages in the selection.
///
/// Ordered like [`most_busy_users`] but by message count.
pub fn sender_share(filter: &SenderFilter, table: &RecordTable) -> Vec<SenderShare> {
    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for record in table.select(filter) {
        if let Some(name) = record.sender.name() {
            *totals.entry(name).or_insert(0) += 1;
        }
    }

    let all: usize = totals.values().sum();
    let mut shares: Vec<SenderShare> = totals
        .into_iter()
        .map(|(user, messages)| SenderShare {
            user: user.to_string(),
            messages,
            percent: round_to(messages as f64 * 100.0 / all as f64, 2),
        })
        .collect();
    shares.sort_by(|a, b| b.messages.cmp(&a.messages));
    shares
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
