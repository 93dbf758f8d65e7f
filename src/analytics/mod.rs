//! Descriptive analytics over a [`RecordTable`](crate::core::models::RecordTable).
//!
//! Every query takes a [`SenderFilter`](crate::core::filter::SenderFilter)
//! and the table and is a pure, deterministic function of them. Detectors
//! that compile a pattern ([`LinkExtractor`], [`EmojiMatcher`]) or load data
//! ([`SentimentScorer`], [`StopWords`]) are built once by the caller and
//! passed in; [`Analyzer`] bundles them.
//!
//! ## Layout
//!
//! - **Counts**: [`fetch_stats`], [`most_busy_users`], [`sender_share`]
//! - **Time series**: [`monthly_timeline`], [`daily_timeline`]
//! - **Activity**: [`week_activity_map`], [`month_activity_map`],
//!   [`activity_heatmap`], [`hourly_activity`]
//! - **Content**: [`most_common_words`], [`word_cloud`], [`emoji_frequency`],
//!   [`message_type_breakdown`], [`sentiment_summary`]
//! - **Everything**: [`build_report`] / [`Analyzer::report`]

mod activity;
mod classify;
mod emoji;
mod links;
mod report;
mod sentiment;
mod stats;
mod timeline;
mod types;
mod words;

use std::collections::HashMap;
use std::hash::Hash;

pub use activity::{
    DAY_NAMES, MONTH_NAMES, activity_heatmap, hourly_activity, month_activity_map,
    week_activity_map,
};
pub use classify::{MessageClassifier, Predicate, RULES, message_type_breakdown};
pub use emoji::{EmojiMatcher, emoji_frequency};
pub use links::LinkExtractor;
pub use report::{Analyzer, ChatReport, build_report};
pub use sentiment::{SentimentScorer, sentiment_summary};
pub use stats::{fetch_stats, most_busy_users, sender_share};
pub use timeline::{daily_timeline, date_span, monthly_timeline};
pub use types::*;
pub use words::{StopWords, most_common_words, word_cloud};

/// Counts items and orders them by count, descending.
///
/// Equal counts keep the order in which items first appeared.
pub(crate) fn rank_by_count<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        if let Some(&i) = index.get(&item) {
            counts[i].1 += 1;
        } else {
            index.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
