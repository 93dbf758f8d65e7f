//! Analytics result types.
//!
//! Every query returns plain serde-serializable values so a presentation
//! layer can chart them without touching the record table.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counts for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of records
    pub messages: usize,
    /// Whitespace-separated words across all bodies
    pub words: usize,
    /// Bodies equal to the media placeholder
    pub media: usize,
    /// URLs found in bodies
    pub links: usize,
}

/// Words typed by one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWordCount {
    pub user: String,
    pub words: usize,
}

/// One sender's share of the messages in a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub user: String,
    pub messages: usize,
    /// Percentage of all selected messages, two decimals
    pub percent: f64,
}

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    /// `"Month-YYYY"`, e.g. `"January-2024"`
    pub label: String,
    pub messages: usize,
}

/// Message count for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Day-of-week by hour-period message counts.
///
/// `counts[d][p]` is the number of messages on `days[d]` during `periods[p]`.
/// Only days and periods that occur in the selection are present, so a
/// selection with no timestamped messages yields an empty heatmap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    /// Day names in calendar order, Monday first
    pub days: Vec<String>,
    /// Period labels ascending, `"00-01"` first
    pub periods: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Returns `true` when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Count for a day name and period label, `0` if either is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let Some(d) = self.days.iter().position(|x| x == day) else {
            return 0;
        };
        let Some(p) = self.periods.iter().position(|x| x == period) else {
            return 0;
        };
        self.counts[d][p]
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// An emoji and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Exclusive message categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    Media,
    Link,
    Emoji,
    Text,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Media => "Media",
            MessageKind::Link => "Link",
            MessageKind::Emoji => "Emoji",
            MessageKind::Text => "Text",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of messages in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: MessageKind,
    pub count: usize,
}

/// Three-way reading of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Sign of the score decides; exactly zero is neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean polarity over a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean polarity in `[-1, 1]`, rounded to three decimals
    pub score: f64,
    pub label: SentimentLabel,
    /// Number of messages averaged
    pub messages: usize,
}

impl Default for SentimentSummary {
    fn default() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            messages: 0,
        }
    }
}
