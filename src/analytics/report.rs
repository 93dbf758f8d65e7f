//! Everything at once: the detectors bundled with their settings, and the
//! combined report for one selection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::activity::{activity_heatmap, hourly_activity, month_activity_map, week_activity_map};
use super::classify::{MessageClassifier, message_type_breakdown};
use super::emoji::{EmojiMatcher, emoji_frequency};
use super::links::LinkExtractor;
use super::sentiment::{SentimentScorer, sentiment_summary};
use super::stats::{fetch_stats, most_busy_users, sender_share};
use super::timeline::{daily_timeline, monthly_timeline};
use super::types::{
    ActivityHeatmap, ChatStats, DailyPoint, EmojiCount, KindCount, MonthlyPoint, SenderShare,
    SentimentSummary, UserWordCount, WordCount,
};
use super::words::{StopWords, most_common_words, word_cloud};
use crate::config::AnalysisConfig;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;
use crate::core::processor::ParseStats;
use crate::error::ChatlensError;

/// Analysis settings plus the detectors they need, built once.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::Analyzer;
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::SenderFilter;
/// use chatlens::parser::Parser;
/// use chatlens::parsers::WhatsAppParser;
///
/// let table = WhatsAppParser::new().parse_str("1/2/24, 3:45 PM - Alice: great news 🎉\n")?;
/// let analyzer = Analyzer::new(AnalysisConfig::default())?;
///
/// let report = analyzer.report(&SenderFilter::Overall, &table);
/// assert_eq!(report.stats.messages, 1);
/// assert_eq!(report.emoji[0].emoji, "🎉");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    links: LinkExtractor,
    emoji: EmojiMatcher,
    sentiment: SentimentScorer,
    stop_words: StopWords,
}

impl Analyzer {
    /// Compiles the detectors and loads the stop-word list.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] if `config.stopwords` names
    /// a file that cannot be read.
    pub fn new(config: AnalysisConfig) -> Result<Self, ChatlensError> {
        let stop_words = match &config.stopwords {
            Some(path) => StopWords::from_path(path)?,
            None => {
                warn!("no stop-word list configured; common words will include filler");
                StopWords::empty()
            }
        };
        Self::with_stop_words(config, stop_words)
    }

    /// Like [`new`](Self::new) with an already loaded stop-word list.
    pub fn with_stop_words(
        config: AnalysisConfig,
        stop_words: StopWords,
    ) -> Result<Self, ChatlensError> {
        Ok(Self {
            config,
            links: LinkExtractor::new()?,
            emoji: EmojiMatcher::new()?,
            sentiment: SentimentScorer::new(),
            stop_words,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn links(&self) -> &LinkExtractor {
        &self.links
    }

    pub fn emoji(&self) -> &EmojiMatcher {
        &self.emoji
    }

    pub fn sentiment(&self) -> &SentimentScorer {
        &self.sentiment
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Classifier using this analyzer's media marker and detectors.
    pub fn classifier(&self) -> MessageClassifier<'_> {
        MessageClassifier::new(&self.config.media_marker, &self.links, &self.emoji)
    }

    /// Runs every query for `filter`.
    pub fn report(&self, filter: &SenderFilter, table: &RecordTable) -> ChatReport {
        build_report(filter, table, self)
    }
}

/// Results of every query for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    pub filter: SenderFilter,
    pub parse: ParseStats,
    pub stats: ChatStats,
    pub busy_users: Vec<UserWordCount>,
    pub sender_share: Vec<SenderShare>,
    pub monthly: Vec<MonthlyPoint>,
    pub daily: Vec<DailyPoint>,
    pub week_activity: Vec<(String, usize)>,
    pub month_activity: Vec<(String, usize)>,
    pub heatmap: ActivityHeatmap,
    pub hourly: Vec<(u32, usize)>,
    pub top_words: Vec<WordCount>,
    pub word_cloud: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    pub message_types: Vec<KindCount>,
    pub sentiment: SentimentSummary,
}

/// Builds a [`ChatReport`] for `filter`.
pub fn build_report(filter: &SenderFilter, table: &RecordTable, analyzer: &Analyzer) -> ChatReport {
    let config = analyzer.config();
    debug!(%filter, records = table.len(), "building report");

    ChatReport {
        filter: filter.clone(),
        parse: ParseStats::from_table(table),
        stats: fetch_stats(filter, table, analyzer.links(), &config.media_marker),
        busy_users: most_busy_users(filter, table),
        sender_share: sender_share(filter, table),
        monthly: monthly_timeline(filter, table),
        daily: daily_timeline(filter, table),
        week_activity: week_activity_map(filter, table),
        month_activity: month_activity_map(filter, table),
        heatmap: activity_heatmap(filter, table),
        hourly: hourly_activity(filter, table),
        top_words: most_common_words(
            filter,
            table,
            analyzer.stop_words(),
            &config.media_marker,
            config.top_words,
        ),
        word_cloud: word_cloud(filter, table),
        emoji: emoji_frequency(filter, table, analyzer.emoji()),
        message_types: message_type_breakdown(filter, table, &analyzer.classifier()),
        sentiment: sentiment_summary(filter, table, analyzer.sentiment()),
    }
}
