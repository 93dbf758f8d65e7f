//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - how boundary timestamps are read
//! - [`AnalysisConfig`] - media marker, word ranking size, stop-word list
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParseConfig;
//! use chatlens::parsing::DateOrder;
//! use chatlens::parsers::WhatsAppParser;
//!
//! let config = ParseConfig::new()
//!     .with_date_order(DateOrder::DayFirst)
//!     .with_century(2000);
//!
//! let parser = WhatsAppParser::with_config(config);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parsing::DateOrder;

/// Placeholder WhatsApp writes instead of an attachment when exporting
/// "without media". Bodies keep the export's trailing newline.
pub const DEFAULT_MEDIA_MARKER: &str = "<Media omitted>\n";

/// Default size of the most-common-words ranking.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Configuration for export parsing.
///
/// Exports print dates in the phone's locale. The field order and the century
/// for two-digit years are explicit inputs here rather than hidden constants.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParseConfig;
/// use chatlens::parsing::DateOrder;
///
/// let config = ParseConfig::new().with_date_order(DateOrder::DayFirst);
/// assert_eq!(config.century, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Order of month and day in the boundary (default: month first)
    pub date_order: DateOrder,

    /// Added to two-digit years (default: 2000)
    pub century: i32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::MonthFirst,
            century: 2000,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the month/day order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the century for two-digit years.
    #[must_use]
    pub fn with_century(mut self, century: i32) -> Self {
        self.century = century;
        self
    }
}

/// Configuration for the analytics queries.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_top_words(10)
///     .with_stopwords("stop_hinglish.txt");
/// assert_eq!(config.top_words, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Exact body of a media placeholder (default: `"<Media omitted>\n"`)
    pub media_marker: String,

    /// How many entries the most-common-words ranking keeps (default: 20)
    pub top_words: usize,

    /// Stop-word list file, one or more words per line (default: none)
    pub stopwords: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_marker: DEFAULT_MEDIA_MARKER.to_string(),
            top_words: DEFAULT_TOP_WORDS,
            stopwords: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets the size of the word ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the stop-word list path.
    #[must_use]
    pub fn with_stopwords(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = Some(path.into());
        self
    }
}
