//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Export format options for `--format`
//!
//! `Args` also knows how to turn itself into the library's configuration
//! types, so `main.rs` stays a thin driver.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "--day-first"]);
//! assert_eq!(args.sender_filter().to_string(), "Alice");
//! assert_eq!(args.parse_config().century, 2000);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DEFAULT_TOP_WORDS, ParseConfig};
use crate::core::filter::{FilterConfig, SenderFilter};
use crate::core::models::OutputConfig;
use crate::error::ChatlensError;
use crate::parsing::DateOrder;

/// Analyze a WhatsApp chat export: activity, words, emoji and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat with Team.txt\"
    chatlens chat.txt --user Alice --stopwords stop_hinglish.txt
    chatlens chat.txt --day-first --after 2024-01-01 --json
    chatlens chat.txt --export records.csv --time-fields")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stop-word list used by the most-common-words ranking
    #[arg(short, long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,

    /// Dates are day/month/year instead of month/day/year
    #[arg(long)]
    pub day_first: bool,

    /// Century added to two-digit years
    #[arg(long, value_name = "N", default_value_t = 2000)]
    pub century: i32,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of entries in the most-common-words ranking
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Also write the parsed record table to this file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the --export extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include derived time fields in the export
    #[arg(short = 't', long)]
    pub time_fields: bool,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_config(&self) -> ParseConfig {
        let order = if self.day_first {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        };
        ParseConfig::new()
            .with_date_order(order)
            .with_century(self.century)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::new().with_top_words(self.top);
        match &self.stopwords {
            Some(path) => config.with_stopwords(path.clone()),
            None => config,
        }
    }

    /// Date range from `--after` / `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatlensError> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    pub fn sender_filter(&self) -> SenderFilter {
        self.user
            .clone()
            .map_or(SenderFilter::Overall, SenderFilter::from)
    }

    pub fn output_config(&self) -> OutputConfig {
        let config = OutputConfig::new().with_timestamps();
        if self.time_fields {
            config.with_time_fields()
        } else {
            config
        }
    }
}

/// Export format options.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(chatlens::format::OutputFormat::from(format).extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["chatlens", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let a = args(&[]);
        assert_eq!(a.sender_filter(), SenderFilter::Overall);
        assert_eq!(a.parse_config(), ParseConfig::default());
        assert_eq!(a.analysis_config().top_words, DEFAULT_TOP_WORDS);
        assert!(a.analysis_config().stopwords.is_none());
        assert!(!a.filter_config().unwrap().is_active());
        assert!(a.output_config().include_timestamps);
        assert!(!a.output_config().include_time_fields);
    }

    #[test]
    fn test_locale_flags() {
        let a = args(&["--day-first", "--century", "1900"]);
        let config = a.parse_config();
        assert_eq!(config.date_order, DateOrder::DayFirst);
        assert_eq!(config.century, 1900);
    }

    #[test]
    fn test_user_overall_is_no_filter() {
        assert_eq!(args(&["--user", "Overall"]).sender_filter(), SenderFilter::Overall);
        assert_eq!(args(&["-u", "Bob"]).sender_filter(), SenderFilter::user("Bob"));
    }

    #[test]
    fn test_bad_date_is_reported() {
        let err = args(&["--after", "2024/01/01"]).filter_config().unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_format_value_enum() {
        assert_eq!(args(&["--format", "ndjson"]).format, Some(OutputFormat::Jsonl));
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Json),
            crate::format::OutputFormat::Json
        );
    }
}
