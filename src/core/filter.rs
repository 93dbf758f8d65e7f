//! Selecting records by sender and date range.
//!
//! - [`SenderFilter`] is the per-query selector every analytics function takes:
//!   `Overall` (everything) or one participant.
//! - [`FilterConfig`] narrows a whole table to a date range before analysis.
//!
//! # Examples
//!
//! ## Filter by Sender
//!
//! ```
//! use chatlens::core::filter::SenderFilter;
//!
//! let filter: SenderFilter = "Overall".parse().unwrap();
//! assert!(filter.is_overall());
//!
//! let alice: SenderFilter = "Alice".parse().unwrap();
//! assert_eq!(alice, SenderFilter::user("Alice"));
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let text = "1/1/24, 9:00 AM - Alice: Old\n6/15/24, 9:00 AM - Alice: New\n";
//! let table = WhatsAppParser::new().parse_str(text)?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(&table, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.records()[0].body, "New\n");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact, like the table's own sender values
//! - Records without timestamps are **excluded** when date filters are active
//! - Multiple date bounds are combined with AND logic

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::models::RecordTable;
use crate::error::ChatlensError;
use crate::message::Sender;

/// Textual form of [`SenderFilter::Overall`].
pub const OVERALL: &str = "Overall";

/// Which records an analytics query looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SenderFilter {
    /// No filter: every record, notifications included.
    #[default]
    Overall,
    /// Only records from this participant.
    User(String),
}

impl SenderFilter {
    /// Creates a [`SenderFilter::User`].
    pub fn user(name: impl Into<String>) -> Self {
        SenderFilter::User(name.into())
    }

    /// Returns `true` when no filter is applied.
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }

    /// Returns `true` if a record from `sender` passes this filter.
    pub fn matches(&self, sender: &Sender) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::User(name) => sender.name() == Some(name.as_str()),
        }
    }

    /// Returns the display form.
    pub fn as_str(&self) -> &str {
        match self {
            SenderFilter::Overall => OVERALL,
            SenderFilter::User(name) => name,
        }
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SenderFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SenderFilter::from(s.to_string()))
    }
}

impl From<String> for SenderFilter {
    fn from(value: String) -> Self {
        if value == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::User(value)
        }
    }
}

impl From<SenderFilter> for String {
    fn from(value: SenderFilter) -> Self {
        match value {
            SenderFilter::Overall => OVERALL.to_string(),
            SenderFilter::User(name) => name,
        }
    }
}

/// Date range applied to a whole table.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(by_date.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this moment.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this moment.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let day = parse_day(date_str)?;
        self.after = day.and_hms_opt(0, 0, 0);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let day = parse_day(date_str)?;
        // End of the day to include the full day
        self.before = day.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    fn accepts(&self, timestamp: Option<NaiveDateTime>) -> bool {
        match timestamp {
            Some(ts) => {
                !(self.after.is_some_and(|after| ts < after)
                    || self.before.is_some_and(|before| ts > before))
            }
            // No timestamp - exclude from date-filtered results
            None => false,
        }
    }
}

fn parse_day(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Returns a new table with the records inside the configured date range.
///
/// If no bound is active the table is cloned unchanged. Document order is
/// preserved.
pub fn apply_filters(table: &RecordTable, config: &FilterConfig) -> RecordTable {
    if !config.is_active() {
        return table.clone();
    }

    table
        .iter()
        .filter(|record| config.accepts(record.timestamp))
        .cloned()
        .collect()
}
