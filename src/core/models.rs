//! Core data models: the record table and output configuration.

use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::message::{MessageRecord, Sender};

/// Ordered collection of parsed messages.
///
/// Order is document order, not timestamp order: records whose timestamp
/// could not be parsed keep their position. The table is never mutated after
/// construction; analytics read it through [`select`](Self::select).
///
/// # Example
///
/// ```rust
/// use chatlens::core::filter::SenderFilter;
/// use chatlens::parser::Parser;
/// use chatlens::parsers::WhatsAppParser;
///
/// let text = "1/2/24, 3:45 PM - Alice: Hi\n1/2/24, 3:46 PM - Bob: Hey\n";
/// let table = WhatsAppParser::new().parse_str(text)?;
///
/// assert_eq!(table.senders(), vec!["Alice".to_string(), "Bob".to_string()]);
/// assert_eq!(table.select(&SenderFilter::user("Bob")).count(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<MessageRecord>,
}

impl RecordTable {
    /// Wraps parsed records.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Returns all records in document order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Iterates over all records.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the export contained no messages.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records matching `filter`.
    pub fn select<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |r| filter.matches(&r.sender))
    }

    /// Distinct human senders, sorted. Notifications are excluded.
    pub fn senders(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.sender.name())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Choices for a sender selector: `Overall` first, then every sender.
    pub fn filter_options(&self) -> Vec<SenderFilter> {
        std::iter::once(SenderFilter::Overall)
            .chain(self.senders().into_iter().map(SenderFilter::User))
            .collect()
    }

    /// Consumes the table and returns its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Number of records from the notification sentinel.
    pub fn notification_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.sender == Sender::Notification)
            .count()
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MessageRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Configuration for table export.
/// Controls which columns are written besides sender and body.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the parsed timestamp
    pub include_timestamps: bool,
    /// Include the derived calendar and clock fields
    pub include_time_fields: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_time_fields(mut self) -> Self {
        self.include_time_fields = true;
        self
    }

    /// Enables every column.
    #[must_use]
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_time_fields: true,
        }
    }
}
