//! `WhatsApp` TXT export parser.
//!
//! Handles the Android-style export where every message starts with a
//! 12-hour boundary:
//!
//! ```text
//! 1/2/24, 3:45 PM - Alice: Hello there
//! 1/2/24, 3:46 PM - Bob: <Media omitted>
//! 1/2/24, 3:47 PM - Alice added Charlie
//! ```
//!
//! Every boundary produces exactly one record, in document order. Lines
//! without a boundary belong to the previous message.

use tracing::{debug, warn};

use crate::config::ParseConfig;
use crate::core::models::RecordTable;
use crate::error::ChatlensError;
use crate::message::MessageRecord;
use crate::parser::Parser;
use crate::parsing::{DateNormalizer, SenderSplitter, Tokenizer};

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parsers::WhatsAppParser;
/// use chatlens::parser::Parser;
///
/// let parser = WhatsAppParser::new();
/// let table = parser.parse_str("1/2/24, 3:45 PM - Alice: Hello there\n")?;
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.records()[0].sender().as_str(), "Alice");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: ParseConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses content from a string (internal implementation).
    fn parse_content(&self, content: &str) -> Result<RecordTable, ChatlensError> {
        let tokenizer = Tokenizer::new()?;
        let splitter = SenderSplitter::new()?;
        let normalizer = DateNormalizer::new(self.config.date_order, self.config.century)?;

        // Step 1: tokenize
        let entries = tokenizer.split(content);
        debug!(entries = entries.len(), "tokenized export");

        // Steps 2-4: split sender, normalize date, derive fields
        let mut unparsed = 0usize;
        let records: Vec<MessageRecord> = entries
            .iter()
            .map(|entry| {
                let timestamp = normalizer.normalize(entry.timestamp);
                if timestamp.is_none() {
                    unparsed += 1;
                    debug!(raw = entry.timestamp, "unparseable timestamp");
                }
                let (sender, body) = splitter.split(entry.body);
                MessageRecord::new(timestamp, sender, body)
            })
            .collect();

        if unparsed > 0 {
            warn!(
                unparsed,
                total = records.len(),
                order = %self.config.date_order,
                "some timestamps could not be parsed; kept with default time fields"
            );
        }

        Ok(RecordTable::new(records))
    }
}

impl Parser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse_str(&self, content: &str) -> Result<RecordTable, ChatlensError> {
        self.parse_content(content)
    }
}
