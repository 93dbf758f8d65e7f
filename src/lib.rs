//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into a typed record table
//! and computing descriptive analytics over it.
//!
//! ## Overview
//!
//! An export is a plain text file in which every message starts with a
//! timestamp boundary:
//!
//! ```text
//! 1/2/24, 3:45 PM - Alice: Hello there
//! 1/2/24, 3:46 PM - Bob: <Media omitted>
//! 1/2/24, 3:47 PM - Alice added Charlie
//! ```
//!
//! Parsing runs a fixed per-record pipeline: tokenize on the boundary, split
//! the sender prefix, normalize the timestamp, derive calendar fields. A bad
//! timestamp never fails the parse; the record is kept with safe defaults.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "1/2/24, 3:45 PM - Alice: Hello there\n1/2/24, 3:46 PM - Bob: <Media omitted>\n";
//!     let table = WhatsAppParser::new().parse_str(text)?;
//!
//!     let analyzer = Analyzer::new(AnalysisConfig::default())?;
//!     let report = analyzer.report(&SenderFilter::Overall, &table);
//!
//!     assert_eq!(report.stats.messages, 2);
//!     assert_eq!(report.stats.media, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Other Locales
//!
//! Day-first exports and other two-digit-year centuries are configuration:
//!
//! ```rust
//! use chatlens::prelude::*;
//! use chatlens::parsing::DateOrder;
//!
//! let parser = WhatsAppParser::with_config(ParseConfig::new().with_date_order(DateOrder::DayFirst));
//! let table = parser.parse_str("25/12/23, 8:00 AM - Alice: Merry Christmas\n")?;
//! assert_eq!(table.records()[0].fields.month_name, "December");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Pipeline stages: tokenizer, sender splitter, date normalizer, field deriver
//! - [`parser`] / [`parsers`] - [`Parser`](parser::Parser) trait and [`WhatsAppParser`](parsers::WhatsAppParser)
//! - [`message`] - [`MessageRecord`], [`Sender`], [`TimeFields`](message::TimeFields)
//! - [`core`] - [`RecordTable`], filters, parse summary, table writers
//! - [`analytics`] - Every query plus [`Analyzer`](analytics::Analyzer) and [`ChatReport`](analytics::ChatReport)
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - Export format selection
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analytics;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::RecordTable;
pub use error::{ChatlensError, Result};
pub use message::{MessageRecord, Sender};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatlensError, Result};
    pub use crate::message::{MessageRecord, Sender, TimeFields};

    pub use crate::parser::Parser;
    pub use crate::parsers::{WhatsAppParser, create_parser};

    pub use crate::config::{AnalysisConfig, ParseConfig};

    pub use crate::core::filter::{FilterConfig, SenderFilter, apply_filters};
    pub use crate::core::models::{OutputConfig, RecordTable};
    pub use crate::core::processor::ParseStats;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::analytics::{Analyzer, ChatReport, build_report};

    pub use crate::format::OutputFormat;
}
