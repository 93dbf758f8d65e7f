//! The record table and everything done to it as a whole.
//!
//! [`RecordTable`] is what parsing produces and what every analytics query
//! reads. Around it live the [`SenderFilter`] selection, the date-range
//! [`FilterConfig`], the [`ParseStats`] summary and the table writers in
//! [`output`].
//!
//! ```rust
//! use chatlens::core::{FilterConfig, ParseStats, apply_filters};
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//!
//! let text = "1/2/24, 3:45 PM - Alice: Hi\n2/2/24, 9:00 AM - Bob: Hey\n";
//! let table = WhatsAppParser::new().parse_str(text)?;
//!
//! let february = apply_filters(&table, &FilterConfig::new().with_date_from("2024-02-01")?);
//! assert_eq!(ParseStats::from_table(&february).senders, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

pub use filter::{FilterConfig, SenderFilter, apply_filters};
pub use models::{OutputConfig, RecordTable};
pub use processor::ParseStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
