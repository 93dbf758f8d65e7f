//! Writers that dump the record table to disk or a string.
//!
//! | Writer | Shape | Feature |
//! |--------|-------|---------|
//! | [`write_csv`] / [`to_csv`] | `;`-separated rows, header first | `csv-output` |
//! | [`write_json`] / [`to_json`] | pretty array of objects | `json-output` |
//! | [`write_jsonl`] / [`to_jsonl`] | one object per line | `json-output` |
//!
//! Sender and body are always written. [`OutputConfig`](crate::core::models::OutputConfig)
//! switches on the timestamp column and the nine derived time fields.
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::to_csv;
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//!
//! let table = WhatsAppParser::new().parse_str("1/2/24, 3:45 PM - Alice: Hello\n")?;
//! let csv = to_csv(&table, &OutputConfig::new().with_timestamps())?;
//! assert!(csv.starts_with("Timestamp;Sender;Body\n2024-01-02 15:45:00;Alice;"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
pub(crate) use json_writer::JsonRecord;

/// Timestamp layout shared by all writers.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
