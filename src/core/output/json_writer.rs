//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use super::TIMESTAMP_FORMAT;
use crate::core::models::{OutputConfig, RecordTable};
use crate::error::ChatlensError;
use crate::message::{MessageRecord, TimeFields};

/// Record shape for JSON and JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(crate) struct JsonRecord<'a> {
    sender: String,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(flatten)]
    fields: Option<&'a TimeFields>,
}

impl<'a> JsonRecord<'a> {
    pub(crate) fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            sender: record.sender.to_string(),
            body: &record.body,
            timestamp: if config.include_timestamps {
                record
                    .timestamp
                    .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            } else {
                None
            },
            fields: config.include_time_fields.then_some(&record.fields),
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "body": "Hello\n"},
///   {"sender": "group_notification", "body": "Alice added Bob\n"}
/// ]
/// ```
pub fn write_json(
    table: &RecordTable,
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let json = to_json(table, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(table: &RecordTable, config: &OutputConfig) -> Result<String, ChatlensError> {
    let records: Vec<JsonRecord<'_>> = table
        .iter()
        .map(|r| JsonRecord::from_record(r, config))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
