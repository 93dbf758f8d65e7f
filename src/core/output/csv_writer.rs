//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::TIMESTAMP_FORMAT;
use crate::core::models::{OutputConfig, RecordTable};
use crate::error::ChatlensError;
use crate::message::MessageRecord;

const TIME_FIELD_COLUMNS: [&str; 9] = [
    "DayName",
    "Date",
    "Year",
    "Month",
    "MonthName",
    "Day",
    "Hour",
    "Minute",
    "Period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on [`OutputConfig`]
///   - Basic: `Sender`, `Body`
///   - With timestamps: `Timestamp`, `Sender`, `Body`
///   - With time fields: `Sender`, `Body`, `DayName` .. `Period`
/// - Encoding: UTF-8
pub fn write_csv(
    table: &RecordTable,
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    write_records(table, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(table: &RecordTable, config: &OutputConfig) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_records(table, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    table: &RecordTable,
    out: W,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for record in table {
        writer.write_record(build_record(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Sender");
    header.push("Body");

    if config.include_time_fields {
        header.extend(TIME_FIELD_COLUMNS);
    }

    header
}

/// Build CSV row for a single record.
fn build_record(record: &MessageRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::new();

    if config.include_timestamps {
        row.push(
            record
                .timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }

    row.push(record.sender.to_string());
    row.push(record.body.clone());

    if config.include_time_fields {
        let f = &record.fields;
        row.extend([
            f.day_name.clone(),
            f.date_only.clone(),
            f.year.to_string(),
            f.month_number.to_string(),
            f.month_name.clone(),
            f.day_of_month.to_string(),
            f.hour.to_string(),
            f.minute.to_string(),
            f.period.clone(),
        ]);
    }

    row
}
