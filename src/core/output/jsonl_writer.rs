//! JSON Lines output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::JsonRecord;
use crate::core::models::{OutputConfig, RecordTable};
use crate::error::ChatlensError;

/// Writes records to a JSONL file, one JSON object per line.
///
/// # Format
/// ```text
/// {"sender":"Alice","body":"Hello\n"}
/// {"sender":"Bob","body":"Hi\n"}
/// ```
pub fn write_jsonl(
    table: &RecordTable,
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(table, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(table: &RecordTable, config: &OutputConfig) -> Result<String, ChatlensError> {
    let mut buffer = Vec::new();
    write_lines(table, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    table: &RecordTable,
    writer: &mut W,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    for record in table {
        let line = serde_json::to_string(&JsonRecord::from_record(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
