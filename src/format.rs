//! Export format selection for the record table.
//!
//! Nothing here depends on clap, so library users can choose a format from a
//! string or a file name and write the table without the CLI.
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//!
//! let table = WhatsAppParser::new().parse_str("1/2/24, 3:45 PM - Alice: Hello!\n")?;
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! let text = to_format_string(&table, format, &OutputConfig::new())?;
//! assert_eq!(text.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, RecordTable};
use crate::error::ChatlensError;

/// How the record table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Semicolon separated, one row per record
    #[default]
    Csv,
    /// Pretty-printed array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Every format, in the order they are offered.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Cargo feature that provides the writer.
    pub fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Matches a name or extension, case-insensitively. `ndjson` is JSONL.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    /// Picks the format from a file name.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/records.NDJSON")?, OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("records.xlsx").is_err());
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_extension(ext).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}', expected csv, json or jsonl"),
            )
        })
    }

    fn unsupported(self) -> ChatlensError {
        ChatlensError::invalid_format(
            "output",
            format!("{self} export needs the '{}' feature", self.feature()),
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| {
            ChatlensError::invalid_format("output", format!("unknown format '{s}'"))
        })
    }
}

/// Writes the table to `path` in `format`.
///
/// # Errors
///
/// Fails if the file cannot be written or the writer's feature is disabled.
#[allow(unused_variables)]
pub fn write_to_format(
    table: &RecordTable,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(table, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(table, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(table, path, config),
        #[allow(unreachable_patterns)]
        other => Err(other.unsupported()),
    }
}

/// Renders the table in `format` without touching the filesystem.
#[allow(unused_variables)]
pub fn to_format_string(
    table: &RecordTable,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(table, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(table, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(table, config),
        #[allow(unreachable_patterns)]
        other => Err(other.unsupported()),
    }
}
