//! Parser trait for chat exports.
//!
//! A parser turns one export document into a [`RecordTable`]. Each call is
//! independent: no state is shared between documents, so separate exports
//! can be parsed on separate threads.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::parser::Parser;
//! use chatlens::parsers::WhatsAppParser;
//! use std::path::Path;
//!
//! let parser = WhatsAppParser::new();
//! let table = parser.parse(Path::new("WhatsApp Chat with Team.txt"))?;
//! println!("{} records", table.len());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;

use crate::core::models::RecordTable;
use crate::error::ChatlensError;

/// Trait for parsing chat exports into a record table.
///
/// Implementors provide [`name`](Parser::name) and
/// [`parse_str`](Parser::parse_str); reading files and decoding bytes have
/// default implementations on top of those.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses export content already in memory.
    ///
    /// # Errors
    ///
    /// Per-record problems never fail the parse. Errors are reserved for
    /// setup failures such as an invalid pattern.
    fn parse_str(&self, content: &str) -> Result<RecordTable, ChatlensError>;

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read and
    /// [`ChatlensError::Utf8`] if it is not valid UTF-8.
    fn parse(&self, path: &Path) -> Result<RecordTable, ChatlensError> {
        let bytes = std::fs::read(path)?;
        self.parse_bytes(bytes)
    }

    /// Decodes raw bytes as UTF-8, then parses them.
    ///
    /// This is the entry point for uploaded documents.
    fn parse_bytes(&self, bytes: Vec<u8>) -> Result<RecordTable, ChatlensError> {
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: "input decoding",
            source,
        })?;
        self.parse_str(&content)
    }

    /// Parses a chat export file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<RecordTable, ChatlensError> {
        self.parse(Path::new(path))
    }
}
