//! Chat export parsers.
//!
//! Each parser implements the [`Parser`](crate::parser::Parser) trait.
//!
//! # Available Parsers
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports
//!
//! # Example
//!
//! ```rust
//! use chatlens::parsers::create_parser;
//! use chatlens::config::ParseConfig;
//!
//! let parser = create_parser(ParseConfig::default());
//! assert_eq!(parser.name(), "WhatsApp");
//! ```

mod whatsapp;

pub use whatsapp::WhatsAppParser;

use crate::config::ParseConfig;
use crate::parser::Parser;

/// Creates a boxed parser for the given configuration.
pub fn create_parser(config: ParseConfig) -> Box<dyn Parser> {
    Box::new(WhatsAppParser::with_config(config))
}
