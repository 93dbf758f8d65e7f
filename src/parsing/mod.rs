//! Building blocks of the export parser.
//!
//! The pipeline is strictly sequential per record:
//!
//! 1. [`tokenizer`] splits the document at timestamp boundaries.
//! 2. [`sender`] separates the `"Name: "` prefix from the content.
//! 3. [`datetime`] turns the boundary text into a [`chrono::NaiveDateTime`].
//! 4. [`fields`] derives calendar and clock fields from it.
//!
//! [`WhatsAppParser`](crate::parsers::WhatsAppParser) wires the stages
//! together; they are public so each can be used and tested on its own.

pub mod datetime;
pub mod fields;
pub mod sender;
pub mod tokenizer;

pub use datetime::{DateNormalizer, DateOrder};
pub use fields::{derive_time_fields, period_label};
pub use sender::SenderSplitter;
pub use tokenizer::{BOUNDARY_PATTERN, RawEntry, Tokenizer};
