//! Separating the author prefix from a message body.

use regex::Regex;

use crate::error::Result;
use crate::message::Sender;

/// Non-empty, non-greedy prefix followed by the first `": "`.
const SENDER_PATTERN: &str = r"(?s)^(.+?): ";

/// Splits `"Name: content"` bodies.
///
/// Only the first `": "` counts, so content may contain colons freely.
/// Bodies without the prefix ("Alice added Bob", the encryption notice, ...)
/// become [`Sender::Notification`] with the body unchanged.
#[derive(Debug, Clone)]
pub struct SenderSplitter {
    prefix: Regex,
}

impl SenderSplitter {
    /// Compiles the prefix pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            prefix: Regex::new(SENDER_PATTERN)?,
        })
    }

    /// Returns the sender and the content that follows the prefix.
    pub fn split(&self, body: &str) -> (Sender, String) {
        match self.prefix.captures(body) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                let name = caps.get(1).map_or("", |m| m.as_str());
                (Sender::user(name), body[whole..].to_string())
            }
            None => (Sender::Notification, body.to_string()),
        }
    }
}
