//! Parsed chat entries.
//!
//! This module provides [`MessageRecord`], one row of the record table, together
//! with the [`Sender`] classification and the derived [`TimeFields`].
//!
//! # Overview
//!
//! A record consists of:
//! - **Required**: `sender` and `body`
//! - **Nullable**: `timestamp` (null when the export line could not be dated)
//! - **Derived**: calendar and clock fields computed once from `timestamp`,
//!   never null
//!
//! # Examples
//!
//! ```
//! use chatlens::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
//!     .and_then(|d| d.and_hms_opt(15, 45, 0));
//! let record = MessageRecord::new(ts, Sender::user("Alice"), "Hello there\n");
//!
//! assert_eq!(record.sender().as_str(), "Alice");
//! assert_eq!(record.fields().period, "15-16");
//! assert_eq!(record.fields().day_name, "Tuesday");
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::fields::derive_time_fields;

/// Textual form of [`Sender::Notification`].
pub const NOTIFICATION_SENDER: &str = "group_notification";

/// Who wrote a message.
///
/// Entries without a `"Name: "` prefix (member added, encryption notice,
/// subject changed, ...) are [`Notification`](Sender::Notification). Per-user
/// analytics exclude them.
///
/// Serializes as a plain string; the notification variant becomes
/// `"group_notification"`. The mapping is not one-to-one: a participant
/// whose display name is literally `group_notification` reads back as
/// [`Notification`](Sender::Notification).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    /// System or group notification with no human author.
    Notification,
    /// A named participant.
    User(String),
}

impl Sender {
    /// Creates a [`Sender::User`].
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the display form of this sender.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::Notification => NOTIFICATION_SENDER,
            Sender::User(name) => name,
        }
    }

    /// Returns `true` for the notification sentinel.
    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::Notification)
    }

    /// Returns the participant name, or `None` for notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::Notification => None,
            Sender::User(name) => Some(name),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Sender {
    fn from(value: String) -> Self {
        if value == NOTIFICATION_SENDER {
            Sender::Notification
        } else {
            Sender::User(value)
        }
    }
}

impl From<Sender> for String {
    fn from(value: Sender) -> Self {
        match value {
            Sender::Notification => NOTIFICATION_SENDER.to_string(),
            Sender::User(name) => name,
        }
    }
}

/// Calendar and clock fields derived from a record's timestamp.
///
/// | Field | Null-timestamp value |
/// |-------|----------------------|
/// | `day_name` | `""` |
/// | `date_only` | `""` |
/// | `year` | `0` |
/// | `month_number` | `0` |
/// | `month_name` | `""` |
/// | `day_of_month` | `0` |
/// | `hour` | `0` |
/// | `minute` | `0` |
/// | `period` | `"00-01"` (from the defaulted hour) |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFields {
    /// English weekday name, e.g. `Tuesday`.
    pub day_name: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date_only: String,
    pub year: i32,
    /// 1..=12
    pub month_number: u32,
    /// English month name, e.g. `January`.
    pub month_name: String,
    pub day_of_month: u32,
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
    /// One-hour bucket label `HH-HH`, second hour modulo 24.
    pub period: String,
}

/// One parsed chat entry.
///
/// Records are created by the parser and never mutated afterwards; the
/// derived [`TimeFields`] are computed in [`MessageRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, `None` if the timestamp was unparseable.
    pub timestamp: Option<NaiveDateTime>,

    /// Author of the message, or the notification sentinel.
    pub sender: Sender,

    /// Raw message text.
    ///
    /// Keeps the trailing newline of the export and any continuation lines.
    /// Media placeholders such as `<Media omitted>` appear as literal text.
    pub body: String,

    /// Fields derived from `timestamp`.
    #[serde(flatten)]
    pub fields: TimeFields,
}

impl MessageRecord {
    /// Creates a record and derives its time fields.
    pub fn new(timestamp: Option<NaiveDateTime>, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
            fields: derive_time_fields(timestamp),
        }
    }

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if it could be parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the derived time fields.
    pub fn fields(&self) -> &TimeFields {
        &self.fields
    }

    /// Returns `true` if this entry is a group notification.
    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }

    /// Number of whitespace-separated words in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_record_new_derives_fields() {
        let record = MessageRecord::new(Some(ts(2024, 1, 2, 15, 45)), Sender::user("Alice"), "Hi\n");
        assert_eq!(record.fields().year, 2024);
        assert_eq!(record.fields().month_name, "January");
        assert_eq!(record.fields().hour, 15);
        assert_eq!(record.fields().minute, 45);
        assert_eq!(record.fields().date_only, "2024-01-02");
    }

    #[test]
    fn test_record_without_timestamp() {
        let record = MessageRecord::new(None, Sender::user("Bob"), "late\n");
        assert!(record.timestamp().is_none());
        assert_eq!(record.fields().hour, 0);
        assert_eq!(record.fields().period, "00-01");
        assert_eq!(record.fields().day_name, "");
    }

    #[test]
    fn test_sender_text_forms() {
        assert_eq!(Sender::Notification.as_str(), "group_notification");
        assert_eq!(Sender::user("Alice").to_string(), "Alice");
        assert_eq!(Sender::from("group_notification".to_string()), Sender::Notification);
        assert_eq!(Sender::user("Alice").name(), Some("Alice"));
        assert_eq!(Sender::Notification.name(), None);
    }

    #[test]
    fn test_word_count() {
        let record = MessageRecord::new(None, Sender::user("A"), "  one two\nthree ");
        assert_eq!(record.word_count(), 3);
    }

    #[test]
    fn test_record_serialization() {
        let record = MessageRecord::new(None, Sender::Notification, "Alice added Bob\n");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sender\":\"group_notification\""));
        assert!(json.contains("\"period\":\"00-01\""));

        let parsed: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
