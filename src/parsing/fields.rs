//! Deriving calendar and clock fields from a timestamp.
//!
//! Nothing past this point ever sees a null: a missing timestamp produces
//! empty strings and zeros, with `hour` defaulting to `0`, so every grouping
//! downstream has a key for every record.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::message::TimeFields;

/// One-hour bucket label for `hour`, e.g. `"09-10"` or `"23-00"`.
pub fn period_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Computes every derived field for a (possibly missing) timestamp.
pub fn derive_time_fields(timestamp: Option<NaiveDateTime>) -> TimeFields {
    match timestamp {
        Some(ts) => TimeFields {
            day_name: ts.format("%A").to_string(),
            date_only: ts.format("%Y-%m-%d").to_string(),
            year: ts.year(),
            month_number: ts.month(),
            month_name: ts.format("%B").to_string(),
            day_of_month: ts.day(),
            hour: ts.hour(),
            minute: ts.minute(),
            period: period_label(ts.hour()),
        },
        None => TimeFields {
            day_name: String::new(),
            date_only: String::new(),
            year: 0,
            month_number: 0,
            month_name: String::new(),
            day_of_month: 0,
            hour: 0,
            minute: 0,
            period: period_label(0),
        },
    }
}
