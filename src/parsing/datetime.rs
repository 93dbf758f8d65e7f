//! Turning boundary text into structured date-times.
//!
//! The boundary carries a 12-hour clock and a numeric date whose field order
//! depends on the phone's locale. US exports write month first
//! (`1/15/24, 3:45 PM - `), many others write day first
//! (`15/1/24, 3:45 PM - `). The order is an explicit [`DateOrder`] input, never
//! guessed per line.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Anchored form of the boundary with capture groups for every component.
const TIMESTAMP_PATTERN: &str =
    r"^\s*(\d{1,2})/(\d{1,2})/(\d{2,4}),\s*(\d{1,2}):(\d{2})\s?((?i:am|pm))\s?-\s*$";

/// Order of the first two numeric date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// US order: `M/D/YY`
    /// Example: 1/15/24, 3:45 PM -
    #[default]
    MonthFirst,
    /// Day first: `D/M/YY`
    /// Example: 15/1/24, 3:45 PM -
    DayFirst,
}

impl DateOrder {
    /// Returns all supported orders.
    pub fn all() -> &'static [DateOrder] {
        &[DateOrder::MonthFirst, DateOrder::DayFirst]
    }

    /// Maps the two leading fields to `(month, day)`.
    fn month_day(self, first: u32, second: u32) -> (u32, u32) {
        match self {
            DateOrder::MonthFirst => (first, second),
            DateOrder::DayFirst => (second, first),
        }
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "M/D/Y"),
            DateOrder::DayFirst => write!(f, "D/M/Y"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month_first" | "month-first" | "mdy" | "us" => Ok(DateOrder::MonthFirst),
            "day_first" | "day-first" | "dmy" | "eu" => Ok(DateOrder::DayFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: month_first, day_first",
                s
            )),
        }
    }
}

/// Parses boundary strings into [`NaiveDateTime`] values.
///
/// Anything that does not fit the format, or names an impossible date or
/// time (month 13, February 30th, hour 0 on a 12-hour clock, minute 75),
/// yields `None` instead of an error.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    pattern: Regex,
    order: DateOrder,
    century: i32,
}

impl DateNormalizer {
    /// Creates a normalizer for the given field order.
    ///
    /// `century` is added to two-digit years (`2000` maps `24` to `2024`).
    /// Four-digit years are taken as written.
    pub fn new(order: DateOrder, century: i32) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TIMESTAMP_PATTERN)?,
            order,
            century,
        })
    }

    /// Returns the configured field order.
    pub fn order(&self) -> DateOrder {
        self.order
    }

    /// Parses one boundary string.
    pub fn normalize(&self, raw: &str) -> Option<NaiveDateTime> {
        let caps = self.pattern.captures(raw)?;

        let first: u32 = caps.get(1)?.as_str().parse().ok()?;
        let second: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year_str = caps.get(3)?.as_str();
        let hour12: u32 = caps.get(4)?.as_str().parse().ok()?;
        let minute: u32 = caps.get(5)?.as_str().parse().ok()?;
        let is_pm = caps.get(6)?.as_str().eq_ignore_ascii_case("pm");

        let year: i32 = match year_str.len() {
            2 => self.century.checked_add(year_str.parse::<i32>().ok()?)?,
            4 => year_str.parse().ok()?,
            _ => return None,
        };

        let (month, day) = self.order.month_day(first, second);
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(to_24_hour(hour12, is_pm)?, minute, 0)?;

        Some(NaiveDateTime::new(date, time))
    }
}

/// Converts a 12-hour clock reading. Hours outside 1..=12 are rejected.
fn to_24_hour(hour: u32, is_pm: bool) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}
