//! When people talk: weekday, month, hour and heatmap distributions.
//!
//! Records without a timestamp are skipped; their defaulted fields would
//! otherwise pile up in hour 0.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};

use super::types::ActivityHeatmap;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;
use crate::parsing::period_label;

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Messages per weekday, busiest first; ties in calendar order.
pub fn week_activity_map(filter: &SenderFilter, table: &RecordTable) -> Vec<(String, usize)> {
    let mut counts = [0usize; 7];
    for ts in table.select(filter).filter_map(|r| r.timestamp) {
        counts[ts.weekday().num_days_from_monday() as usize] += 1;
    }
    ranked(&DAY_NAMES, &counts)
}

/// Messages per month name across all years, busiest first; ties in calendar order.
pub fn month_activity_map(filter: &SenderFilter, table: &RecordTable) -> Vec<(String, usize)> {
    let mut counts = [0usize; 12];
    for ts in table.select(filter).filter_map(|r| r.timestamp) {
        counts[ts.month0() as usize] += 1;
    }
    ranked(&MONTH_NAMES, &counts)
}

fn ranked(names: &[&str], counts: &[usize]) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = names
        .iter()
        .zip(counts)
        .filter(|&(_, &count)| count > 0)
        .map(|(name, &count)| ((*name).to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Weekday by hour-period counts.
///
/// An empty selection, or one where no record has a timestamp, returns
/// [`ActivityHeatmap::default`], which reports [`is_empty`](ActivityHeatmap::is_empty).
pub fn activity_heatmap(filter: &SenderFilter, table: &RecordTable) -> ActivityHeatmap {
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    for ts in table.select(filter).filter_map(|r| r.timestamp) {
        *cells
            .entry((ts.weekday().num_days_from_monday(), ts.hour()))
            .or_insert(0) += 1;
    }
    if cells.is_empty() {
        return ActivityHeatmap::default();
    }

    let mut day_idx: Vec<u32> = cells.keys().map(|&(d, _)| d).collect();
    day_idx.dedup();
    let mut hours: Vec<u32> = cells.keys().map(|&(_, h)| h).collect();
    hours.sort_unstable();
    hours.dedup();

    let counts: Vec<Vec<usize>> = day_idx
        .iter()
        .map(|&d| {
            hours
                .iter()
                .map(|&h| cells.get(&(d, h)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    ActivityHeatmap {
        days: day_idx
            .iter()
            .map(|&d| DAY_NAMES[d as usize].to_string())
            .collect(),
        periods: hours.iter().map(|&h| period_label(h)).collect(),
        counts,
    }
}

/// Messages per hour of day, ascending by hour. Hours without messages are absent.
pub fn hourly_activity(filter: &SenderFilter, table: &RecordTable) -> Vec<(u32, usize)> {
    let mut hours: BTreeMap<u32, usize> = BTreeMap::new();
    for ts in table.select(filter).filter_map(|r| r.timestamp) {
        *hours.entry(ts.hour()).or_insert(0) += 1;
    }
    hours.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageRecord, Sender};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|day| day.and_hms_opt(h, 15, 0))
    }

    // 2024-01-01 is a Monday
    fn table() -> RecordTable {
        RecordTable::new(vec![
            MessageRecord::new(at(2024, 1, 3, 23), Sender::user("A"), "x"),
            MessageRecord::new(at(2024, 1, 1, 9), Sender::user("B"), "x"),
            MessageRecord::new(at(2024, 1, 3, 23), Sender::user("A"), "x"),
            MessageRecord::new(None, Sender::user("A"), "x"),
            MessageRecord::new(at(2024, 3, 1, 0), Sender::user("B"), "x"),
            MessageRecord::new(at(2024, 1, 1, 9), Sender::Notification, "x"),
        ])
    }

    #[test]
    fn test_week_activity_map() {
        let map = week_activity_map(&SenderFilter::Overall, &table());
        assert_eq!(map, vec![
            ("Monday".to_string(), 2),
            ("Wednesday".to_string(), 2),
            ("Friday".to_string(), 1)
        ]);
    }

    #[test]
    fn test_month_activity_map() {
        let map = month_activity_map(&SenderFilter::user("B"), &table());
        assert_eq!(map, vec![("January".to_string(), 1), ("March".to_string(), 1)]);
    }

    #[test]
    fn test_heatmap_layout() {
        let heatmap = activity_heatmap(&SenderFilter::Overall, &table());
        assert_eq!(heatmap.days, vec!["Monday", "Wednesday", "Friday"]);
        assert_eq!(heatmap.periods, vec!["00-01", "09-10", "23-00"]);
        assert_eq!(heatmap.get("Wednesday", "23-00"), 2);
        assert_eq!(heatmap.get("Friday", "00-01"), 1);
        assert_eq!(heatmap.get("Monday", "23-00"), 0);
        assert_eq!(heatmap.total(), 5);
    }

    #[test]
    fn test_heatmap_empty_states() {
        assert!(activity_heatmap(&SenderFilter::Overall, &RecordTable::default()).is_empty());
        let undated = RecordTable::new(vec![MessageRecord::new(None, Sender::user("A"), "x")]);
        assert!(activity_heatmap(&SenderFilter::Overall, &undated).is_empty());
        assert!(activity_heatmap(&SenderFilter::user("Nobody"), &table()).is_empty());
    }

    #[test]
    fn test_hourly_activity() {
        let hours = hourly_activity(&SenderFilter::Overall, &table());
        assert_eq!(hours, vec![(0, 1), (9, 2), (23, 2)]);
    }
}
