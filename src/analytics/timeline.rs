//! Monthly and daily message series.
//!
//! Records without a timestamp have no calendar position and are skipped.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::{DailyPoint, MonthlyPoint};
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;

/// Messages per calendar month, oldest first.
pub fn monthly_timeline(filter: &SenderFilter, table: &RecordTable) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();

    for record in table.select(filter).filter(|r| r.timestamp.is_some()) {
        let f = &record.fields;
        months
            .entry((f.year, f.month_number))
            .or_insert((f.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), (month_name, messages))| MonthlyPoint {
            year,
            month_number,
            month_name: month_name.to_string(),
            label: format!("{month_name}-{year}"),
            messages,
        })
        .collect()
}

/// Messages per day, oldest first. Days without messages are absent.
pub fn daily_timeline(filter: &SenderFilter, table: &RecordTable) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for ts in table.select(filter).filter_map(|r| r.timestamp) {
        *days.entry(ts.date()).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}

/// First and last day with a message, if any.
pub fn date_span(filter: &SenderFilter, table: &RecordTable) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = table.select(filter).filter_map(|r| r.timestamp.map(|ts| ts.date()));
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageRecord, Sender};

    fn at(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|day| day.and_hms_opt(10, 0, 0))
    }

    fn table() -> RecordTable {
        RecordTable::new(vec![
            MessageRecord::new(at(2024, 2, 1), Sender::user("A"), "x"),
            MessageRecord::new(at(2023, 12, 31), Sender::user("B"), "x"),
            MessageRecord::new(None, Sender::user("A"), "x"),
            MessageRecord::new(at(2024, 2, 1), Sender::user("B"), "x"),
            MessageRecord::new(at(2024, 1, 15), Sender::user("A"), "x"),
        ])
    }

    #[test]
    fn test_monthly_chronological() {
        let months = monthly_timeline(&SenderFilter::Overall, &table());
        let labels: Vec<(&str, usize)> = months.iter().map(|m| (m.label.as_str(), m.messages)).collect();
        assert_eq!(labels, vec![
            ("December-2023", 1),
            ("January-2024", 1),
            ("February-2024", 2)
        ]);
        assert_eq!(months[2].month_number, 2);
    }

    #[test]
    fn test_daily_skips_missing_timestamps() {
        let days = daily_timeline(&SenderFilter::user("A"), &table());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(days.iter().map(|d| d.messages).sum::<usize>(), 2);
    }

    #[test]
    fn test_date_span() {
        let span = date_span(&SenderFilter::Overall, &table()).unwrap();
        assert_eq!(span.0, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(span.1, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(date_span(&SenderFilter::Overall, &RecordTable::default()).is_none());
    }

    #[test]
    fn test_empty_table() {
        assert!(monthly_timeline(&SenderFilter::Overall, &RecordTable::default()).is_empty());
        assert!(daily_timeline(&SenderFilter::Overall, &RecordTable::default()).is_empty());
    }
}
