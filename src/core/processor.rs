//! Summary of a parse run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::models::RecordTable;

/// Counts describing how a document was parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub records: usize,
    pub user_messages: usize,
    pub notifications: usize,
    pub missing_timestamps: usize,
    pub senders: usize,
}

impl ParseStats {
    /// Collects counts from a parsed table.
    pub fn from_table(table: &RecordTable) -> Self {
        let mut stats = Self {
            records: table.len(),
            ..Self::default()
        };
        let mut names = HashSet::new();

        for record in table {
            match record.sender.name() {
                Some(name) => {
                    stats.user_messages += 1;
                    names.insert(name);
                }
                None => stats.notifications += 1,
            }
            if record.timestamp.is_none() {
                stats.missing_timestamps += 1;
            }
        }

        stats.senders = names.len();
        stats
    }

    /// Percentage of records with a parsed timestamp.
    pub fn timestamp_coverage(&self) -> f64 {
        if self.records == 0 {
            return 0.0;
        }
        (1.0 - (self.missing_timestamps as f64 / self.records as f64)) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageRecord, Sender};
    use chrono::NaiveDate;

    #[test]
    fn test_from_table() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(9, 0, 0));
        let table = RecordTable::new(vec![
            MessageRecord::new(ts, Sender::user("Alice"), "hi"),
            MessageRecord::new(None, Sender::user("Bob"), "yo"),
            MessageRecord::new(ts, Sender::user("Alice"), "again"),
            MessageRecord::new(ts, Sender::Notification, "Alice added Bob"),
        ]);

        let stats = ParseStats::from_table(&table);
        assert_eq!(stats.records, 4);
        assert_eq!(stats.user_messages, 3);
        assert_eq!(stats.notifications, 1);
        assert_eq!(stats.missing_timestamps, 1);
        assert_eq!(stats.senders, 2);
        assert!((stats.timestamp_coverage() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_table() {
        let stats = ParseStats::from_table(&RecordTable::default());
        assert_eq!(stats, ParseStats::default());
        assert!(stats.timestamp_coverage().abs() < f64::EPSILON);
    }
}
