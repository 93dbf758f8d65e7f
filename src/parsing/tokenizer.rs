//! Splitting a raw export into `(timestamp, body)` pairs.
//!
//! Every message in an Android-style export starts with a boundary such as
//! `1/2/24, 3:45 PM - `. The text between one boundary and the next is that
//! message's body, including any continuation lines.

use regex::Regex;

use crate::error::Result;

/// Timestamp boundary that starts each message.
///
/// `D{1,2}/D{1,2}/D{2,4}, H{1,2}:MM AM|PM - ` with a case-insensitive meridiem
/// and optional whitespace before the meridiem and the dash.
pub const BOUNDARY_PATTERN: &str =
    r"\d{1,2}/\d{1,2}/\d{2,4},\s*\d{1,2}:\d{2}\s?(?i:am|pm)\s?-\s";

/// One tokenized message, borrowing from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// The boundary text, e.g. `"1/2/24, 3:45 PM - "`.
    pub timestamp: &'a str,
    /// Everything up to the next boundary (or the end of the document).
    pub body: &'a str,
}

/// Boundary-based splitter.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    boundary: Regex,
}

impl Tokenizer {
    /// Compiles the boundary pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            boundary: Regex::new(BOUNDARY_PATTERN)?,
        })
    }

    /// Splits `text` into entries in document order.
    ///
    /// Text before the first boundary is not a message and is dropped. A
    /// document without any boundary yields an empty vector.
    pub fn split<'a>(&self, text: &'a str) -> Vec<RawEntry<'a>> {
        let matches: Vec<_> = self.boundary.find_iter(text).collect();

        matches
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let body_end = matches.get(i + 1).map_or(text.len(), |next| next.start());
                RawEntry {
                    timestamp: m.as_str(),
                    body: &text[m.end()..body_end],
                }
            })
            .collect()
    }

    /// Counts boundaries without building entries.
    pub fn count(&self, text: &str) -> usize {
        self.boundary.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new().unwrap()
    }

    #[test]
    fn test_split_two_messages() {
        let text = "1/2/24, 3:45 PM - Alice: Hello there\n1/2/24, 3:46 PM - Bob: <Media omitted>\n";
        let entries = tokenizer().split(text);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "1/2/24, 3:45 PM - ");
        assert_eq!(entries[0].body, "Alice: Hello there\n");
        assert_eq!(entries[1].timestamp, "1/2/24, 3:46 PM - ");
        assert_eq!(entries[1].body, "Bob: <Media omitted>\n");
    }

    #[test]
    fn test_no_boundary_is_empty() {
        assert!(tokenizer().split("just plain text").is_empty());
        assert!(tokenizer().split("").is_empty());
    }

    #[test]
    fn test_preamble_is_dropped() {
        let text = "Chat export header\n12/31/23, 11:59 PM - Alice: last one\n";
        let entries = tokenizer().split(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "Alice: last one\n");
    }

    #[test]
    fn test_multiline_body_kept_together() {
        let text = "1/2/24, 3:45 PM - Alice: line one\nline two\nline three\n1/2/24, 3:50 PM - Bob: ok\n";
        let entries = tokenizer().split(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body, "Alice: line one\nline two\nline three\n");
    }

    #[test]
    fn test_meridiem_variants() {
        let text = "1/2/24, 9:05 am - A: x\n1/2/2024,  10:15PM - B: y\n1/2/24, 11:00 Pm- C: z\n";
        let entries = tokenizer().split(text);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].timestamp, "1/2/2024,  10:15PM - ");
        assert_eq!(entries[2].timestamp, "1/2/24, 11:00 Pm- ");
    }

    #[test]
    fn test_24_hour_lines_are_not_boundaries() {
        let text = "15/01/2024, 10:30 - Alice: Hello\n";
        assert!(tokenizer().split(text).is_empty());
    }

    #[test]
    fn test_count_matches_split() {
        let text = "1/2/24, 3:45 PM - A: x\n1/3/24, 4:45 AM - B: y\n";
        let t = tokenizer();
        assert_eq!(t.count(text), t.split(text).len());
    }
}
