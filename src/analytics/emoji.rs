//! Emoji detection.

use regex::Regex;

use super::rank_by_count;
use super::types::EmojiCount;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;
use crate::error::ChatlensError;

/// One pictographic character per match. Digits, `#` and `*` are not matched
/// even though they can start keycap sequences.
const EMOJI_PATTERN: &str = r"[\p{Extended_Pictographic}\p{Emoji_Presentation}]";

/// Matches individual emoji characters.
///
/// ```rust
/// use chatlens::analytics::EmojiMatcher;
///
/// let emoji = EmojiMatcher::new()?;
/// assert_eq!(emoji.find("ok 👍👍 🎉").collect::<Vec<_>>(), vec!["👍", "👍", "🎉"]);
/// assert!(!emoji.contains("plain 123 #"));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmojiMatcher {
    pattern: Regex,
}

impl EmojiMatcher {
    pub fn new() -> Result<Self, ChatlensError> {
        Ok(Self {
            pattern: Regex::new(EMOJI_PATTERN)?,
        })
    }

    /// Emoji characters in `text`, in order.
    pub fn find<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Every emoji in the selection with its count, most frequent first.
///
/// Equal counts keep first-appearance order.
pub fn emoji_frequency(
    filter: &SenderFilter,
    table: &RecordTable,
    matcher: &EmojiMatcher,
) -> Vec<EmojiCount> {
    let found = table
        .select(filter)
        .flat_map(|r| matcher.find(&r.body).map(str::to_string));

    rank_by_count(found)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
