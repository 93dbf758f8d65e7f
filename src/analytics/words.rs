//! Word frequencies and stop words.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::rank_by_count;
use super::types::WordCount;
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;
use crate::error::ChatlensError;

/// Words left out of frequency rankings.
///
/// The list file is whitespace separated; entries are case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; nothing is excluded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a stop-word file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] if the file cannot be read.
    /// A frequency ranking without its stop words would be wrong, so this is
    /// not recovered from.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ChatlensError::missing_resource("stop-word list", path, source))?;
        let list = Self::from_text(&text);
        debug!(path = %path.display(), words = list.len(), "loaded stop words");
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The `top_n` most frequent words typed by people.
///
/// Notifications and media placeholders are skipped. Words are the
/// lower-cased whitespace tokens of each body; stop words are dropped.
/// Equal counts keep first-appearance order.
pub fn most_common_words(
    filter: &SenderFilter,
    table: &RecordTable,
    stop_words: &StopWords,
    media_marker: &str,
    top_n: usize,
) -> Vec<WordCount> {
    let words = table
        .select(filter)
        .filter(|r| !r.is_notification() && r.body != media_marker)
        .flat_map(|r| tokens(&r.body))
        .filter(|w| !stop_words.contains(w));

    rank_by_count(words)
        .into_iter()
        .take(top_n)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Frequencies of every word in the selection, for word-cloud rendering.
///
/// Unlike [`most_common_words`] nothing is excluded.
pub fn word_cloud(filter: &SenderFilter, table: &RecordTable) -> Vec<WordCount> {
    rank_by_count(table.select(filter).flat_map(|r| tokens(&r.body)))
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

fn tokens(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split_whitespace().map(str::to_lowercase)
}
