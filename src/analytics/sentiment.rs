//! Lexicon-based sentiment polarity.
//!
//! Each word found in the lexicon contributes its score (-5..=5). The
//! built-in lexicon is a curated subset of AFINN-165: about 250 common chat
//! words, not the full 3.3k list. A message's polarity is the sum divided by
//! five times the number of scored words, so it lies in `[-1, 1]`. A negator (`not`, `no`,
//! `never`, any `...n't`) directly before a scored word flips and halves it.

use std::collections::HashMap;

use tracing::debug;

use super::stats::round_to;
use super::types::{SentimentLabel, SentimentSummary};
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;

/// Curated AFINN-165 subset as tab-separated `word\tscore` lines.
const AFINN_LEXICON: &str = include_str!("../../data/afinn.txt");

const NEGATORS: [&str; 4] = ["not", "no", "never", "cannot"];
const NEGATION_FACTOR: f64 = -0.5;
const MAX_SCORE: f64 = 5.0;

/// Scores text against a word lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: HashMap<String, i8>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Uses the built-in lexicon.
    pub fn new() -> Self {
        Self::from_lexicon(AFINN_LEXICON)
    }

    /// Builds a scorer from `word\tscore` lines. Malformed lines are ignored.
    pub fn from_lexicon(text: &str) -> Self {
        let lexicon: HashMap<String, i8> = text
            .lines()
            .filter_map(|line| {
                let (word, score) = line.split_once('\t')?;
                let score = score.trim().parse::<i8>().ok()?;
                Some((word.trim().to_lowercase(), score))
            })
            .collect();
        debug!(entries = lexicon.len(), "sentiment lexicon loaded");
        Self { lexicon }
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Polarity of one text in `[-1, 1]`; `0.0` when no word is scored.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut scored = 0u32;
        let mut negate = false;

        for word in words(text) {
            if let Some(&score) = self.lexicon.get(&word) {
                let value = f64::from(score);
                sum += if negate { value * NEGATION_FACTOR } else { value };
                scored += 1;
            }
            negate = is_negator(&word);
        }

        if scored == 0 {
            return 0.0;
        }
        (sum / (MAX_SCORE * f64::from(scored))).clamp(-1.0, 1.0)
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace('’', "'"))
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Mean polarity over every message in the selection.
///
/// An empty selection is neutral with a score of `0.0`.
pub fn sentiment_summary(
    filter: &SenderFilter,
    table: &RecordTable,
    scorer: &SentimentScorer,
) -> SentimentSummary {
    let (total, messages) = table
        .select(filter)
        .fold((0.0, 0usize), |(total, n), r| (total + scorer.polarity(&r.body), n + 1));

    if messages == 0 {
        return SentimentSummary::default();
    }

    let score = round_to(total / messages as f64, 3);
    SentimentSummary {
        score,
        label: SentimentLabel::from_score(score),
        messages,
    }
}
