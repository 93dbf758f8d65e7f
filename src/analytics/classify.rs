//! Message-type classification.
//!
//! A body is assigned the category of the first rule in [`RULES`] whose
//! predicate holds. The order is fixed:
//!
//! 1. `Media` - body equals the media placeholder
//! 2. `Link` - body contains a URL
//! 3. `Emoji` - body contains an emoji
//! 4. `Text` - everything else
//!
//! A media placeholder never counts as a link, and a message with both a URL
//! and an emoji is a `Link`.

use super::emoji::EmojiMatcher;
use super::links::LinkExtractor;
use super::types::{KindCount, MessageKind};
use crate::core::filter::SenderFilter;
use crate::core::models::RecordTable;

/// Rule test over a message body.
pub type Predicate = fn(&MessageClassifier<'_>, &str) -> bool;

/// Classification rules in evaluation order.
pub const RULES: [(MessageKind, Predicate); 4] = [
    (MessageKind::Media, is_media),
    (MessageKind::Link, has_link),
    (MessageKind::Emoji, has_emoji),
    (MessageKind::Text, always),
];

fn is_media(c: &MessageClassifier<'_>, body: &str) -> bool {
    body == c.media_marker
}

fn has_link(c: &MessageClassifier<'_>, body: &str) -> bool {
    c.links.has_link(body)
}

fn has_emoji(c: &MessageClassifier<'_>, body: &str) -> bool {
    c.emoji.contains(body)
}

fn always(_: &MessageClassifier<'_>, _: &str) -> bool {
    true
}

/// Applies [`RULES`] with borrowed detectors.
#[derive(Debug, Clone, Copy)]
pub struct MessageClassifier<'a> {
    media_marker: &'a str,
    links: &'a LinkExtractor,
    emoji: &'a EmojiMatcher,
}

impl<'a> MessageClassifier<'a> {
    pub fn new(media_marker: &'a str, links: &'a LinkExtractor, emoji: &'a EmojiMatcher) -> Self {
        Self {
            media_marker,
            links,
            emoji,
        }
    }

    /// Category of the first matching rule.
    pub fn classify(&self, body: &str) -> MessageKind {
        RULES
            .iter()
            .find(|(_, applies)| applies(self, body))
            .map_or(MessageKind::Text, |(kind, _)| *kind)
    }
}

/// Counts per category for the selection, most frequent first.
///
/// Ties keep rule order. Categories with no messages are left out, so an
/// empty selection gives an empty vector.
pub fn message_type_breakdown(
    filter: &SenderFilter,
    table: &RecordTable,
    classifier: &MessageClassifier<'_>,
) -> Vec<KindCount> {
    let mut counts: Vec<KindCount> = RULES
        .iter()
        .map(|(kind, _)| KindCount {
            kind: *kind,
            count: 0,
        })
        .collect();

    for record in table.select(filter) {
        let kind = classifier.classify(&record.body);
        if let Some(slot) = counts.iter_mut().find(|c| c.kind == kind) {
            slot.count += 1;
        }
    }

    counts.retain(|c| c.count > 0);
    // Stable sort keeps rule order for equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
