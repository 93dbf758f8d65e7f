//! URL detection in message bodies.

use regex::Regex;

use crate::error::ChatlensError;

/// Schemes and `www.` hosts in any case, or bare domains on common
/// lowercase top-level domains.
const URL_PATTERN: &str = r#"(?i:\b(?:https?://|www\.))[^\s<>"']+|\b[A-Za-z0-9][A-Za-z0-9-]*(?:\.[A-Za-z0-9-]+)*\.(?:com|org|net|edu|gov|io|co|in|me|ly|gl|be|app|dev|info|uk|us|ai)\b(?:/[^\s<>"']*)?"#;

/// Punctuation that usually ends a sentence rather than a URL.
const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Finds URLs in free text.
///
/// Construct one and pass it to the queries that need it; the pattern is
/// compiled once here.
///
/// ```rust
/// use chatlens::analytics::LinkExtractor;
///
/// let links = LinkExtractor::new()?;
/// assert_eq!(links.find_urls("see https://example.com/a, ok?"), vec!["https://example.com/a"]);
/// assert_eq!(links.count("no links here"), 0);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Compiles the URL pattern.
    pub fn new() -> Result<Self, ChatlensError> {
        Ok(Self {
            pattern: Regex::new(URL_PATTERN)?,
        })
    }

    fn urls<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.pattern
            .find_iter(text)
            .filter(move |m| !continues_word(&text[..m.start()]))
            .map(|m| m.as_str().trim_end_matches(TRAILING))
            .filter(|url| !url.is_empty())
    }

    /// All URLs in `text`, in order of appearance.
    ///
    /// The domain half of an email address is not a URL.
    pub fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.urls(text).collect()
    }

    /// Number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.urls(text).count()
    }

    /// Returns `true` if `text` contains at least one URL.
    pub fn has_link(&self, text: &str) -> bool {
        self.urls(text).next().is_some()
    }
}

/// A match right after `@`, or after `word.`, is the tail of an email
/// address or of a longer token.
fn continues_word(before: &str) -> bool {
    let mut rev = before.chars().rev();
    match rev.next() {
        Some('@') => true,
        Some('.') => rev.next().is_some_and(char::is_alphanumeric),
        _ => false,
    }
}
