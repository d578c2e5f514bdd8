//! Text normalization shared by the extractors.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Regex for URLs as they appear in posts (scheme plus any non-whitespace run).
pub(crate) static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("Invalid URL regex"));

static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@[a-z0-9_]+").expect("Invalid mention regex"));

static EDGE_NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+|\W+$").expect("Invalid edge regex"));

/// Lowercases, collapses whitespace runs to a single space and trims.
pub fn normalize(s: &str) -> String {
    collapse_whitespace(&s.to_lowercase())
}

/// Collapses whitespace runs to a single space and trims, keeping case.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_REGEX.replace_all(s, " ").trim().to_string()
}

/// Removes URLs, @-mentions and the given hashtag pattern, then collapses whitespace.
pub(crate) fn strip_links_and_tags(s: &str, hashtag: &Regex) -> String {
    let without_urls = URL_REGEX.replace_all(s, "");
    let without_mentions = MENTION_REGEX.replace_all(&without_urls, "");
    let without_tag = hashtag.replace_all(&without_mentions, "");
    collapse_whitespace(&without_tag)
}

/// Trims leading and trailing non-word characters.
pub(crate) fn trim_non_word(s: &str) -> String {
    EDGE_NON_WORD_REGEX.replace_all(s, "").trim().to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Builds a case-insensitive regex matching `phrase` as a whole word or phrase.
///
/// Word boundaries are only asserted next to word characters, so a phrase
/// ending in punctuation ("check it out!") still matches before a space.
pub(crate) fn whole_word(phrase: &str) -> Result<Regex, regex::Error> {
    let lead = if phrase.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
    let tail = if phrase.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };
    Regex::new(&format!("(?i){}{}{}", lead, regex::escape(phrase), tail))
}
