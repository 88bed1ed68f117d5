//! Markup stripping for provider text
//!
//! The trivia provider returns HTML-encoded strings (`&quot;`, `&#039;`,
//! occasionally inline tags). Telegram polls are plain text, so everything is
//! reduced to its visible text before rendering.

use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid regex"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("invalid regex")
});
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));

/// Reduce an HTML fragment to its plain display text.
///
/// Tags are dropped, entities decoded, and whitespace runs collapsed to a
/// single space with the ends trimmed.
pub fn strip_markup(html: &str) -> String {
    let without_tags = TAG.replace_all(html, "");
    // Unknown names and invalid code points come back unchanged
    let decoded = ENTITY.replace_all(&without_tags, |caps: &regex::Captures<'_>| {
        decode_html_entities(&caps[0]).into_owned()
    });
    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}
