//! Canonical identity keys for fighter records.
//!
//! The same fighter surfaces under several spellings: URL slugs
//! (`jon-jones`), header spans (`JON` / `JONES`), opponent links. One
//! canonical form keys the aggregation map and doubles as the display
//! name when no structured bio was seen.

use url::Url;

/// Canonicalizes a display name: hyphens become spaces, words are
/// title-cased and rejoined with single spaces. Idempotent, so keys can be
/// re-normalized freely.
pub fn normalize(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Splits a normalized key into display name parts: first token, then the
/// remaining tokens joined. A single-token key is all first name.
pub fn split_key(key: &str) -> (String, String) {
    let mut words = key.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

/// Derives the identity key from a page URL's trailing path segment
/// (e.g. `.../id/5134399/nick-klein` yields "Nick Klein").
pub fn key_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let slug = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?;
    let key = normalize(slug);
    (!key.is_empty()).then_some(key)
}
