//! Reassembling a cleaned URL and re-embedding it in the surrounding text.

use crate::models::{EditorState, ParsedUrl};

/// Rebuild a URL from its base, the enabled parameters (in order), and the
/// fragment. Keys and values are emitted exactly as stored.
pub fn clean_url(url: &ParsedUrl) -> String {
    let query = url
        .params
        .iter()
        .filter(|p| p.enabled)
        .map(|p| format!("{}={}", p.key, p.value))
        .collect::<Vec<_>>()
        .join("&");

    let mut out = url.base.clone();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if !url.hash.is_empty() {
        out.push_str(&url.hash);
    }
    out
}

/// Produce the final output string: the cleaned URL placed back between
/// prefix and suffix. A single space is inserted after a non-empty prefix
/// that does not already end in whitespace, and before a non-empty suffix
/// that does not already start with one.
pub fn build(state: &EditorState) -> String {
    let url = clean_url(&state.url);

    let mut out = String::with_capacity(state.prefix.len() + url.len() + state.suffix.len() + 2);
    out.push_str(&state.prefix);
    if !state.prefix.is_empty() && !state.prefix.ends_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(&url);
    if !state.suffix.is_empty() && !state.suffix.starts_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(&state.suffix);
    out
}
