//! Locating a URL inside free-form pasted text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExtractedText;

// Any http(s) scheme followed by a run of non-whitespace. The run is taken
// whole, so sentence punctuation glued to the URL stays part of it; the
// parser rejects the rare result that is no longer a valid URL.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Split `text` around the first URL-like substring. Returns `None` when the
/// text contains no `http://` or `https://` run. Only the first match is
/// considered.
pub fn extract(text: &str) -> Option<ExtractedText> {
    let found = URL_PATTERN.find(text)?;
    Some(ExtractedText {
        prefix: text[..found.start()].to_string(),
        url: found.as_str().to_string(),
        suffix: text[found.end()..].to_string(),
    })
}
