use serde::{Deserialize, Serialize};

/// Result of locating a URL inside pasted text. Joining the three fields
/// back together reproduces the input string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub prefix: String,
    pub url: String,
    pub suffix: String,
}

/// A single query parameter with its enabled state. `key` and `value` are
/// fixed at parse time; only `enabled` is meant to be toggled afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>, enabled: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled,
        }
    }
}

/// A URL decomposed for editing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub base: String, // origin + path, no query or fragment
    pub params: Vec<QueryParam>,
    pub hash: String, // includes the leading '#', or empty
}

/// The single unit of mutable state the embedding UI owns. Replaced
/// wholesale on each new paste, edited field by field in between.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub prefix: String,
    pub url: ParsedUrl,
    pub suffix: String,
}

/// Render projection of an [`EditorState`]: the text fields as the editor
/// displays them, plus the rebuilt output string.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub prefix: String,
    pub base_and_hash: String,
    pub suffix: String,
    pub params: Vec<QueryParam>,
    pub result: String,
}
