//! The cleaning pipeline: pasted text in, editable state out.

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::error::CleanError;
use crate::extractor;
use crate::models::EditorState;
use crate::parser;
use crate::rules::RuleSet;

/// Owns the loaded rule table and runs the whole pipeline over a paste.
/// Stateless across calls: each paste produces a fresh [`EditorState`] that
/// the caller owns from then on.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Build an engine from configuration: the rules file named there, or
    /// the built-in table when none is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let rules = match &config.rules_path {
            Some(path) => RuleSet::from_path(path)?,
            None => RuleSet::builtin()?,
        };
        Ok(Self { rules })
    }

    /// Build an engine around an already-assembled table.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run extract, parse, and rule application over one paste.
    ///
    /// The input is trimmed first; blank input and input without a URL both
    /// come back as [`CleanError::NotFound`]. A matched substring that fails
    /// URL parsing (stray punctuation glued to it, usually) comes back as
    /// [`CleanError::InvalidUrl`]. Callers treat the two the same way.
    pub fn sanitize(&self, text: &str) -> Result<EditorState, CleanError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CleanError::NotFound);
        }

        let extracted = extractor::extract(text).ok_or(CleanError::NotFound)?;
        debug!(url = %extracted.url, "Detected URL in pasted text");

        let mut parsed = parser::parse(&extracted.url)?;
        self.rules.apply(&mut parsed.params, &parsed.base);

        Ok(EditorState {
            prefix: extracted.prefix,
            url: parsed,
            suffix: extracted.suffix,
        })
    }
}
