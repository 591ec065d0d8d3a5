//! Edit operations on a caller-owned [`EditorState`].
//!
//! The embedding UI holds the state, calls these methods as its inputs
//! change, and re-renders from [`EditorState::view`] each time. Nothing here
//! touches anything outside the state it is given.

use crate::builder;
use crate::models::{EditorState, EditorView};

impl EditorState {
    /// Flip the enabled flag of the parameter at `index`. Out-of-range
    /// indices are ignored.
    pub fn toggle_param(&mut self, index: usize) {
        if let Some(param) = self.url.params.get_mut(index) {
            param.enabled = !param.enabled;
        }
    }

    /// Update base and hash from the single combined text field the editor
    /// shows for them: everything from the first `#` on is the hash, and no
    /// `#` means no hash.
    pub fn set_base_and_hash(&mut self, value: &str) {
        match value.find('#') {
            Some(pos) => {
                self.url.base = value[..pos].to_string();
                self.url.hash = value[pos..].to_string();
            }
            None => {
                self.url.base = value.to_string();
                self.url.hash = String::new();
            }
        }
    }

    /// Recompute the render projection: the editor field contents plus the
    /// rebuilt output string.
    pub fn view(&self) -> EditorView {
        EditorView {
            prefix: self.prefix.clone(),
            base_and_hash: format!("{}{}", self.url.base, self.url.hash),
            suffix: self.suffix.clone(),
            params: self.url.params.clone(),
            result: self.output(),
        }
    }

    /// The cleaned text, ready for the clipboard.
    pub fn output(&self) -> String {
        builder::build(self)
    }
}
