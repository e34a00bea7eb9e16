//! Per-item state

use serde::{Deserialize, Serialize};

/// Checked flag and free-text note for one checklist item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    /// Whether the test was marked as passed
    pub checked: bool,
    /// Operator note, empty when none was entered
    pub note: String,
}

impl ItemState {
    /// Whether the note holds anything besides whitespace
    #[must_use]
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}
