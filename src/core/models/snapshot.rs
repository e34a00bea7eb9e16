//! Completion statistics and the export snapshot

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{ChecklistDefinition, FormMetadata, ItemId, ItemState};

/// Completion figures derived from item state
///
/// Only checked items count as complete; an unchecked item with a note is
/// still incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    /// Number of checked items
    pub checked: usize,
    /// Number of items in the definition
    pub total: usize,
    /// `checked / total * 100`, rounded to two decimals, `0.0` when `total == 0`
    pub percentage: f64,
}

impl CompletionStats {
    /// Compute the stats for `checked` out of `total` items
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(checked: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            let raw = checked.min(total) as f64 / total as f64 * 100.0;
            (raw * 100.0).round() / 100.0
        };
        Self {
            checked,
            total,
            percentage,
        }
    }

    /// Percentage formatted with two decimals, e.g. `45.45`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

/// Everything needed to render a document, captured at export time
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    /// The checklist that was filled in
    pub definition: ChecklistDefinition,
    /// State of every item, keyed by id
    pub states: BTreeMap<ItemId, ItemState>,
    /// Operator metadata including the network address
    pub metadata: FormMetadata,
    /// When the snapshot was taken
    pub captured_at: DateTime<FixedOffset>,
    /// Completion at capture time
    pub completion: CompletionStats,
}

impl ExportSnapshot {
    /// State of one item; missing entries read as the default state
    #[must_use]
    pub fn state(&self, id: ItemId) -> ItemState {
        self.states.get(&id).cloned().unwrap_or_default()
    }
}
