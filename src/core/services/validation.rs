//! Validation policies applied before export
//!
//! A policy is a predicate over a single item and its state. The form applies
//! it to every item and reports all items it rejects, so the caller can flag
//! them together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{ChecklistItem, ItemId, ItemState};

/// Why an export was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Operator name is empty or whitespace only
    #[error("QA operator name is required")]
    MissingOperator,

    /// The policy rejected these items (definition order)
    #[error("{} item(s) rejected by the validation policy: {}", .0.len(), join_ids(.0))]
    ItemsRejected(Vec<ItemId>),
}

impl ValidationFailure {
    /// Items rejected by the policy, empty for other failures
    #[must_use]
    pub fn failing_items(&self) -> &[ItemId] {
        match self {
            Self::ItemsRejected(ids) => ids,
            Self::MissingOperator => &[],
        }
    }
}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Per-item rule deciding whether an export may proceed
pub trait ValidationPolicy: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Whether the item passes in its current state
    fn accepts(&self, item: &ChecklistItem, state: &ItemState) -> bool;
}

/// Unchecked items must carry a non-blank note explaining the failure
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireNoteIfUnchecked;

impl ValidationPolicy for RequireNoteIfUnchecked {
    fn name(&self) -> &'static str {
        "require-note-if-unchecked"
    }

    fn accepts(&self, _item: &ChecklistItem, state: &ItemState) -> bool {
        state.checked || state.has_note()
    }
}

/// No per-item constraint
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPass;

impl ValidationPolicy for AlwaysPass {
    fn name(&self) -> &'static str {
        "always-pass"
    }

    fn accepts(&self, _item: &ChecklistItem, _state: &ItemState) -> bool {
        true
    }
}

/// Policy selector used by configuration and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// See [`RequireNoteIfUnchecked`]
    #[default]
    RequireNoteIfUnchecked,
    /// See [`AlwaysPass`]
    AlwaysPass,
}

impl PolicyKind {
    /// Instantiate the selected policy
    #[must_use]
    pub fn policy(self) -> Box<dyn ValidationPolicy> {
        match self {
            Self::RequireNoteIfUnchecked => Box::new(RequireNoteIfUnchecked),
            Self::AlwaysPass => Box::new(AlwaysPass),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "require-note-if-unchecked" | "require-note" | "strict" => {
                Ok(Self::RequireNoteIfUnchecked)
            },
            "always-pass" | "none" | "off" => Ok(Self::AlwaysPass),
            _ => Err(format!(
                "Invalid policy: {s}. Use: require-note-if-unchecked, always-pass"
            )),
        }
    }
}
