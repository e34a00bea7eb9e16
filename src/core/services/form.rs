//! Form state model
//!
//! Holds the checklist definition, one [`ItemState`] per item, and the
//! operator metadata. All edits go through this type; completion figures are
//! derived on every read.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use log::{debug, info};
use thiserror::Error;

use super::validation::{ValidationFailure, ValidationPolicy};
use crate::core::models::{
    ChecklistDefinition, CompletionStats, ExportSnapshot, FormMetadata, ItemId, ItemState,
    MetadataField, NetworkAddress,
};

/// Errors from editing the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The id does not name an item of the definition
    #[error("unknown checklist item: {0}")]
    UnknownItem(ItemId),
}

/// Mutable checklist state for one session
#[derive(Debug, Clone)]
pub struct FormState {
    definition: ChecklistDefinition,
    states: BTreeMap<ItemId, ItemState>,
    metadata: FormMetadata,
}

impl FormState {
    /// Create a form with every item unchecked and without a note
    #[must_use]
    pub fn new(definition: ChecklistDefinition) -> Self {
        let states = definition.items().map(|item| (item.id, ItemState::default())).collect();
        Self {
            definition,
            states,
            metadata: FormMetadata::default(),
        }
    }

    /// The checklist being filled in
    #[must_use]
    pub const fn definition(&self) -> &ChecklistDefinition {
        &self.definition
    }

    /// Current metadata
    #[must_use]
    pub const fn metadata(&self) -> &FormMetadata {
        &self.metadata
    }

    /// State of one item
    #[must_use]
    pub fn state(&self, id: ItemId) -> Option<&ItemState> {
        self.states.get(&id)
    }

    /// All item states in definition order
    pub fn states(&self) -> impl Iterator<Item = (ItemId, &ItemState)> {
        self.states.iter().map(|(id, state)| (*id, state))
    }

    fn state_mut(&mut self, id: ItemId) -> Result<&mut ItemState, FormError> {
        self.states.get_mut(&id).ok_or(FormError::UnknownItem(id))
    }

    /// Mark an item as passed or not
    pub fn set_checked(&mut self, id: ItemId, checked: bool) -> Result<(), FormError> {
        self.state_mut(id)?.checked = checked;
        debug!("Item {id} checked={checked}");
        Ok(())
    }

    /// Replace the note of an item
    pub fn set_note(&mut self, id: ItemId, note: &str) -> Result<(), FormError> {
        self.state_mut(id)?.note = note.to_string();
        debug!("Item {id} note set ({} chars)", note.chars().count());
        Ok(())
    }

    /// Update one metadata field
    pub fn set_metadata_field(&mut self, field: MetadataField, value: &str) {
        self.metadata.set(field, value);
        debug!("Metadata {field} updated");
    }

    /// Record the outcome of the address lookup
    pub fn set_network_address(&mut self, address: NetworkAddress) {
        info!("Network address: {}", address.display_value());
        self.metadata.network_address = address;
    }

    /// Whether the operator name allows an export
    #[must_use]
    pub fn is_export_ready(&self) -> bool {
        !self.metadata.operator().is_empty()
    }

    /// Completion over checked items
    #[must_use]
    pub fn completion(&self) -> CompletionStats {
        let checked = self.states.values().filter(|s| s.checked).count();
        CompletionStats::from_counts(checked, self.states.len())
    }

    /// Apply `policy` to every item, reporting all rejected ids
    pub fn validate(&self, policy: &dyn ValidationPolicy) -> Result<(), ValidationFailure> {
        let failing: Vec<ItemId> = self
            .definition
            .items()
            .filter(|item| {
                let state = self.states.get(&item.id).cloned().unwrap_or_default();
                !policy.accepts(item, &state)
            })
            .map(|item| item.id)
            .collect();

        if failing.is_empty() {
            Ok(())
        } else {
            debug!("Policy {} rejected {} item(s)", policy.name(), failing.len());
            Err(ValidationFailure::ItemsRejected(failing))
        }
    }

    /// Capture the current state without modifying it
    #[must_use]
    pub fn snapshot(&self, captured_at: DateTime<FixedOffset>) -> ExportSnapshot {
        ExportSnapshot {
            definition: self.definition.clone(),
            states: self.states.clone(),
            metadata: self.metadata.clone(),
            captured_at,
            completion: self.completion(),
        }
    }

    /// Whether an export would be accepted right now
    ///
    /// A missing operator name refuses the export before the policy runs.
    /// The network address plays no part, so this can run while the lookup
    /// is still in flight.
    pub fn check_export(&self, policy: &dyn ValidationPolicy) -> Result<(), ValidationFailure> {
        if !self.is_export_ready() {
            return Err(ValidationFailure::MissingOperator);
        }
        self.validate(policy)
    }

    /// Check export readiness and the policy, then snapshot
    pub fn prepare_export(
        &self,
        policy: &dyn ValidationPolicy,
        captured_at: DateTime<FixedOffset>,
    ) -> Result<ExportSnapshot, ValidationFailure> {
        self.check_export(policy)?;
        Ok(self.snapshot(captured_at))
    }
}
