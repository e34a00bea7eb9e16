//! Export pipeline: validate, snapshot, render, encode
//!
//! Nothing reaches the writer unless validation passes. Rendering has no side
//! effects, so a failed encode can simply be retried.

use chrono::{DateTime, FixedOffset};
use log::info;
use thiserror::Error;

use super::exporter::render;
use super::form::FormState;
use super::validation::{ValidationFailure, ValidationPolicy};
use crate::core::models::{Document, PageLayout};
use crate::core::ports::DocumentWriter;

/// Why an export produced no output
#[derive(Debug, Error)]
pub enum ExportError {
    /// The form is not ready; fix the flagged fields and retry
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The writer could not encode the document
    #[error("failed to encode document: {0:#}")]
    Encode(anyhow::Error),
}

/// A rendered and encoded checklist
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Layout that was encoded
    pub document: Document,
    /// Encoded bytes
    pub bytes: Vec<u8>,
}

/// Run the full export for the current form state
pub fn export(
    form: &FormState,
    policy: &dyn ValidationPolicy,
    layout: &PageLayout,
    writer: &dyn DocumentWriter,
    captured_at: DateTime<FixedOffset>,
) -> Result<ExportOutcome, ExportError> {
    let snapshot = form.prepare_export(policy, captured_at)?;
    let document = render(&snapshot, layout);
    let bytes = writer.encode(&document).map_err(ExportError::Encode)?;
    info!(
        "Exported {} ({} page(s), {} bytes)",
        document.filename,
        document.page_count,
        bytes.len()
    );
    Ok(ExportOutcome { document, bytes })
}
