//! Domain models for qa-checklist
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChecklistDefinition`] - The fixed catalog of categories and items
//! - [`ItemState`] - Checked flag and note for one item
//! - [`FormMetadata`] - Operator, versions and network address
//! - [`ExportSnapshot`] - Immutable capture taken at export time
//! - [`Document`] - Rendered page-level text instructions
//! - [`PageLayout`] - Geometry used when rendering
//! - [`text_width`] - Helvetica text measurement

mod definition;
mod document;
mod item_state;
mod layout;
mod metadata;
mod metrics;
mod snapshot;

pub use definition::{ChecklistDefinition, ChecklistItem, DefinitionError, ItemId, Section};
pub use document::{Document, LineKind, TextLine};
pub use item_state::ItemState;
pub use layout::{MM_PER_PT, PageLayout};
pub use metadata::{ADDRESS_PLACEHOLDER, FormMetadata, MetadataField, NOT_PROVIDED, NetworkAddress};
pub use metrics::{helvetica_advance, text_width};
pub use snapshot::{CompletionStats, ExportSnapshot};
