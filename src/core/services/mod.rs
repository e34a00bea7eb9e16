//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Services depend only on port traits for anything outside the process.
//!
//! - [`form`] - Form state model and its edit operations
//! - [`validation`] - Pluggable per-item validation policies
//! - [`exporter`] - Snapshot to paginated document layout
//! - [`wrap`] - Word wrapping by character budget
//! - [`export`] - Validate, render and encode in one step
//! - [`address`] - Public address response parsing
//! - `lookup` - Background address lookup (feature `net`)

pub mod address;
pub mod export;
pub mod exporter;
pub mod form;
#[cfg(feature = "net")]
pub mod lookup;
pub mod validation;
pub mod wrap;

pub use address::{DEFAULT_ENDPOINTS, NetworkResolutionFailure, parse_address_body};
pub use export::{ExportError, ExportOutcome, export};
pub use exporter::render;
pub use form::{FormError, FormState};
#[cfg(feature = "net")]
pub use lookup::{AddressLookup, LookupHandle};
pub use validation::{AlwaysPass, PolicyKind, RequireNoteIfUnchecked, ValidationFailure, ValidationPolicy};
pub use wrap::wrap_text;
