//! Document writer port
//!
//! Defines the interface for encoding a rendered document.

use crate::core::models::Document;

/// Encodes a [`Document`] into a file format
///
/// Implementations only place text at `(page, x, y)` with the given font size
/// and start new pages; all layout decisions are already made.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentWriter: Send + Sync {
    /// Encode the document into bytes
    fn encode(&self, document: &Document) -> anyhow::Result<Vec<u8>>;
}
