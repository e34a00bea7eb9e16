//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (HTTP endpoints, PDF encoding).
//!
//! Implementations live in the `adapters` module.

mod address_fetcher;
mod document_writer;

pub use address_fetcher::AddressFetcher;
#[cfg(test)]
pub use document_writer::MockDocumentWriter;
pub use document_writer::DocumentWriter;
