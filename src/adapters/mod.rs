//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Checklist definition files
//! - `pdf/` - PDF encoding via `lopdf`
//! - `http/` - Public address endpoints via `reqwest` (feature `net`)

#[cfg(feature = "net")]
pub mod http;
pub mod pdf;
pub mod toml;
