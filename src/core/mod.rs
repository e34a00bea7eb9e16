//! Core domain logic for qa-checklist
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (definition, item state, metadata, document)
//! - `services/` - Form state, validation, rendering, address lookup
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
