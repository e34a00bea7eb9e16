//! TOML-based checklist definitions
//!
//! - [`parser`] - Read and deserialize definition files

pub mod parser;

pub use parser::{DefinitionFile, SectionEntry, load_definition, parse_definition};
