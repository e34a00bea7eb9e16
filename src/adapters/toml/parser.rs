//! TOML parser for checklist definition files
//!
//! Handles reading and deserializing custom checklists:
//!
//! ```toml
//! [[section]]
//! category = "Application Launch"
//! items = [
//!     "Verify that the application launches without crashes.",
//!     "Check that the application displays the correct version number.",
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::ChecklistDefinition;

/// A checklist definition file structure
#[derive(Debug, Deserialize)]
pub struct DefinitionFile {
    /// Sections in display order
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionEntry>,
}

/// A section entry in a definition file
#[derive(Debug, Deserialize)]
pub struct SectionEntry {
    /// Category label
    pub category: String,

    /// Test item descriptions
    #[serde(default)]
    pub items: Vec<String>,
}

impl DefinitionFile {
    /// Validate the file contents into a definition
    pub fn into_definition(self) -> anyhow::Result<ChecklistDefinition> {
        let sections = self.sections.into_iter().map(|s| (s.category, s.items)).collect();
        Ok(ChecklistDefinition::new(sections)?)
    }
}

/// Parse a definition from TOML text
///
/// # Errors
///
/// Returns an error if the text is not valid TOML, or if items are blank or
/// duplicated.
pub fn parse_definition(content: &str) -> anyhow::Result<ChecklistDefinition> {
    let file: DefinitionFile = toml::from_str(content)?;
    file.into_definition()
}

/// Load a definition from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_definition(path: &Path) -> anyhow::Result<ChecklistDefinition> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read checklist definition {}", path.display()))?;
    parse_definition(&content)
        .with_context(|| format!("invalid checklist definition {}", path.display()))
}
