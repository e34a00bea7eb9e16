//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ChecklistDefinition, CompletionStats, Document};
use crate::core::services::{FormState, ValidationFailure};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Sections with their items
    pub sections: Vec<SectionInfo>,
    /// Number of items across all sections
    pub total_items: usize,
}

/// A section in a listing
#[derive(Debug, Serialize)]
pub struct SectionInfo {
    /// Category label
    pub category: String,
    /// Items in display order
    pub items: Vec<ItemInfo>,
}

/// An item in a listing or report
#[derive(Debug, Serialize)]
pub struct ItemInfo {
    /// Item id (`section.item`, 1-based)
    pub id: String,
    /// Test description
    pub text: String,
}

/// Result of a successful export
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Where the file was written
    pub path: String,
    /// Number of pages
    pub pages: u32,
    /// Items checked
    pub checked: usize,
    /// Items in the checklist
    pub total: usize,
    /// Completion percentage with two decimals
    pub completion: String,
    /// Address printed in the header
    pub network_address: String,
}

/// Why an export was refused
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Always false; present for JSON consumers
    pub passed: bool,
    /// Policy that was applied
    pub policy: String,
    /// Whether the operator name was missing
    pub missing_operator: bool,
    /// Items rejected by the policy
    pub failing: Vec<ItemInfo>,
}

impl ListResult {
    /// Build a listing of a definition
    #[must_use]
    pub fn from_definition(definition: &ChecklistDefinition) -> Self {
        let sections = definition
            .sections()
            .iter()
            .map(|s| SectionInfo {
                category: s.category.clone(),
                items: s
                    .items
                    .iter()
                    .map(|i| ItemInfo {
                        id: i.id.to_string(),
                        text: i.text.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            sections,
            total_items: definition.item_count(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.sections.is_empty() {
            println!("Checklist is empty.");
            return;
        }

        for section in &self.sections {
            println!("{}", section.category.bold());
            for item in &section.items {
                println!("  {:>5}  {}", item.id, item.text);
            }
            println!();
        }
        println!("{} item(s)", self.total_items);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ExportResult {
    /// Summarize a written export
    #[must_use]
    pub fn new(path: String, document: &Document, completion: &CompletionStats, network_address: &str) -> Self {
        Self {
            path,
            pages: document.page_count,
            checked: completion.checked,
            total: completion.total,
            completion: completion.formatted(),
            network_address: network_address.to_string(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Exported checklist to {}", self.path.green());
                println!(
                    "Completion: {}% ({}/{} checked), {} page(s)",
                    self.completion, self.checked, self.total, self.pages
                );
                println!("Device/Public IP: {}", self.network_address);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl ValidationReport {
    /// Describe a validation failure against the form it came from
    #[must_use]
    pub fn new(failure: &ValidationFailure, form: &FormState, policy: &str) -> Self {
        let failing = failure
            .failing_items()
            .iter()
            .filter_map(|id| form.definition().item(*id))
            .map(|item| ItemInfo {
                id: item.id.to_string(),
                text: item.text.clone(),
            })
            .collect();
        Self {
            passed: false,
            policy: policy.to_string(),
            missing_operator: matches!(failure, ValidationFailure::MissingOperator),
            failing,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        println!("{}", "Export refused.".red().bold());
        if self.missing_operator {
            println!("  QA operator name is required (use --operator).");
        }
        if !self.failing.is_empty() {
            println!("  Items rejected by policy {}:\n", self.policy);
            for item in &self.failing {
                println!("  [{}] {}", item.id.red(), item.text);
            }
            println!("\nExample:   qa-checklist export --note {}=\"reason\" ...", self.failing[0].id);
        }
    }
}
