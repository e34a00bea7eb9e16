//! Checklist definition
//!
//! A definition is the fixed catalog of test categories and test items.
//! Every item receives a stable [`ItemId`] when the definition is built,
//! so state lookups never depend on the display text.
//!
//! # Examples
//!
//! ```
//! use qa_checklist::core::models::{ChecklistDefinition, ItemId};
//!
//! let def = ChecklistDefinition::new(vec![
//!     ("Launch".to_string(), vec!["App starts".to_string(), "Version shown".to_string()]),
//! ])
//! .unwrap();
//! assert_eq!(def.item_count(), 2);
//! assert_eq!(def.item(ItemId::new(0, 1)).unwrap().text, "Version shown");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that make a definition unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two items share the same display text
    #[error("duplicate checklist item \"{text}\" (at {first} and {second})")]
    DuplicateItem {
        /// The colliding text
        text: String,
        /// Where it first appeared
        first: ItemId,
        /// Where it appeared again
        second: ItemId,
    },

    /// An item has no text
    #[error("checklist item {0} has no text")]
    BlankItem(ItemId),
}

/// Stable identifier of an item: `(section index, item index)`, zero-based
///
/// Displayed and parsed 1-based as `S.I` (e.g. `2.3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId {
    /// Zero-based section index
    pub section: usize,
    /// Zero-based item index within the section
    pub item: usize,
}

impl ItemId {
    /// Create an id from zero-based indices
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section + 1, self.item + 1)
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid item id: {s}. Use <section>.<item>, e.g. 2.3");
        let (section, item) = s.trim().split_once('.').ok_or_else(invalid)?;
        let section: usize = section.parse().map_err(|_| invalid())?;
        let item: usize = item.parse().map_err(|_| invalid())?;
        if section == 0 || item == 0 {
            return Err(invalid());
        }
        Ok(Self::new(section - 1, item - 1))
    }
}

/// A single test item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Assigned when the definition was built
    pub id: ItemId,
    /// Test description
    pub text: String,
}

/// A test category and its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Category label
    pub category: String,
    /// Items in display order
    pub items: Vec<ChecklistItem>,
}

/// The immutable checklist catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistDefinition {
    sections: Vec<Section>,
}

impl ChecklistDefinition {
    /// Build a definition from `(category, items)` pairs
    ///
    /// Rejects blank item text and text that appears more than once anywhere
    /// in the definition.
    pub fn new(sections: Vec<(String, Vec<String>)>) -> Result<Self, DefinitionError> {
        let mut seen: HashMap<String, ItemId> = HashMap::new();
        let mut built = Vec::with_capacity(sections.len());

        for (s, (category, texts)) in sections.into_iter().enumerate() {
            let mut items = Vec::with_capacity(texts.len());
            for (i, text) in texts.into_iter().enumerate() {
                let id = ItemId::new(s, i);
                let key = text.trim().to_string();
                if key.is_empty() {
                    return Err(DefinitionError::BlankItem(id));
                }
                if let Some(&first) = seen.get(&key) {
                    return Err(DefinitionError::DuplicateItem {
                        text: key,
                        first,
                        second: id,
                    });
                }
                seen.insert(key, id);
                items.push(ChecklistItem { id, text });
            }
            built.push(Section { category, items });
        }

        Ok(Self { sections: built })
    }

    /// The built-in EMV application checklist
    #[must_use]
    pub fn emv() -> Self {
        // Uniqueness of the built-in catalog is covered by `builtin_emv_definition_is_valid`.
        let sections = EMV_SECTIONS
            .iter()
            .enumerate()
            .map(|(s, (category, texts))| Section {
                category: (*category).to_string(),
                items: texts
                    .iter()
                    .enumerate()
                    .map(|(i, text)| ChecklistItem {
                        id: ItemId::new(s, i),
                        text: (*text).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// Sections in display order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All items in display order
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Look up an item by id
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ChecklistItem> {
        self.sections.get(id.section).and_then(|s| s.items.get(id.item))
    }

    /// Whether the id names an item of this definition
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Total number of items across all sections
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether the definition has no items at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

const EMV_SECTIONS: &[(&str, &[&str])] = &[
    (
        "Application Launch & Initialization",
        &[
            "Verify that the EMV application launches without crashes.",
            "Confirm that the application initializes all required services (card reader, network, security modules).",
            "Check that the application displays the correct version number.",
        ],
    ),
    (
        "Card Detection & Transaction Initiation",
        &[
            "Insert a chip card and verify that it is detected correctly.",
            "Verify that the application retrieves card data and displays the correct card type.",
            "Confirm that the application prompts for required user actions (PIN entry, signature, etc.).",
            "Attempt a transaction with an expired card and check if it is declined.",
        ],
    ),
    (
        "Payment Processing & Authorization",
        &[
            "Process an online-authorized transaction and verify approval.",
            "Simulate a declined transaction and check if the correct decline reason is displayed.",
            "Perform an offline-approved transaction (if supported) and verify receipt printing.",
            "Check if authorization times are within acceptable limits.",
        ],
    ),
];
