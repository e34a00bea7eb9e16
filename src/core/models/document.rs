//! Rendered document: page-level text placement instructions
//!
//! Coordinates are in millimetres with the origin at the top-left corner of
//! the page, `y` growing downwards.

use serde::{Deserialize, Serialize};

/// What a line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Metadata header line
    Header,
    /// Document title
    Title,
    /// Section category label
    Category,
    /// First line of a checklist item
    Item,
    /// Wrapped continuation of the preceding header, category or item line
    Continuation,
}

/// One line of text placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// 1-based page number
    pub page: u32,
    /// Horizontal position
    pub x: f32,
    /// Vertical position (baseline)
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// What the line represents
    pub kind: LineKind,
    /// The text itself
    pub text: String,
}

/// A rendered checklist ready to be written out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Suggested file name, safe to use as a path component
    pub filename: String,
    /// Number of pages
    pub page_count: u32,
    /// Lines in emission order
    pub lines: Vec<TextLine>,
}

impl Document {
    /// Lines placed on the given page
    pub fn page(&self, page: u32) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(move |l| l.page == page)
    }

    /// Lines of a given kind
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &TextLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }
}
