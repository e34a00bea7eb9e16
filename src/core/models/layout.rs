//! Page geometry used by the exporter

use serde::{Deserialize, Serialize};

/// Page geometry and typography, in millimetres and points
///
/// Defaults describe an A4 portrait page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Page width
    pub page_width: f32,
    /// Page height
    pub page_height: f32,
    /// First baseline on a page
    pub top_margin: f32,
    /// No baseline may be placed below this
    pub bottom_margin: f32,
    /// X position of header, title and category lines
    pub left_x: f32,
    /// X position of item lines
    pub item_x: f32,
    /// Widest a single line may be
    pub max_content_width: f32,
    /// Pitch between header lines
    pub header_pitch: f32,
    /// Pitch after the title
    pub title_pitch: f32,
    /// Pitch after a category label
    pub category_pitch: f32,
    /// Pitch between item lines
    pub line_height: f32,
    /// Extra space after each section
    pub section_gap: f32,
    /// Header font size
    pub header_font_size: f32,
    /// Title font size
    pub title_font_size: f32,
    /// Category and item font size
    pub body_font_size: f32,
}

/// Millimetres per typographic point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            top_margin: 15.0,
            bottom_margin: 280.0,
            left_x: 10.0,
            item_x: 15.0,
            max_content_width: 185.0,
            header_pitch: 7.0,
            title_pitch: 10.0,
            category_pitch: 7.0,
            line_height: 6.0,
            section_gap: 5.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
            body_font_size: 12.0,
        }
    }
}
