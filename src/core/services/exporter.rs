//! Document exporter
//!
//! Turns an [`ExportSnapshot`] into a [`Document`]: a header block with the
//! export metadata, a title, then every section and item in definition order.
//! Every line is wrapped to the content width as measured with the Helvetica
//! metrics the writer prints with, and lines flow onto new pages when the
//! cursor passes the bottom margin. The output depends only on the snapshot
//! and the layout.

use log::debug;

use super::wrap::wrap_text;
use crate::core::models::{
    Document, ExportSnapshot, ItemState, LineKind, NOT_PROVIDED, PageLayout, TextLine, text_width,
};

/// Title printed above the checklist
pub const TITLE: &str = "EMV Application Testing Checklist";

/// Number of fields in the metadata header
pub const HEADER_LINE_COUNT: usize = 8;

const FILENAME_PREFIX: &str = "EMV_Testing_Checklist";

/// Longest operator part of an export file name, in characters
pub const FILENAME_OPERATOR_LIMIT: usize = 64;

/// Mark printed for a checked item
pub const CHECKED_MARK: &str = "[X]";

/// Mark printed for an unchecked item
pub const UNCHECKED_MARK: &str = "[ ]";

/// Render a snapshot into page-level text instructions
#[must_use]
pub fn render(snapshot: &ExportSnapshot, layout: &PageLayout) -> Document {
    let mut cursor = Cursor::new(layout);

    for text in header_lines(snapshot) {
        cursor.emit_wrapped(
            LineKind::Header,
            layout.left_x,
            0.0,
            layout.header_font_size,
            &text,
            layout.header_pitch,
        );
    }
    cursor.emit_wrapped(
        LineKind::Title,
        layout.left_x,
        0.0,
        layout.title_font_size,
        TITLE,
        layout.title_pitch,
    );

    let font = layout.body_font_size;
    let indent = text_width(&format!("{CHECKED_MARK} "), font);

    for section in snapshot.definition.sections() {
        cursor.emit_wrapped(
            LineKind::Category,
            layout.left_x,
            0.0,
            font,
            &section.category,
            layout.category_pitch,
        );

        for item in &section.items {
            let line = item_line(&item.text, &snapshot.state(item.id));
            cursor.emit_wrapped(LineKind::Item, layout.item_x, indent, font, &line, layout.line_height);
        }
        cursor.advance(layout.section_gap);
    }

    let document = Document {
        filename: export_filename(snapshot),
        page_count: cursor.page,
        lines: cursor.lines,
    };
    debug!(
        "Rendered {} line(s) on {} page(s) as {}",
        document.lines.len(),
        document.page_count,
        document.filename
    );
    document
}

/// Metadata header lines, in print order
#[must_use]
pub fn header_lines(snapshot: &ExportSnapshot) -> Vec<String> {
    let meta = &snapshot.metadata;
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_PROVIDED.to_string());
    let operator = if meta.operator().is_empty() {
        NOT_PROVIDED
    } else {
        meta.operator()
    };

    vec![
        format!("Date: {}", snapshot.captured_at.format("%Y-%m-%d")),
        format!("Time: {}", snapshot.captured_at.format("%H:%M:%S")),
        format!("Device/Public IP: {}", meta.network_address.display_value()),
        format!("QA Name: {operator}"),
        format!("Hardware Version: {}", optional(&meta.hardware_version)),
        format!("Firmware Version: {}", optional(&meta.firmware_version)),
        format!("Application Version: {}", optional(&meta.application_version)),
        format!("Completion: {}%", snapshot.completion.formatted()),
    ]
}

/// Unwrapped text of one item line: mark, item text, optional note
#[must_use]
pub fn item_line(text: &str, state: &ItemState) -> String {
    let mark = if state.checked {
        CHECKED_MARK
    } else {
        UNCHECKED_MARK
    };
    if state.has_note() {
        format!("{mark} {text} - Notes: {}", state.note.trim())
    } else {
        format!("{mark} {text}")
    }
}

/// File name derived from the operator and the capture time
#[must_use]
pub fn export_filename(snapshot: &ExportSnapshot) -> String {
    let stamp = snapshot.captured_at.format("%Y-%m-%d_%H-%M-%S");
    format!(
        "{FILENAME_PREFIX}_{}_{stamp}.pdf",
        sanitize_component(snapshot.metadata.operator())
            .chars()
            .take(FILENAME_OPERATOR_LIMIT)
            .collect::<String>()
    )
}

/// Replace everything outside `[A-Za-z0-9._-]` with `_`
#[must_use]
pub fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Vertical cursor that starts a new page before a line would pass the bottom
struct Cursor<'a> {
    layout: &'a PageLayout,
    page: u32,
    y: f32,
    lines: Vec<TextLine>,
}

impl<'a> Cursor<'a> {
    const fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            page: 1,
            y: layout.top_margin,
            lines: Vec::new(),
        }
    }

    fn emit(&mut self, kind: LineKind, x: f32, font_size: f32, text: String, pitch: f32) {
        if self.y > self.layout.bottom_margin {
            self.page += 1;
            self.y = self.layout.top_margin;
        }
        self.lines.push(TextLine {
            page: self.page,
            x,
            y: self.y,
            font_size,
            kind,
            text,
        });
        self.y += pitch;
    }

    /// Emit `text` wrapped to the content width
    ///
    /// Continuation lines start `indent` to the right of `x` and get
    /// correspondingly less width.
    fn emit_wrapped(&mut self, kind: LineKind, x: f32, indent: f32, font_size: f32, text: &str, pitch: f32) {
        let width = self.layout.max_content_width;
        let measure = |s: &str| text_width(s, font_size);
        for (i, part) in wrap_text(text, width, width - indent, measure).into_iter().enumerate() {
            if i == 0 {
                self.emit(kind, x, font_size, part, pitch);
            } else {
                self.emit(LineKind::Continuation, x + indent, font_size, part, pitch);
            }
        }
    }

    fn advance(&mut self, amount: f32) {
        self.y += amount;
    }
}
