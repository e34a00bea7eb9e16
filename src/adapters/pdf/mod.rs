//! PDF encoding with `lopdf`
//!
//! Every page gets one content stream with a `BT … ET` block per line, set in
//! the standard Helvetica font. Document coordinates (millimetres from the
//! top-left corner) are converted to PDF points from the bottom-left corner.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, Stream, dictionary};

use crate::core::models::{Document, MM_PER_PT, PageLayout, TextLine};
use crate::core::ports::DocumentWriter;

const FONT_NAME: &[u8] = b"F1";

/// Writes documents as PDF
#[derive(Debug, Clone, Copy)]
pub struct PdfWriter {
    page_width: f32,
    page_height: f32,
}

impl PdfWriter {
    /// Create a writer for the page size of `layout`
    #[must_use]
    pub const fn new(layout: &PageLayout) -> Self {
        Self {
            page_width: layout.page_width,
            page_height: layout.page_height,
        }
    }

    fn line_operations(&self, line: &TextLine) -> Vec<Operation> {
        let x = mm_to_pt(line.x);
        let y = mm_to_pt(self.page_height - line.y);
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(FONT_NAME.to_vec()), Object::Real(line.font_size)]),
            Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
            Operation::new("Tj", vec![Object::string_literal(win_ansi_bytes(&line.text))]),
            Operation::new("ET", vec![]),
        ]
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(&PageLayout::default())
    }
}

impl DocumentWriter for PdfWriter {
    fn encode(&self, document: &Document) -> anyhow::Result<Vec<u8>> {
        let mut pdf = lopdf::Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let mut fonts = Dictionary::new();
        fonts.set(FONT_NAME.to_vec(), Object::Reference(font_id));
        let resources_id = pdf.add_object(dictionary! {
            "Font" => Object::Dictionary(fonts),
        });

        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(mm_to_pt(self.page_width)),
            Object::Real(mm_to_pt(self.page_height)),
        ];

        let mut kids = Vec::new();
        for page in 1..=document.page_count.max(1) {
            let operations: Vec<Operation> = document.page(page).flat_map(|line| self.line_operations(line)).collect();
            let content = Content { operations };
            let content_id = pdf.add_object(Stream::new(Dictionary::new(), content.encode()?));

            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => media_box.clone(),
                "Contents" => Object::Reference(content_id),
                "Resources" => Object::Reference(resources_id),
            });
            kids.push(Object::Reference(page_id));
        }

        let count = i64::try_from(kids.len())?;
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        pdf.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        pdf.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Encode text for the standard font's WinAnsi encoding
///
/// Latin-1 characters map directly; anything else becomes `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).unwrap_or(b'?'),
            _ => b'?',
        })
        .collect()
}
