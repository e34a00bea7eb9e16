//! Export pipeline tests with the PDF writer

use qa_checklist::adapters::pdf::PdfWriter;
use qa_checklist::core::models::{Document, ItemId, PageLayout};
use qa_checklist::core::ports::DocumentWriter;
use qa_checklist::core::services::{ExportError, RequireNoteIfUnchecked, ValidationFailure, export};

use crate::common::{DefinitionBuilder, all_checked, captured_at, form_with_operator, three_by_three};

struct BrokenWriter;

impl DocumentWriter for BrokenWriter {
    fn encode(&self, _document: &Document) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("disk full")
    }
}

#[test]
fn exports_pdf_with_one_page_per_document_page() {
    let def = DefinitionBuilder::new().section("Regression", 60).build();
    let form = all_checked(def);
    let layout = PageLayout::default();

    let outcome = export(&form, &RequireNoteIfUnchecked, &layout, &PdfWriter::new(&layout), captured_at()).unwrap();

    let pdf = lopdf::Document::load_mem(&outcome.bytes).unwrap();
    assert_eq!(pdf.get_pages().len(), outcome.document.page_count as usize);
    assert!(outcome.document.page_count >= 2);
}

#[test]
fn refused_export_reports_failing_items() {
    let form = form_with_operator(three_by_three(), "Dana");
    let layout = PageLayout::default();

    let err = export(&form, &RequireNoteIfUnchecked, &layout, &PdfWriter::new(&layout), captured_at())
        .unwrap_err();
    let ExportError::Validation(ValidationFailure::ItemsRejected(ids)) = err else {
        panic!("expected rejected items, got {err:?}");
    };
    assert_eq!(ids.len(), 9);
    assert_eq!(ids[0], ItemId::new(0, 0));
}

#[test]
fn encode_failure_leaves_form_usable() {
    let form = all_checked(three_by_three());
    let layout = PageLayout::default();

    let err = export(&form, &RequireNoteIfUnchecked, &layout, &BrokenWriter, captured_at()).unwrap_err();
    assert!(matches!(err, ExportError::Encode(_)));
    assert!(err.to_string().contains("disk full"));

    // Same form exports fine once the writer works
    assert!(export(&form, &RequireNoteIfUnchecked, &layout, &PdfWriter::new(&layout), captured_at()).is_ok());
}
