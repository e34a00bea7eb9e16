//! Property-based tests for wrapping and pagination
//!
//! Uses proptest to verify properties that should hold for all inputs.

use qa_checklist::core::models::{
    ChecklistDefinition, ItemId, LineKind, MetadataField, PageLayout, text_width,
};
use qa_checklist::core::services::{FormState, render, wrap_text};
use proptest::prelude::*;

use crate::common::captured_at;

fn definition(sections: &[Vec<String>]) -> ChecklistDefinition {
    let sections = sections
        .iter()
        .enumerate()
        .map(|(s, items)| {
            let items = items
                .iter()
                .enumerate()
                .map(|(i, text)| format!("{s}.{i} {text}"))
                .collect();
            (format!("Section {s}"), items)
        })
        .collect();
    ChecklistDefinition::new(sections).unwrap()
}

fn body(text: &str) -> f32 {
    text_width(text, 12.0)
}

fn checklist() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,30}", 0..25), 0..5)
}

proptest! {
    /// No wrapped line is wider than its limit
    ///
    /// Limits start above the widest glyph at 12 pt, so every line can hold
    /// at least one character.
    #[test]
    fn wrapped_lines_fit_width(
        text in "[a-zA-Z@%W ]{0,400}",
        first in 5.0f32..185.0,
        rest in 5.0f32..185.0
    ) {
        let lines = wrap_text(&text, first, rest, body);
        prop_assert!(!lines.is_empty());
        prop_assert!(body(&lines[0]) <= first);
        for line in &lines[1..] {
            prop_assert!(body(line) <= rest);
        }
    }

    /// Wrapping never drops or reorders characters
    #[test]
    fn wrapping_preserves_content(text in "[a-zA-Z]{1,30}( [a-zA-Z]{1,30}){0,20}", width in 5.0f32..120.0) {
        let lines = wrap_text(&text, width, width, body);
        let joined: String = lines.concat().split_whitespace().collect();
        let original: String = text.split_whitespace().collect();
        prop_assert_eq!(joined, original);
    }

    /// Every line stays on the page and pages only move forward
    #[test]
    fn lines_stay_within_margins(sections in checklist()) {
        let layout = PageLayout::default();
        let mut form = FormState::new(definition(&sections));
        form.set_metadata_field(MetadataField::Operator, "Dana");
        let doc = render(&form.snapshot(captured_at()), &layout);

        for line in &doc.lines {
            prop_assert!(line.y >= layout.top_margin && line.y <= layout.bottom_margin);
            prop_assert!(line.x + text_width(&line.text, line.font_size) <= layout.page_width);
            prop_assert!(line.page >= 1 && line.page <= doc.page_count);
        }
        prop_assert!(doc.lines.windows(2).all(|w| w[0].page <= w[1].page));
        prop_assert_eq!(doc.lines_of(LineKind::Category).count(), sections.len());
        prop_assert_eq!(
            doc.lines_of(LineKind::Item).count(),
            sections.iter().map(Vec::len).sum::<usize>()
        );
    }

    /// Same snapshot, same document
    #[test]
    fn render_is_deterministic(sections in checklist(), checked in prop::collection::vec(any::<bool>(), 0..40)) {
        let def = definition(&sections);
        let ids: Vec<ItemId> = def.items().map(|i| i.id).collect();
        let mut form = FormState::new(def);
        for (id, check) in ids.iter().zip(&checked) {
            form.set_checked(*id, *check).unwrap();
        }
        let snapshot = form.snapshot(captured_at());
        let layout = PageLayout::default();
        prop_assert_eq!(render(&snapshot, &layout), render(&snapshot, &layout));
    }
}
