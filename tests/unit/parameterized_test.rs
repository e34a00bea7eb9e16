//! Parameterized tests using test-case

use qa_checklist::core::models::{ItemId, ItemState, MetadataField};
use qa_checklist::core::services::PolicyKind;
use qa_checklist::core::services::exporter::{item_line, sanitize_component};
use test_case::test_case;

// =============================================================================
// Item ids
// =============================================================================

#[test_case("1.1", Some(ItemId::new(0, 0)) ; "first item")]
#[test_case("3.4", Some(ItemId::new(2, 3)) ; "last builtin item")]
#[test_case(" 2.10 ", Some(ItemId::new(1, 9)) ; "surrounding whitespace")]
#[test_case("0.1", None ; "zero section")]
#[test_case("1.0", None ; "zero item")]
#[test_case("1", None ; "missing item")]
#[test_case("a.b", None ; "not numeric")]
#[test_case("", None ; "empty")]
fn test_item_id_parsing(input: &str, expected: Option<ItemId>) {
    assert_eq!(input.parse::<ItemId>().ok(), expected);
}

// =============================================================================
// Policies and fields
// =============================================================================

#[test_case("require-note-if-unchecked", PolicyKind::RequireNoteIfUnchecked ; "canonical strict")]
#[test_case("STRICT", PolicyKind::RequireNoteIfUnchecked ; "alias uppercase")]
#[test_case("always_pass", PolicyKind::AlwaysPass ; "underscore")]
#[test_case("none", PolicyKind::AlwaysPass ; "alias none")]
fn test_policy_parsing(input: &str, expected: PolicyKind) {
    assert_eq!(input.parse::<PolicyKind>().unwrap(), expected);
}

#[test_case(MetadataField::Operator ; "operator")]
#[test_case(MetadataField::Hardware ; "hardware")]
#[test_case(MetadataField::Firmware ; "firmware")]
#[test_case(MetadataField::Application ; "application")]
fn test_metadata_field_display_parses_back(field: MetadataField) {
    assert_eq!(field.to_string().parse::<MetadataField>().unwrap(), field);
}

// =============================================================================
// Line text
// =============================================================================

#[test_case(true, "", "[X] Card detected" ; "checked")]
#[test_case(false, "", "[ ] Card detected" ; "unchecked")]
#[test_case(false, " reader offline ", "[ ] Card detected - Notes: reader offline" ; "note trimmed")]
#[test_case(true, "   ", "[X] Card detected" ; "blank note ignored")]
fn test_item_line(checked: bool, note: &str, expected: &str) {
    let state = ItemState {
        checked,
        note: note.to_string(),
    };
    assert_eq!(item_line("Card detected", &state), expected);
}

#[test_case("Dana", "Dana" ; "plain")]
#[test_case("Dana Q/A", "Dana_Q_A" ; "space and slash")]
#[test_case("José", "Jos_" ; "non ascii")]
#[test_case("qa-team.1", "qa-team.1" ; "allowed punctuation")]
fn test_sanitize_component(raw: &str, expected: &str) {
    assert_eq!(sanitize_component(raw), expected);
}
