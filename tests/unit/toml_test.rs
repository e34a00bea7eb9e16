//! Checklist definition file tests

use std::fs;

use qa_checklist::adapters::toml::{load_definition, parse_definition};
use tempfile::TempDir;

#[test]
fn parses_sections_in_file_order() {
    let def = parse_definition(
        r#"
[[section]]
category = "Contactless"
items = ["Tap a contactless card", "Tap a phone wallet"]

[[section]]
category = "Receipts"
items = ["Print merchant copy"]
"#,
    )
    .unwrap();

    assert_eq!(def.sections().len(), 2);
    assert_eq!(def.sections()[1].category, "Receipts");
    assert_eq!(def.item_count(), 3);
}

#[test]
fn duplicate_items_in_file_are_rejected() {
    let err = parse_definition(
        r#"
[[section]]
category = "A"
items = ["Same", "Same"]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Same"));
}

#[test]
fn load_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_definition(&dir.path().join("missing.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checklist.toml");
    fs::write(&path, "[[section]]\ncategory = \"A\"\nitems = [\"one\"]\n").unwrap();
    assert_eq!(load_definition(&path).unwrap().item_count(), 1);
}
