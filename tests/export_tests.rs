//! Export artifact tests.

use pantry_tools::model::{items_from_json, PantryItem};
use pantry_tools::reports::{to_delimited_text, EXPORT_FILE_NAME, EXPORT_HEADER, EXPORT_MIME_TYPE};

const FIXTURE: &str = include_str!("fixtures/pantry.json");

#[test]
fn test_artifact_metadata() {
    assert_eq!(EXPORT_FILE_NAME, "my-pantry.csv");
    assert_eq!(EXPORT_MIME_TYPE, "text/csv");
}

#[test]
fn test_fixture_export() {
    let items = items_from_json(FIXTURE).unwrap();
    let csv = to_delimited_text(&items);
    let rows: Vec<&str> = csv.split('\n').collect();

    assert_eq!(rows.len(), items.len() + 1);
    assert_eq!(rows[0], EXPORT_HEADER);
    assert_eq!(rows[1], "\"Whole Milk\",0.5,l,2024-06-03,2024-05-20");
    assert_eq!(rows[3], "\"Basmati Rice\",5,kg,2025-03-01,2024-01-10");
    // No added date: trailing empty field.
    assert_eq!(rows[6], "\"Smoked Paprika\",1,jar,2026-01-01,");
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_export_keeps_input_order() {
    let items = vec![
        PantryItem::new("Zucchini", 1.0, "pcs", "2024-07-01").unwrap(),
        PantryItem::new("Apple", 2.0, "pcs", "2024-07-02").unwrap(),
    ];
    let csv = to_delimited_text(&items);
    let firsts: Vec<&str> = csv.lines().skip(1).map(|l| &l[..4]).collect();
    assert_eq!(firsts, ["\"Zuc", "\"App"]);
}

#[test]
fn test_special_characters_pass_through_unescaped() {
    let items = vec![PantryItem::new("Ben's \"Best\" Rice", 1.0, "kg, dry", "2024-07-01").unwrap()];
    assert_eq!(
        to_delimited_text(&items).lines().nth(1),
        Some("\"Ben's \"Best\" Rice\",1,kg, dry,2024-07-01,")
    );
}
