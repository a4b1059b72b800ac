//! Integration tests for the CSV serializer
//!
//! Covers the fixed header contract, row counts, and RFC-4180 escaping
//! round-trips through a conformant CSV reader.

use medivault::core::export::csv::{serialize_items, CSV_HEADER};
use medivault::domain::{ExportError, ItemRecord};
use test_case::test_case;

fn item(name: &str) -> ItemRecord {
    ItemRecord::builder().name(name).quantity(1).build().unwrap()
}

#[test]
fn header_matches_store_wire_names_in_order() {
    assert_eq!(
        CSV_HEADER,
        [
            "name",
            "barcode",
            "quantity",
            "minQuantity",
            "category",
            "location",
            "notes",
            "createdAt",
            "updatedAt"
        ]
    );
}

#[test]
fn zero_records_signal_empty_input_not_csv() {
    match serialize_items(&[]) {
        Err(ExportError::EmptyInput) => {}
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test_case(1)]
#[test_case(5)]
#[test_case(100)]
fn row_count_is_items_plus_header(count: usize) {
    let items: Vec<ItemRecord> = (0..count).map(|i| item(&format!("Item {i}"))).collect();
    let csv = serialize_items(&items).unwrap();
    assert_eq!(csv.lines().count(), count + 1);
}

#[test_case("plain name" ; "no special characters")]
#[test_case("comma, separated" ; "embedded comma")]
#[test_case("the \"good\" one" ; "embedded quotes")]
#[test_case("line one\nline two" ; "embedded newline")]
#[test_case("all, of \"it\"\ntogether" ; "everything at once")]
fn field_round_trips_through_conformant_parser(value: &str) {
    let record = ItemRecord::builder()
        .name("Probe")
        .quantity(1)
        .notes(value)
        .build()
        .unwrap();

    let csv = serialize_items(&[record]).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[6], value);
}

#[test]
fn every_column_round_trips() {
    let record = ItemRecord::builder()
        .name("Saline, 0.9%")
        .barcode("012345678905")
        .quantity(24)
        .min_quantity(6)
        .category("IV Fluids")
        .location("Cabinet B, shelf 2")
        .notes("keep \"upright\"\nrotate stock")
        .build()
        .unwrap();

    let csv = serialize_items(&[record.clone()]).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(&row[0], "Saline, 0.9%");
    assert_eq!(&row[1], "012345678905");
    assert_eq!(&row[2], "24");
    assert_eq!(&row[3], "6");
    assert_eq!(&row[4], "IV Fluids");
    assert_eq!(&row[5], "Cabinet B, shelf 2");
    assert_eq!(&row[6], "keep \"upright\"\nrotate stock");
}

#[test]
fn optional_fields_render_as_empty_strings() {
    let csv = serialize_items(&[item("Bare")]).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(&row[1], ""); // barcode
    assert_eq!(&row[3], ""); // minQuantity
    assert_eq!(&row[4], ""); // category
    assert_eq!(&row[5], ""); // location
    assert_eq!(&row[6], ""); // notes
}

#[test]
fn timestamps_render_in_wire_form() {
    let csv = serialize_items(&[item("Clock")]).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let row = reader.records().next().unwrap().unwrap();

    // ISO-8601 UTC with millisecond precision: 2025-01-15T10:00:00.000Z
    let created = &row[7];
    assert_eq!(created.len(), 24);
    assert!(created.ends_with('Z'));
    assert_eq!(&created[10..11], "T");
}

#[test]
fn item_order_is_preserved() {
    let items = vec![item("Zinc"), item("Aspirin"), item("Morphine")];
    let csv = serialize_items(&items).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].starts_with("Zinc"));
    assert!(lines[2].starts_with("Aspirin"));
    assert!(lines[3].starts_with("Morphine"));
}
