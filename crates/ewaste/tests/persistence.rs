//! End-to-end checks of the data file format and the sample run.

use chrono::NaiveDate;
use ewaste::inventory::DEFAULT_INDENT;
use ewaste::item::DATE_FORMAT;
use ewaste::{demo, Inventory, LoadOutcome};
use tempfile::TempDir;

fn triples(inventory: &Inventory) -> Vec<(String, NaiveDate, i64)> {
    inventory
        .iter()
        .map(|item| {
            (
                item.name().to_string(),
                item.purchase_date(),
                item.expected_lifetime(),
            )
        })
        .collect()
}

#[test]
fn round_trip_preserves_items_and_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ewaste_data.json");

    let mut inventory = Inventory::new();
    inventory.add_item("Router", "2019-11-30", 5).unwrap();
    inventory.add_item("Laptop", "2022-01-01", 3).unwrap();
    inventory.add_item("Router", "2024-02-29", 5).unwrap();
    inventory.add_item("Smart Watch ⌚", "2023-06-15", 0).unwrap();
    inventory.save_data(&path).unwrap();

    let mut reloaded = Inventory::new();
    assert_eq!(reloaded.load_data(&path).unwrap(), LoadOutcome::Loaded(4));
    assert_eq!(triples(&reloaded), triples(&inventory));

    for (before, after) in inventory.iter().zip(reloaded.iter()) {
        assert_eq!(before.replacement_date(), after.replacement_date());
    }
}

#[test]
fn saved_file_has_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ewaste_data.json");

    let mut inventory = Inventory::new();
    inventory.add_item("Smartphone", "2023-06-15", 2).unwrap();
    inventory.save_data(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let record = &value.as_array().unwrap()[0];

    assert_eq!(record["name"], "Smartphone");
    assert_eq!(record["purchase_date"], "2023-06-15");
    assert_eq!(record["expected_lifetime"], 2);
    assert_eq!(record["replacement_date"], "2025-06-14");
    assert!(record["due_for_replacement"].is_boolean());
}

#[test]
fn hand_written_minimal_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ewaste_data.json");
    std::fs::write(
        &path,
        r#"[
    {"name": "Tablet", "purchase_date": "2020-01-01", "expected_lifetime": 4, "note": "spare"}
]"#,
    )
    .unwrap();

    let mut inventory = Inventory::new();
    inventory.load_data(&path).unwrap();

    let tablet = &inventory.items()[0];
    let expected = NaiveDate::parse_from_str("2023-12-31", DATE_FORMAT).unwrap();
    assert_eq!(tablet.replacement_date(), expected);
}

#[test]
fn demo_scenario_between_replacement_dates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ewaste_data.json");
    let now = NaiveDate::from_ymd_opt(2025, 2, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let mut inventory = Inventory::new();
    let report = demo::run(&mut inventory, &path, DEFAULT_INDENT, now).unwrap();

    assert_eq!(report.load, LoadOutcome::NotFound);
    assert_eq!(
        report.due,
        vec![(
            "Laptop".to_string(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        )]
    );

    let mut reloaded = Inventory::new();
    reloaded.load_data(&path).unwrap();
    let names: Vec<_> = reloaded.iter().map(|item| item.name()).collect();
    assert_eq!(names, vec!["Smartphone"]);
}
