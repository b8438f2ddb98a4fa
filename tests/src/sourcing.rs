#![cfg(test)]
use std::fs;

use contactr_common::country::CountryId;
use contactr_common::sourcing::SourcingMode;
use contactr_core::generator::{GenerateRequest, Generator};
use contactr_core::prefixes::PrefixTable;

async fn table_from(json: &str) -> PrefixTable {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefixes.json");
    fs::write(&path, json).unwrap();
    PrefixTable::load(&path).await
}

#[tokio::test]
async fn registry_mode_uses_the_loaded_lookup() {
    let table = table_from(r#"{"806": ["335", "468", "589"]}"#).await;
    let us = CountryId::Us.rule();

    let candidates = table.candidates("806", SourcingMode::Registry, us);
    assert_eq!(candidates, vec!["335", "468", "589"]);
}

/// With nothing loaded, mode B still ends up on the full generated set:
/// 800 candidates from "200" through "999".
#[tokio::test]
async fn registry_mode_without_data_falls_back_to_the_generated_set() {
    let table = PrefixTable::empty();
    let us = CountryId::Us.rule();

    let candidates = table.candidates("806", SourcingMode::Registry, us);
    assert_eq!(candidates.len(), 800);
    assert_eq!(candidates.first().map(String::as_str), Some("200"));
    assert_eq!(candidates.last().map(String::as_str), Some("999"));
}

#[tokio::test]
async fn hybrid_mode_prefers_loaded_data_per_area_code() {
    let table = table_from(r#"{"416": ["555"]}"#).await;
    let ca = CountryId::Ca.rule();

    assert_eq!(table.candidates("416", SourcingMode::Hybrid, ca), vec!["555"]);
    assert_eq!(table.candidates("604", SourcingMode::Hybrid, ca).len(), 800);
}

#[tokio::test]
async fn malformed_lookup_degrades_to_the_generated_set() {
    let table = table_from("{ definitely not json").await;
    assert!(table.is_empty());

    let us = CountryId::Us.rule();
    assert_eq!(table.candidates("806", SourcingMode::Registry, us).len(), 800);
}

/// Generation with a registry-backed table only ever emits the registered
/// prefixes for that area code.
#[tokio::test]
async fn generated_numbers_draw_prefixes_from_the_table() {
    let table = table_from(r#"{"806": ["335"]}"#).await;
    let mut generator = Generator::seeded(table, 17);

    let contacts = generator
        .generate(&GenerateRequest {
            country: CountryId::Us,
            area_code: "806".to_string(),
            mode: SourcingMode::Registry,
            count: 40,
            prefix: None,
        })
        .unwrap();

    assert!(contacts.iter().all(|c| c.phone.starts_with("+1806335")));
}
