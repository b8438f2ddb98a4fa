#![cfg(test)]
use std::fs;

use contactr_common::config::Theme;
use contactr_common::country::CountryId;
use contactr_common::settings::PersistedSettings;
use contactr_common::sourcing::SourcingMode;

#[test]
fn settings_survive_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings_v1.json");

    let saved = PersistedSettings {
        country: CountryId::Au,
        mode: SourcingMode::Algorithmic,
        area_code: "4".to_string(),
        count: 2_500,
        theme: Theme::Light,
    };
    saved.save(&path).unwrap();

    assert_eq!(PersistedSettings::load(&path), Some(saved));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("settings_v1.json");

    PersistedSettings::default().save(&path).unwrap();
    assert!(path.is_file());
}

#[test]
fn broken_state_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings_v1.json");

    fs::write(&path, r#"{"country": "US", "mode": 7}"#).unwrap();
    let loaded = PersistedSettings::load(&path).unwrap_or_default();

    assert_eq!(loaded, PersistedSettings::default());
}

#[test]
fn overwriting_keeps_only_the_latest_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings_v1.json");

    let mut settings = PersistedSettings::default();
    settings.save(&path).unwrap();

    settings.count = 777;
    settings.country = CountryId::De;
    settings.save(&path).unwrap();

    let loaded = PersistedSettings::load(&path).unwrap();
    assert_eq!(loaded.count, 777);
    assert_eq!(loaded.country, CountryId::De);
}
