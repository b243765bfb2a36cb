//! Settings file round-trip tests

use config_properties::config::properties::registrations;
use config_properties::config::properties::registrations::contributor::MAX_SUGGESTIONS_PER_REVIEWER;
use config_properties::config::properties::registrations::exploration::RECORD_PLAYTHROUGH_PROBABILITY;
use config_properties::config::{ConfigRegistry, ConfigService, Settings};
use std::sync::Arc;
use tempfile::TempDir;

fn service() -> ConfigService {
    let registry = Arc::new(ConfigRegistry::new());
    registrations::register_all(&registry).unwrap();
    ConfigService::new(registry)
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_overrides_round_trip_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let svc = service();
    svc
        .set("admin", &RECORD_PLAYTHROUGH_PROBABILITY, 0.5)
        .unwrap();
    svc.set("admin", &MAX_SUGGESTIONS_PER_REVIEWER, 8).unwrap();

    let mut settings = Settings::default();
    settings.capture(&svc);
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.properties.len(), 2);

    let fresh = service();
    assert_eq!(loaded.apply(&fresh), 2);
    assert_eq!(fresh.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.5);
    assert_eq!(fresh.get(&MAX_SUGGESTIONS_PER_REVIEWER).unwrap(), 8);
}

#[test]
fn test_revert_drops_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let service = service();
    service
        .set("admin", &RECORD_PLAYTHROUGH_PROBABILITY, 0.5)
        .unwrap();
    let mut settings = Settings::default();
    settings.capture(&service);
    settings.save_to(&path).unwrap();

    service
        .revert_property("admin", RECORD_PLAYTHROUGH_PROBABILITY.name())
        .unwrap();
    settings.capture(&service);
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert!(loaded.properties.is_empty());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "properties = [not toml").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse settings file"));
}
