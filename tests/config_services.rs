//! Integration tests for setting and reverting config properties
//!
//! Exercises the public service API against the built-in registrations.

use config_properties::config::properties::registrations;
use config_properties::config::properties::registrations::exploration::RECORD_PLAYTHROUGH_PROBABILITY;
use config_properties::config::properties::{
    ChangeKind, ConfigError, ConfigRegistry, ConfigService, PropertyValue,
};
use std::collections::BTreeMap;
use std::sync::Arc;

fn service() -> ConfigService {
    let registry = Arc::new(ConfigRegistry::new());
    registrations::register_all(&registry).unwrap();
    ConfigService::new(registry)
}

fn snapshot(service: &ConfigService) -> Vec<(String, PropertyValue)> {
    service
        .registry()
        .list_all()
        .into_iter()
        .map(|p| (p.name().to_string(), p.value().clone()))
        .collect()
}

#[test]
fn test_can_set_config_property() {
    let service = service();
    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.2);

    service
        .set_property("admin", "record_playthrough_probability", 0.5)
        .unwrap();

    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.5);
    assert_eq!(
        service.get_property("record_playthrough_probability").unwrap(),
        PropertyValue::Float(0.5)
    );
}

#[test]
fn test_can_not_set_config_property_with_invalid_config_property_name() {
    let service = service();
    let before = snapshot(&service);

    let err = service
        .set_property("admin", "new_config_property_name", true)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No config property with name new_config_property_name found."
    );
    assert_eq!(err, ConfigError::NotFound("new_config_property_name".to_string()));
    assert_eq!(snapshot(&service), before);
}

#[test]
fn test_unknown_name_reported_for_any_value_type() {
    let service = service();
    let values = [
        PropertyValue::Bool(false),
        PropertyValue::Int(-1),
        PropertyValue::UInt(3),
        PropertyValue::Float(0.5),
        PropertyValue::String("x".to_string()),
    ];

    for value in values {
        let err = service.set_property("admin", "unknown_name", value).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("unknown_name"));
    }
    assert!(service.changes().is_empty());
}

#[test]
fn test_can_revert_config_property() {
    let service = service();
    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.2);

    service
        .set_property("admin", "record_playthrough_probability", 0.5)
        .unwrap();
    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.5);

    service
        .revert_property("admin", "record_playthrough_probability")
        .unwrap();
    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.2);
}

#[test]
fn test_can_not_revert_config_property_with_invalid_config_property_name() {
    let service = service();
    let before = snapshot(&service);

    let err = service
        .revert_property("admin", "new_config_property_name")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No config property with name new_config_property_name found."
    );
    assert_eq!(snapshot(&service), before);
}

#[test]
fn test_out_of_range_value_is_rejected() {
    let service = service();

    let err = service
        .set_property("admin", "record_playthrough_probability", 1.5)
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "record_playthrough_probability"));
    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 0.2);

    // Wrong type is a validation failure, not a lookup failure
    let err = service
        .set_property("admin", "record_playthrough_probability", true)
        .unwrap_err();
    assert!(!err.is_not_found());
}

#[test]
fn test_changes_are_attributed_to_actor() {
    let service = service();
    service
        .set_property("admin", "record_playthrough_probability", 0.5)
        .unwrap();
    service
        .revert_property("moderator", "record_playthrough_probability")
        .unwrap();

    let history = service.history("record_playthrough_probability");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].actor_id, "admin");
    assert_eq!(history[0].kind, ChangeKind::Set);
    assert_eq!(history[0].old_value, PropertyValue::Float(0.2));
    assert_eq!(history[0].new_value, PropertyValue::Float(0.5));
    assert_eq!(history[1].actor_id, "moderator");
    assert_eq!(history[1].kind, ChangeKind::Revert);
    assert_eq!(history[1].new_value, PropertyValue::Float(0.2));
}

#[test]
fn test_save_properties_from_json() {
    let service = service();
    let input = serde_json::json!({
        "record_playthrough_probability": 1,
        "contributor_dashboard_is_enabled": false,
        "email_sender_name": "Ops Team"
    });

    let mut values = BTreeMap::new();
    for (name, json) in input.as_object().unwrap() {
        values.insert(name.clone(), service.coerce_json(name, json).unwrap());
    }
    service.save_properties("admin", values).unwrap();

    assert_eq!(service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap(), 1.0);
    let listing = service.list_properties();
    assert_eq!(
        listing["contributor_dashboard_is_enabled"].value,
        PropertyValue::Bool(false)
    );
    assert_eq!(
        listing["email_sender_name"].value,
        PropertyValue::String("Ops Team".to_string())
    );
}

#[test]
fn test_concurrent_writers_leave_a_written_value() {
    let service = Arc::new(service());
    let candidates = [0.1, 0.3, 0.6, 0.9];

    let handles: Vec<_> = candidates
        .iter()
        .map(|&p| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    service
                        .set_property("admin", "record_playthrough_probability", p)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Last writer wins: whichever it was, the value is one that was written
    let value = service.get(&RECORD_PLAYTHROUGH_PROBABILITY).unwrap();
    assert!(candidates.contains(&value));
    assert_eq!(service.changes().len(), 400);
}
