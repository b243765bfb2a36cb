//! Service layer for reading, setting and reverting config properties
//!
//! All mutation goes through [`ConfigService`], which attributes each
//! change to an actor and records it in a [`ChangeLog`]. The registry
//! itself is injected so callers (and tests) control its lifecycle.

use super::audit::{ChangeKind, ChangeLog, PropertyChange};
use super::error::ConfigError;
use super::key::{PropertyKey, PropertyKind};
use super::registry::ConfigRegistry;
use super::types::{PropertyType, PropertyValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Admin view of one property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySummary {
    pub schema: PropertyType,
    pub value: PropertyValue,
    pub description: String,
}

/// Façade over a [`ConfigRegistry`]
pub struct ConfigService {
    registry: Arc<ConfigRegistry>,
    changes: ChangeLog,
}

impl ConfigService {
    /// Create a service over a registry
    pub fn new(registry: Arc<ConfigRegistry>) -> Self {
        Self {
            registry,
            changes: ChangeLog::new(),
        }
    }

    /// Get a reference to the property registry
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Current value of a property
    pub fn get_property(&self, name: &str) -> Result<PropertyValue, ConfigError> {
        self.registry.value(name)
    }

    /// Current value through a typed key
    pub fn get<T: PropertyKind>(&self, key: &PropertyKey<T>) -> Result<T, ConfigError> {
        self.registry.get(key)
    }

    /// Parse a command-line string according to the property's schema
    pub fn parse_value(&self, name: &str, raw: &str) -> Result<PropertyValue, ConfigError> {
        let prop = self
            .registry
            .lookup(name)
            .ok_or_else(|| ConfigError::not_found(name))?;
        prop.schema()
            .parse(raw)
            .map_err(|violation| ConfigError::invalid_value(name, violation))
    }

    /// Coerce a JSON value according to the property's schema
    pub fn coerce_json(
        &self,
        name: &str,
        json: &serde_json::Value,
    ) -> Result<PropertyValue, ConfigError> {
        let prop = self
            .registry
            .lookup(name)
            .ok_or_else(|| ConfigError::not_found(name))?;
        prop.schema()
            .value_from_json(json)
            .map_err(|violation| ConfigError::invalid_value(name, violation))
    }

    /// Assign a new value to a property
    ///
    /// Fails with [`ConfigError::NotFound`] for an unknown name, regardless
    /// of the value, and with [`ConfigError::InvalidValue`] when the schema
    /// rejects the value. Neither failure mutates anything.
    pub fn set_property(
        &self,
        actor_id: &str,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ConfigError> {
        let value = value.into();
        let old = self.registry.assign(name, value.clone())?;
        self.changes.record(actor_id, name, ChangeKind::Set, old, value);
        Ok(())
    }

    /// Assign a new value through a typed key
    pub fn set<T: PropertyKind>(
        &self,
        actor_id: &str,
        key: &PropertyKey<T>,
        value: T,
    ) -> Result<(), ConfigError> {
        self.set_property(actor_id, key.name(), value.into_value())
    }

    /// Reset a property to its registered default
    pub fn revert_property(&self, actor_id: &str, name: &str) -> Result<(), ConfigError> {
        let (old, default) = self.registry.reset(name)?;
        self.changes.record(actor_id, name, ChangeKind::Revert, old, default);
        Ok(())
    }

    /// Assign several properties at once
    ///
    /// Every name and value is checked before anything is assigned; on
    /// failure the first error in name order is returned and no property
    /// changes.
    pub fn save_properties(
        &self,
        actor_id: &str,
        values: BTreeMap<String, PropertyValue>,
    ) -> Result<(), ConfigError> {
        let applied = self.registry.assign_many(values.into_iter().collect())?;
        for (name, old, new) in applied {
            self.changes.record(actor_id, &name, ChangeKind::Set, old, new);
        }
        Ok(())
    }

    /// Revert every property not at its default
    ///
    /// Returns the names that were reverted, sorted.
    pub fn revert_all(&self, actor_id: &str) -> Result<Vec<String>, ConfigError> {
        let modified: Vec<String> = self
            .registry
            .list_all()
            .into_iter()
            .filter(|prop| !prop.is_default())
            .map(|prop| prop.name().to_string())
            .collect();

        for name in &modified {
            self.revert_property(actor_id, name)?;
        }
        Ok(modified)
    }

    /// Every property keyed by name, with schema, value and description
    pub fn list_properties(&self) -> BTreeMap<String, PropertySummary> {
        self.registry
            .list_all()
            .into_iter()
            .map(|prop| {
                let summary = PropertySummary {
                    schema: prop.schema().clone(),
                    value: prop.value().clone(),
                    description: prop.description().to_string(),
                };
                (prop.name().to_string(), summary)
            })
            .collect()
    }

    /// Recorded changes to one property, oldest first
    pub fn history(&self, name: &str) -> Vec<PropertyChange> {
        self.changes.for_property(name)
    }

    /// The full change log
    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }
}
