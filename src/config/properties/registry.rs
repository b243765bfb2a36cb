//! Registry owning every config property and its current value

use super::error::ConfigError;
use super::key::{PropertyKey, PropertyKind};
use super::types::{ConfigProperty, PropertyDefinition, PropertyValue};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe registry of config properties
///
/// Each call takes the lock once, so a lookup-then-assign is atomic.
/// Concurrent writers to the same property are not ordered: the last
/// writer wins.
pub struct ConfigRegistry {
    properties: RwLock<HashMap<String, ConfigProperty>>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(HashMap::new()),
        }
    }

    // Every mutation validates before touching the map, so a poisoned lock
    // still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ConfigProperty>> {
        self.properties.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ConfigProperty>> {
        self.properties.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new property; its current value starts at the default
    ///
    /// Returns an error if the name is taken or the default does not
    /// satisfy the declared type.
    pub fn register(&self, def: PropertyDefinition) -> Result<(), ConfigError> {
        if def.name.trim().is_empty() {
            return Err(ConfigError::InvalidDefinition {
                name: def.name,
                reason: "name must not be empty".to_string(),
            });
        }
        def.ty
            .check_definition()
            .map_err(|reason| ConfigError::InvalidDefinition {
                name: def.name.clone(),
                reason,
            })?;
        def.validate(&def.default)
            .map_err(|violation| ConfigError::InvalidDefinition {
                name: def.name.clone(),
                reason: format!("default value rejected: {}", violation),
            })?;

        let mut props = self.write();
        if props.contains_key(&def.name) {
            return Err(ConfigError::AlreadyRegistered(def.name));
        }
        log::debug!("Registered config property: {} (default {})", def.name, def.default);
        props.insert(def.name.clone(), ConfigProperty::new(def));
        Ok(())
    }

    /// Snapshot of a property by name
    pub fn lookup(&self, name: &str) -> Option<ConfigProperty> {
        self.read().get(name).cloned()
    }

    /// Check if a property is registered
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Current value of a property
    pub fn value(&self, name: &str) -> Result<PropertyValue, ConfigError> {
        self.read()
            .get(name)
            .map(|prop| prop.value.clone())
            .ok_or_else(|| ConfigError::not_found(name))
    }

    /// Current value of a property through its typed key
    pub fn get<T: PropertyKind>(&self, key: &PropertyKey<T>) -> Result<T, ConfigError> {
        let value = self.value(key.name())?;
        T::from_value(&value).ok_or_else(|| ConfigError::TypeMismatch {
            name: key.name().to_string(),
            expected: T::KIND,
        })
    }

    /// Get total number of registered properties
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// All property names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// List all properties, sorted by name
    pub fn list_all(&self) -> Vec<ConfigProperty> {
        let mut props: Vec<_> = self.read().values().cloned().collect();
        props.sort_by(|a, b| a.name().cmp(b.name()));
        props
    }

    /// Validate and assign a new value, returning the previous one
    pub(crate) fn assign(
        &self,
        name: &str,
        value: PropertyValue,
    ) -> Result<PropertyValue, ConfigError> {
        let mut props = self.write();
        let prop = props.get_mut(name).ok_or_else(|| ConfigError::not_found(name))?;
        prop.definition
            .validate(&value)
            .map_err(|violation| ConfigError::invalid_value(name, violation))?;

        log::debug!("Assigned config property: {} = {}", name, value);
        Ok(std::mem::replace(&mut prop.value, value))
    }

    /// Restore the default value, returning the previous value and the default
    pub(crate) fn reset(&self, name: &str) -> Result<(PropertyValue, PropertyValue), ConfigError> {
        let mut props = self.write();
        let prop = props.get_mut(name).ok_or_else(|| ConfigError::not_found(name))?;
        let default = prop.definition.default.clone();

        log::debug!("Reset config property: {} = {}", name, default);
        let old = std::mem::replace(&mut prop.value, default.clone());
        Ok((old, default))
    }

    /// Validate every entry, then assign them all under one lock
    ///
    /// Nothing is assigned unless every name exists and every value is
    /// valid. Entries are checked in the order given and the first failure
    /// is returned. Yields `(name, old, new)` for each entry.
    pub(crate) fn assign_many(
        &self,
        values: Vec<(String, PropertyValue)>,
    ) -> Result<Vec<(String, PropertyValue, PropertyValue)>, ConfigError> {
        let mut props = self.write();

        for (name, value) in &values {
            let prop = props.get(name).ok_or_else(|| ConfigError::not_found(name))?;
            prop.definition
                .validate(value)
                .map_err(|violation| ConfigError::invalid_value(name, violation))?;
        }

        let mut changes = Vec::with_capacity(values.len());
        for (name, value) in values {
            // Presence checked above under the same guard.
            if let Some(prop) = props.get_mut(&name) {
                log::debug!("Assigned config property: {} = {}", name, value);
                let old = std::mem::replace(&mut prop.value, value.clone());
                changes.push((name, old, value));
            }
        }
        Ok(changes)
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
