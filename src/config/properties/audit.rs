//! Change log of config property mutations

use super::types::PropertyValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// What kind of mutation was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Set,
    Revert,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Set => write!(f, "set"),
            ChangeKind::Revert => write!(f, "revert"),
        }
    }
}

/// One recorded mutation of a property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyChange {
    pub actor_id: String,
    pub name: String,
    pub kind: ChangeKind,
    pub old_value: PropertyValue,
    pub new_value: PropertyValue,
    pub changed_at: DateTime<Utc>,
}

/// Append-only, thread-safe list of changes
#[derive(Debug, Default)]
pub struct ChangeLog {
    entries: RwLock<Vec<PropertyChange>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &self,
        actor_id: &str,
        name: &str,
        kind: ChangeKind,
        old_value: PropertyValue,
        new_value: PropertyValue,
    ) {
        log::info!(
            "{} {} config property {}: {} -> {}",
            actor_id,
            kind,
            name,
            old_value,
            new_value
        );
        let change = PropertyChange {
            actor_id: actor_id.to_string(),
            name: name.to_string(),
            kind,
            old_value,
            new_value,
            changed_at: Utc::now(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change);
    }

    /// All changes, oldest first
    pub fn entries(&self) -> Vec<PropertyChange> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Changes to a single property, oldest first
    pub fn for_property(&self, name: &str) -> Vec<PropertyChange> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|change| change.name == name)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
