//! TOML settings file holding property overrides

use super::properties::{ConfigService, PropertyValue};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Actor recorded for overrides applied from the settings file
pub const SETTINGS_ACTOR: &str = "settings-file";

const DEFAULT_ACTOR: &str = "admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Actor used by the CLI when `--actor` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_actor: Option<String>,

    /// Property values that differ from their registered defaults
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("config-properties")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".config-properties")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings, returning defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading settings from: {:?}", path);

        if !path.exists() {
            info!("Settings file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;

        debug!("Loaded settings with {} property overrides", settings.properties.len());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving settings to: {:?}", path);

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let content =
            toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;

        info!("Settings saved successfully");
        Ok(())
    }

    /// Actor to attribute CLI changes to when none is given
    pub fn actor(&self) -> &str {
        self.default_actor.as_deref().unwrap_or(DEFAULT_ACTOR)
    }

    /// Apply every override to the service, returning how many took effect
    ///
    /// Unknown names and rejected values are logged and skipped so a stale
    /// file never blocks startup.
    pub fn apply(&self, service: &ConfigService) -> usize {
        let mut applied = 0;

        for (name, raw) in &self.properties {
            let result = service
                .coerce_json(name, raw)
                .and_then(|value| service.set_property(SETTINGS_ACTOR, name, value));

            match result {
                Ok(()) => applied += 1,
                Err(e) => warn!("Ignoring settings entry {}: {}", name, e),
            }
        }

        debug!("Applied {} of {} settings overrides", applied, self.properties.len());
        applied
    }

    /// Replace the overrides with the service's current non-default values
    pub fn capture(&mut self, service: &ConfigService) {
        self.properties = service
            .registry()
            .list_all()
            .into_iter()
            .filter(|prop| !prop.is_default())
            .map(|prop| (prop.name().to_string(), PropertyValue::to_json(prop.value())))
            .collect();
    }
}
