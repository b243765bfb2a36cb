//! Command handlers behind the CLI

pub mod properties;

use crate::config::{ConfigService, Settings};
use anyhow::Result;
use std::path::PathBuf;

/// Everything a command needs: the live service and where its overrides live
pub struct CommandContext {
    pub service: ConfigService,
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub actor: String,
}

impl CommandContext {
    /// Write the service's non-default values back to the settings file
    pub fn persist(&mut self) -> Result<()> {
        self.settings.capture(&self.service);
        self.settings.save_to(&self.settings_path)
    }
}
