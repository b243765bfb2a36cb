use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::sync::Arc;

use config_properties::cli::{Cli, Commands};
use config_properties::commands::CommandContext;
use config_properties::commands::properties::handle_property_command;
use config_properties::config::properties::registrations;
use config_properties::config::{ConfigRegistry, ConfigService, Settings};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting config-properties");

    // Registry first: settings overrides are validated against it
    let registry = ConfigRegistry::new();
    registrations::register_all(&registry).context("Failed to register config properties")?;
    debug!("Initialized config registry with {} properties", registry.count());
    let service = ConfigService::new(Arc::new(registry));

    let settings_path = match cli.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let settings = Settings::load_from(&settings_path)?;
    let applied = settings.apply(&service);
    debug!("Applied {} overrides from {:?}", applied, settings_path);

    let actor = cli.actor.unwrap_or_else(|| settings.actor().to_string());
    let mut ctx = CommandContext {
        service,
        settings,
        settings_path,
        actor,
    };

    match cli.command {
        Commands::Properties(command) => handle_property_command(&mut ctx, command)?,
    }

    Ok(())
}
