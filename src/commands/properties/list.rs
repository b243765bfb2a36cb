use crate::commands::CommandContext;
use anyhow::{Context, Result};
use colored::Colorize;

/// List all config properties
///
/// Properties that differ from their default are highlighted together
/// with the default they would revert to.
pub fn list_command(ctx: &CommandContext, json: bool) -> Result<()> {
    if json {
        let listing = serde_json::to_string_pretty(&ctx.service.list_properties())
            .context("Failed to serialize config properties")?;
        println!("{}", listing);
        return Ok(());
    }

    let properties = ctx.service.registry().list_all();
    if properties.is_empty() {
        println!("No config properties registered.");
        return Ok(());
    }

    println!("Config Properties:");
    println!("==================");

    for prop in &properties {
        if prop.is_default() {
            println!("  {} = {}", prop.name().bold(), prop.value());
        } else {
            println!(
                "  {} = {} {}",
                prop.name().bold(),
                prop.value().to_string().yellow(),
                format!("(default: {})", prop.default_value()).dimmed()
            );
        }
        if !prop.description().is_empty() {
            println!("      {}", prop.description().dimmed());
        }
    }

    let modified = properties.iter().filter(|p| !p.is_default()).count();
    println!("\nTotal properties: {} ({} modified)", properties.len(), modified);

    Ok(())
}
