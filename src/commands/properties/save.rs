use crate::commands::CommandContext;
use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Save several properties at once
///
/// The input is a JSON object mapping property names to values. Nothing
/// is applied unless every entry is valid.
///
/// # Arguments
/// * `json` - Inline JSON object
/// * `file` - Path to a file containing the JSON object
///
/// # Returns
/// * `Ok(())` - All properties updated and settings file written
/// * `Err(anyhow::Error)` - Malformed input, unknown property or invalid value
pub fn save_command(ctx: &mut CommandContext, json: Option<String>, file: Option<PathBuf>) -> Result<()> {
    let raw = match (json, file) {
        (Some(json), _) => json,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read property values from {:?}", path))?,
        (None, None) => anyhow::bail!("Provide a JSON object or --file"),
    };

    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).context("Property values must be a JSON object")?;
    info!("Saving {} config properties", entries.len());

    let mut values = BTreeMap::new();
    for (name, json_value) in &entries {
        let value = ctx.service.coerce_json(name, json_value)?;
        values.insert(name.clone(), value);
    }

    let count = values.len();
    ctx.service.save_properties(&ctx.actor, values)?;
    ctx.persist()?;

    println!("Saved {} config properties", count);
    Ok(())
}
