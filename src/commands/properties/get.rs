use crate::commands::CommandContext;
use anyhow::Result;
use log::info;

/// Get the value of a specific property
///
/// # Arguments
/// * `name` - Property name
///
/// # Returns
/// * `Ok(())` - Property value displayed successfully
/// * `Err(anyhow::Error)` - Unknown property
pub fn get_command(ctx: &CommandContext, name: &str) -> Result<()> {
    info!("Getting config property: {}", name);

    let value = ctx.service.get_property(name)?;
    println!("{}", value);

    Ok(())
}
