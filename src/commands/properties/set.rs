use crate::commands::CommandContext;
use anyhow::Result;
use log::info;

/// Set the value of a specific property
///
/// # Arguments
/// * `name` - Property name
/// * `value` - Raw value, parsed according to the property's type
///
/// # Returns
/// * `Ok(())` - Property updated and settings file written
/// * `Err(anyhow::Error)` - Unknown property, invalid value or I/O error
pub fn set_command(ctx: &mut CommandContext, name: &str, value: &str) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let parsed = ctx.service.parse_value(name, value)?;
    ctx.service.set_property(&ctx.actor, name, parsed)?;
    ctx.persist()?;

    println!("Set {} to {}", name, ctx.service.get_property(name)?);
    Ok(())
}
