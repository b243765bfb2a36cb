use crate::commands::CommandContext;
use crate::ui::prompts::confirm;
use anyhow::Result;
use log::info;

/// Revert a property to its default value
///
/// # Arguments
/// * `name` - Property name
///
/// # Returns
/// * `Ok(())` - Property reverted and settings file written
/// * `Err(anyhow::Error)` - Unknown property or I/O error
pub fn revert_command(ctx: &mut CommandContext, name: &str) -> Result<()> {
    info!("Reverting config property: {}", name);

    ctx.service.revert_property(&ctx.actor, name)?;
    ctx.persist()?;

    println!("Reverted {} to {}", name, ctx.service.get_property(name)?);
    Ok(())
}

/// Revert every property to its default value
///
/// # Arguments
/// * `force` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Properties reverted, or the user cancelled
/// * `Err(anyhow::Error)` - Prompt or I/O error
pub fn revert_all_command(ctx: &mut CommandContext, force: bool) -> Result<()> {
    info!("Reverting all config properties to defaults");

    if !force && !confirm("Revert all config properties to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let reverted = ctx.service.revert_all(&ctx.actor)?;
    ctx.persist()?;

    if reverted.is_empty() {
        println!("All config properties already have their default values.");
        return Ok(());
    }

    println!("Reverted {} config properties:", reverted.len());
    for name in &reverted {
        println!("  {}: {}", name, ctx.service.get_property(name)?);
    }

    Ok(())
}
