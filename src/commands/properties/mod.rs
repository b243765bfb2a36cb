pub mod get;
pub mod list;
pub mod revert;
pub mod save;
pub mod set;

pub use get::get_command;
pub use list::list_command;
pub use revert::{revert_all_command, revert_command};
pub use save::save_command;
pub use set::set_command;

use super::CommandContext;
use crate::cli::commands::PropertyCommands;
use anyhow::Result;

/// Dispatch a parsed property subcommand
pub fn handle_property_command(ctx: &mut CommandContext, command: PropertyCommands) -> Result<()> {
    match command {
        PropertyCommands::List { json } => list_command(ctx, json),
        PropertyCommands::Get { name } => get_command(ctx, &name),
        PropertyCommands::Set { name, value } => set_command(ctx, &name, &value),
        PropertyCommands::Revert { name } => revert_command(ctx, &name),
        PropertyCommands::RevertAll { force } => revert_all_command(ctx, force),
        PropertyCommands::Save { json, file } => save_command(ctx, json, file),
    }
}
