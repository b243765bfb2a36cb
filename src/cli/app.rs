use super::commands::PropertyCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "config-properties")]
#[command(about = "Inspect, set and revert named configuration properties")]
pub struct Cli {
    /// Settings file holding property overrides
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Actor the change is attributed to (defaults to the settings file's default_actor)
    #[arg(long, global = true)]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Config property management
    #[command(flatten)]
    Properties(PropertyCommands),
}
