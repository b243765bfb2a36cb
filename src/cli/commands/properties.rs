use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Show every config property with its current value
    List {
        /// Print the admin view as JSON (schema, value, description)
        #[arg(long)]
        json: bool,
    },
    /// Get the value of a specific property
    Get {
        /// Property name
        name: String,
    },
    /// Set the value of a specific property
    Set {
        /// Property name
        name: String,
        /// New value, parsed according to the property's type
        value: String,
    },
    /// Revert a property to its default value
    Revert {
        /// Property name
        name: String,
    },
    /// Revert every property to its default value
    RevertAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Save several properties at once from a JSON object of name to value
    Save {
        /// Inline JSON object
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        json: Option<String>,
        /// Read the JSON object from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
