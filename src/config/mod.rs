//! Configuration for the application
//!
//! - `properties`: registry and service for named, typed config properties
//! - `settings`: the TOML settings file carrying property overrides

pub mod properties;
pub mod settings;

pub use properties::{ConfigError, ConfigRegistry, ConfigService};
pub use settings::Settings;
