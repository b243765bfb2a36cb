//! Contributor dashboard properties registration

use crate::config::properties::error::ConfigError;
use crate::config::properties::{ConfigRegistry, PropertyDefBuilder, PropertyKey};

pub const CONTRIBUTOR_DASHBOARD_IS_ENABLED: PropertyKey<bool> =
    PropertyKey::new("contributor_dashboard_is_enabled");
pub const MAX_SUGGESTIONS_PER_REVIEWER: PropertyKey<u64> =
    PropertyKey::new("max_number_of_suggestions_per_reviewer");
pub const NOTIFY_ADMINS_SUGGESTIONS_WAITING: PropertyKey<bool> =
    PropertyKey::new("notify_admins_suggestions_waiting_too_long_is_enabled");

/// Register all contributor-related properties
pub fn register(registry: &ConfigRegistry) -> Result<(), ConfigError> {
    registry.register(
        PropertyDefBuilder::new(CONTRIBUTOR_DASHBOARD_IS_ENABLED.name())
            .description("Enable contributor dashboard page")
            .bool_type(true)
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(MAX_SUGGESTIONS_PER_REVIEWER.name())
            .description("Maximum number of suggestions shown to a reviewer at once")
            .uint_type(5, Some(1), None)
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(NOTIFY_ADMINS_SUGGESTIONS_WAITING.name())
            .description("Email admins about suggestions waiting too long for review")
            .bool_type(false)
            .build()?,
    )?;

    log::info!("Registered {} contributor properties", 3);
    Ok(())
}
