//! Exploration player and improvements options registration

use crate::config::properties::error::ConfigError;
use crate::config::properties::{ConfigRegistry, PropertyDefBuilder, PropertyKey};

pub const RECORD_PLAYTHROUGH_PROBABILITY: PropertyKey<f64> =
    PropertyKey::new("record_playthrough_probability");
pub const HIGH_BOUNCE_RATE_CREATION_THRESHOLD: PropertyKey<f64> =
    PropertyKey::new("high_bounce_rate_task_state_bounce_rate_creation_threshold");
pub const HIGH_BOUNCE_RATE_OBSOLETION_THRESHOLD: PropertyKey<f64> =
    PropertyKey::new("high_bounce_rate_task_state_bounce_rate_obsoletion_threshold");
pub const HIGH_BOUNCE_RATE_MINIMUM_STARTS: PropertyKey<u64> =
    PropertyKey::new("high_bounce_rate_task_minimum_exploration_starts");
pub const ALWAYS_ASK_FOR_ANSWER_DETAILS: PropertyKey<bool> =
    PropertyKey::new("always_ask_learners_for_answer_details");

/// Register all exploration-related properties
pub fn register(registry: &ConfigRegistry) -> Result<(), ConfigError> {
    registry.register(
        PropertyDefBuilder::new(RECORD_PLAYTHROUGH_PROBABILITY.name())
            .description("The probability of recording playthroughs")
            .probability_type(0.2)
            .build()?,
    )?;

    // Bounce rate thresholds for improvement tasks
    registry.register(
        PropertyDefBuilder::new(HIGH_BOUNCE_RATE_CREATION_THRESHOLD.name())
            .description("The bounce rate a state must exceed to create a new improvements task")
            .probability_type(0.2)
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(HIGH_BOUNCE_RATE_OBSOLETION_THRESHOLD.name())
            .description("The bounce rate a state must fall under to discard its improvement task")
            .probability_type(0.2)
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(HIGH_BOUNCE_RATE_MINIMUM_STARTS.name())
            .description("The minimum number of exploration starts before bounce rate tasks are created")
            .uint_type(1000, None, None)
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(ALWAYS_ASK_FOR_ANSWER_DETAILS.name())
            .description("Always ask learners for answer details")
            .bool_type(false)
            .build()?,
    )?;

    log::info!("Registered {} exploration properties", 5);
    Ok(())
}
