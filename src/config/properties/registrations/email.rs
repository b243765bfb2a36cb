//! Outgoing email properties registration

use crate::config::properties::error::ConfigError;
use crate::config::properties::{ConfigRegistry, PropertyDefBuilder, PropertyKey};

pub const EMAIL_SENDER_NAME: PropertyKey<String> = PropertyKey::new("email_sender_name");
pub const EMAIL_FOOTER: PropertyKey<String> = PropertyKey::new("email_footer");
pub const UNPUBLISH_EXPLORATION_EMAIL_BODY: PropertyKey<String> =
    PropertyKey::new("unpublish_exploration_email_html_body");

/// Register all email-related properties
pub fn register(registry: &ConfigRegistry) -> Result<(), ConfigError> {
    registry.register(
        PropertyDefBuilder::new(EMAIL_SENDER_NAME.name())
            .description("The default sender name for outgoing emails")
            .string_type("Site Admin", Some(100))
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(EMAIL_FOOTER.name())
            .description("The footer to append to all outgoing emails")
            .string_type(
                "You can change your email preferences via the Preferences page.",
                None,
            )
            .build()?,
    )?;

    registry.register(
        PropertyDefBuilder::new(UNPUBLISH_EXPLORATION_EMAIL_BODY.name())
            .description("Default content for the email sent after an exploration is unpublished")
            .string_type(
                "I'd like to inform you that I have unpublished the above exploration.",
                None,
            )
            .build()?,
    )?;

    log::info!("Registered {} email properties", 3);
    Ok(())
}
