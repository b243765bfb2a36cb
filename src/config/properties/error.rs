//! Error types for the config property layer

use super::types::SchemaViolation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("No config property with name {0} found.")]
    NotFound(String),

    #[error("Invalid value for config property {name}: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: SchemaViolation,
    },

    #[error("Config property {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Invalid definition for config property '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Config property {name} does not hold a {expected} value")]
    TypeMismatch { name: String, expected: &'static str },
}

impl ConfigError {
    pub(crate) fn not_found(name: &str) -> Self {
        ConfigError::NotFound(name.to_string())
    }

    pub(crate) fn invalid_value(name: &str, source: SchemaViolation) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            source,
        }
    }

    /// True for the unknown-name case
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ConfigError::not_found("new_config_property_name");
        assert_eq!(
            err.to_string(),
            "No config property with name new_config_property_name found."
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_value_keeps_source() {
        let err = ConfigError::invalid_value("p", SchemaViolation::NotANumber);
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid value for config property p: value is not a finite number"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("value is not a finite number"));
    }
}
