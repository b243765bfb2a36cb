//! Fluent builder API for creating property definitions

use super::error::ConfigError;
use super::types::{PropertyDefinition, PropertyType, PropertyValue};

/// Builder for creating property definitions with a fluent API
pub struct PropertyDefBuilder {
    name: String,
    description: Option<String>,
    ty: Option<PropertyType>,
    default: Option<PropertyValue>,
}

impl PropertyDefBuilder {
    /// Create a new builder for a property
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            ty: None,
            default: None,
        }
    }

    /// Set the description (help text)
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Define as a boolean type with default value
    pub fn bool_type(mut self, default: bool) -> Self {
        self.ty = Some(PropertyType::Bool);
        self.default = Some(PropertyValue::Bool(default));
        self
    }

    /// Define as an unsigned integer type with default and optional constraints
    pub fn uint_type(mut self, default: u64, min: Option<u64>, max: Option<u64>) -> Self {
        self.ty = Some(PropertyType::UInt { min, max });
        self.default = Some(PropertyValue::UInt(default));
        self
    }

    /// Define as a signed integer type with default and optional constraints
    pub fn int_type(mut self, default: i64, min: Option<i64>, max: Option<i64>) -> Self {
        self.ty = Some(PropertyType::Int { min, max });
        self.default = Some(PropertyValue::Int(default));
        self
    }

    /// Define as a float type with default and optional constraints
    pub fn float_type(mut self, default: f64, min: Option<f64>, max: Option<f64>) -> Self {
        self.ty = Some(PropertyType::Float { min, max });
        self.default = Some(PropertyValue::Float(default));
        self
    }

    /// Define as a float in [0, 1]
    pub fn probability_type(self, default: f64) -> Self {
        self.float_type(default, Some(0.0), Some(1.0))
    }

    /// Define as a string type with default and optional max length
    pub fn string_type(mut self, default: &str, max_length: Option<usize>) -> Self {
        self.ty = Some(PropertyType::String { max_length });
        self.default = Some(PropertyValue::String(default.to_string()));
        self
    }

    /// Define as an enum type with allowed variants and default value
    pub fn enum_type(mut self, variants: Vec<&str>, default: &str) -> Self {
        self.ty = Some(PropertyType::Enum {
            variants: variants.iter().map(|s| s.to_string()).collect(),
        });
        self.default = Some(PropertyValue::String(default.to_string()));
        self
    }

    /// Build the property definition
    ///
    /// Returns an error if required fields are missing. Constraint checks
    /// against the default happen when the definition is registered.
    pub fn build(self) -> Result<PropertyDefinition, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidDefinition {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is required"));
        }
        let ty = self
            .ty
            .clone()
            .ok_or_else(|| invalid("type is required (use bool_type, float_type, enum_type, etc.)"))?;
        let default = self
            .default
            .clone()
            .ok_or_else(|| invalid("default value is required"))?;

        Ok(PropertyDefinition {
            name: self.name,
            description: self.description.unwrap_or_default(),
            ty,
            default,
        })
    }
}
