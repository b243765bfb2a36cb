//! Core types for config properties

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A strongly-typed property value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl PropertyValue {
    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::UInt(_) => "uint",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            PropertyValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to a JSON value for output
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PropertyValue::Bool(v) => serde_json::Value::from(*v),
            PropertyValue::Int(v) => serde_json::Value::from(*v),
            PropertyValue::UInt(v) => serde_json::Value::from(*v),
            // Non-finite floats are rejected by validate
            PropertyValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::String(v) => serde_json::Value::from(v.as_str()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::UInt(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        PropertyValue::UInt(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

/// Why a value was rejected by a property's schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    #[error("expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("value {value} is below minimum {min}")]
    BelowMinimum { value: String, min: String },

    #[error("value {value} is above maximum {max}")]
    AboveMaximum { value: String, max: String },

    #[error("value is not a finite number")]
    NotANumber,

    #[error("string length {len} exceeds maximum {max}")]
    TooLong { len: usize, max: usize },

    #[error("'{value}' is not a valid variant, expected one of {variants:?}")]
    UnknownVariant {
        value: String,
        variants: Vec<String>,
    },

    #[error("cannot parse '{raw}' as {expected}")]
    Unparseable { raw: String, expected: &'static str },
}

/// Type definition with constraints for validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyType {
    Bool,
    Int {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    #[serde(rename = "uint")]
    UInt {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<u64>,
    },
    Float {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    #[serde(rename = "unicode")]
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Enum {
        variants: Vec<String>,
    },
}

fn check_bounds<T: PartialOrd + ToString>(
    v: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), SchemaViolation> {
    if let Some(min) = min {
        if v < min {
            return Err(SchemaViolation::BelowMinimum {
                value: v.to_string(),
                min: min.to_string(),
            });
        }
    }
    if let Some(max) = max {
        if v > max {
            return Err(SchemaViolation::AboveMaximum {
                value: v.to_string(),
                max: max.to_string(),
            });
        }
    }
    Ok(())
}

impl PropertyType {
    /// Name of the value kind this type accepts
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int { .. } => "int",
            PropertyType::UInt { .. } => "uint",
            PropertyType::Float { .. } => "float",
            PropertyType::String { .. } | PropertyType::Enum { .. } => "string",
        }
    }

    /// Check if a value matches this type
    pub fn matches(&self, value: &PropertyValue) -> bool {
        matches!(
            (self, value),
            (PropertyType::Bool, PropertyValue::Bool(_))
                | (PropertyType::Int { .. }, PropertyValue::Int(_))
                | (PropertyType::UInt { .. }, PropertyValue::UInt(_))
                | (PropertyType::Float { .. }, PropertyValue::Float(_))
                | (PropertyType::String { .. }, PropertyValue::String(_))
                | (PropertyType::Enum { .. }, PropertyValue::String(_))
        )
    }

    /// Validate that a value meets the constraints for this type
    pub fn validate(&self, value: &PropertyValue) -> Result<(), SchemaViolation> {
        if !self.matches(value) {
            return Err(SchemaViolation::TypeMismatch {
                expected: self.kind(),
                got: value.kind(),
            });
        }

        match (self, value) {
            (PropertyType::Int { min, max }, PropertyValue::Int(v)) => check_bounds(*v, *min, *max),
            (PropertyType::UInt { min, max }, PropertyValue::UInt(v)) => {
                check_bounds(*v, *min, *max)
            }
            (PropertyType::Float { min, max }, PropertyValue::Float(v)) => {
                if !v.is_finite() {
                    return Err(SchemaViolation::NotANumber);
                }
                check_bounds(*v, *min, *max)
            }
            (PropertyType::String { max_length }, PropertyValue::String(v)) => {
                match max_length {
                    Some(max) if v.len() > *max => Err(SchemaViolation::TooLong {
                        len: v.len(),
                        max: *max,
                    }),
                    _ => Ok(()),
                }
            }
            (PropertyType::Enum { variants }, PropertyValue::String(v)) => {
                if variants.contains(v) {
                    Ok(())
                } else {
                    Err(SchemaViolation::UnknownVariant {
                        value: v.clone(),
                        variants: variants.clone(),
                    })
                }
            }
            _ => Ok(()),
        }
    }

    /// Parse a raw string (e.g. from the command line) into a value of this type
    ///
    /// Only the shape is checked here; constraints are left to `validate`.
    pub fn parse(&self, raw: &str) -> Result<PropertyValue, SchemaViolation> {
        let unparseable = || SchemaViolation::Unparseable {
            raw: raw.to_string(),
            expected: self.kind(),
        };
        let raw_trimmed = raw.trim();

        match self {
            PropertyType::Bool => raw_trimmed
                .parse::<bool>()
                .map(PropertyValue::Bool)
                .map_err(|_| unparseable()),
            PropertyType::Int { .. } => raw_trimmed
                .parse::<i64>()
                .map(PropertyValue::Int)
                .map_err(|_| unparseable()),
            PropertyType::UInt { .. } => raw_trimmed
                .parse::<u64>()
                .map(PropertyValue::UInt)
                .map_err(|_| unparseable()),
            PropertyType::Float { .. } => raw_trimmed
                .parse::<f64>()
                .map(PropertyValue::Float)
                .map_err(|_| unparseable()),
            PropertyType::String { .. } | PropertyType::Enum { .. } => {
                Ok(PropertyValue::String(raw.to_string()))
            }
        }
    }

    /// Coerce a JSON value into a value of this type
    ///
    /// Integers are accepted for float properties; everything else must
    /// already have the right JSON shape.
    pub fn value_from_json(&self, json: &serde_json::Value) -> Result<PropertyValue, SchemaViolation> {
        let mismatch = || SchemaViolation::TypeMismatch {
            expected: self.kind(),
            got: json_kind(json),
        };

        match self {
            PropertyType::Bool => json.as_bool().map(PropertyValue::Bool).ok_or_else(mismatch),
            PropertyType::Int { .. } => json.as_i64().map(PropertyValue::Int).ok_or_else(mismatch),
            PropertyType::UInt { .. } => {
                json.as_u64().map(PropertyValue::UInt).ok_or_else(mismatch)
            }
            PropertyType::Float { .. } => {
                json.as_f64().map(PropertyValue::Float).ok_or_else(mismatch)
            }
            PropertyType::String { .. } | PropertyType::Enum { .. } => json
                .as_str()
                .map(|s| PropertyValue::String(s.to_string()))
                .ok_or_else(mismatch),
        }
    }

    /// Check the type's own constraints are coherent
    pub(crate) fn check_definition(&self) -> Result<(), String> {
        match self {
            PropertyType::Int {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(format!("minimum {} exceeds maximum {}", min, max)),
            PropertyType::UInt {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(format!("minimum {} exceeds maximum {}", min, max)),
            PropertyType::Float { min, max } => {
                if min.is_some_and(f64::is_nan) || max.is_some_and(f64::is_nan) {
                    return Err("bounds must not be NaN".to_string());
                }
                match (min, max) {
                    (Some(min), Some(max)) if min > max => {
                        Err(format!("minimum {} exceeds maximum {}", min, max))
                    }
                    _ => Ok(()),
                }
            }
            PropertyType::Enum { variants } if variants.is_empty() => {
                Err("enum must declare at least one variant".to_string())
            }
            _ => Ok(()),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(n) if n.is_f64() => "float",
        serde_json::Value::Number(_) => "int",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Complete definition of a config property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    /// Unique property name (e.g., "record_playthrough_probability")
    pub name: String,

    /// Help text shown in listings
    pub description: String,

    /// Type definition with constraints
    pub ty: PropertyType,

    /// Value restored on revert
    pub default: PropertyValue,
}

impl PropertyDefinition {
    /// Validate that a value is valid for this property
    pub fn validate(&self, value: &PropertyValue) -> Result<(), SchemaViolation> {
        self.ty.validate(value)
    }
}

/// A registered property: its definition plus the current value
///
/// The registry owns these; callers only ever see clones.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigProperty {
    pub(crate) definition: PropertyDefinition,
    pub(crate) value: PropertyValue,
}

impl ConfigProperty {
    pub(crate) fn new(definition: PropertyDefinition) -> Self {
        let value = definition.default.clone();
        Self { definition, value }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn schema(&self) -> &PropertyType {
        &self.definition.ty
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn default_value(&self) -> &PropertyValue {
        &self.definition.default
    }

    pub fn definition(&self) -> &PropertyDefinition {
        &self.definition
    }

    /// Whether the current value equals the registered default
    pub fn is_default(&self) -> bool {
        self.value == self.definition.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn probability() -> PropertyType {
        PropertyType::Float {
            min: Some(0.0),
            max: Some(1.0),
        }
    }

    #[test]
    fn test_float_bounds_are_inclusive() {
        let ty = probability();
        assert!(ty.validate(&PropertyValue::Float(0.0)).is_ok());
        assert!(ty.validate(&PropertyValue::Float(1.0)).is_ok());
        assert!(matches!(
            ty.validate(&PropertyValue::Float(1.5)),
            Err(SchemaViolation::AboveMaximum { .. })
        ));
        assert!(matches!(
            ty.validate(&PropertyValue::Float(-0.1)),
            Err(SchemaViolation::BelowMinimum { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let ty = PropertyType::Float {
            min: None,
            max: None,
        };
        assert_eq!(
            ty.validate(&PropertyValue::Float(f64::NAN)),
            Err(SchemaViolation::NotANumber)
        );
        assert_eq!(
            ty.validate(&PropertyValue::Float(f64::INFINITY)),
            Err(SchemaViolation::NotANumber)
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = probability().validate(&PropertyValue::Bool(true)).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::TypeMismatch {
                expected: "float",
                got: "bool"
            }
        );
        assert_eq!(err.to_string(), "expected float, got bool");
    }

    #[test]
    fn test_string_max_length() {
        let ty = PropertyType::String {
            max_length: Some(5),
        };
        assert!(ty.validate(&"hello".into()).is_ok());
        assert!(matches!(
            ty.validate(&"hello!".into()),
            Err(SchemaViolation::TooLong { len: 6, max: 5 })
        ));
    }

    #[test]
    fn test_enum_variants() {
        let ty = PropertyType::Enum {
            variants: vec!["click".to_string(), "hover".to_string()],
        };
        assert!(ty.validate(&"hover".into()).is_ok());
        assert!(matches!(
            ty.validate(&"drag".into()),
            Err(SchemaViolation::UnknownVariant { .. })
        ));
    }

    #[test]
    fn test_parse_by_type() {
        assert_eq!(probability().parse(" 0.5 "), Ok(PropertyValue::Float(0.5)));
        assert_eq!(PropertyType::Bool.parse("true"), Ok(PropertyValue::Bool(true)));
        assert!(PropertyType::Bool.parse("yes").is_err());
        assert!(PropertyType::UInt {
            min: None,
            max: None
        }
        .parse("-3")
        .is_err());
        assert_eq!(
            PropertyType::String { max_length: None }.parse(" padded "),
            Ok(PropertyValue::String(" padded ".to_string()))
        );
    }

    #[test]
    fn test_from_json_coerces_integers_to_float() {
        assert_eq!(probability().value_from_json(&json!(1)), Ok(PropertyValue::Float(1.0)));
        assert_eq!(
            PropertyType::Int {
                min: None,
                max: None
            }
            .value_from_json(&json!(0.5)),
            Err(SchemaViolation::TypeMismatch {
                expected: "int",
                got: "float"
            })
        );
        assert!(PropertyType::Bool.value_from_json(&json!("true")).is_err());
    }

    #[test]
    fn test_check_definition() {
        assert!(PropertyType::UInt {
            min: Some(10),
            max: Some(1)
        }
        .check_definition()
        .is_err());
        assert!(PropertyType::Enum { variants: vec![] }.check_definition().is_err());
        assert!(probability().check_definition().is_ok());
    }

    #[test]
    fn test_schema_serializes_with_type_tag() {
        let schema = serde_json::to_value(probability()).unwrap();
        assert_eq!(schema, json!({"type": "float", "min": 0.0, "max": 1.0}));

        let schema = serde_json::to_value(PropertyType::String { max_length: None }).unwrap();
        assert_eq!(schema, json!({"type": "unicode"}));
    }
}
