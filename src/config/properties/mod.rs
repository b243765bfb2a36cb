//! Config properties: named, typed application settings with defaults
//!
//! The property system provides:
//! - Type-safe values validated against a schema
//! - A registry populated once at startup
//! - A service layer that sets and reverts values on behalf of an actor
//! - An audit trail of every change

pub mod audit;
pub mod builder;
pub mod error;
pub mod key;
pub mod registrations;
pub mod registry;
pub mod service;
pub mod types;

pub use audit::{ChangeKind, ChangeLog, PropertyChange};
pub use builder::PropertyDefBuilder;
pub use error::ConfigError;
pub use key::{PropertyKey, PropertyKind};
pub use registry::ConfigRegistry;
pub use service::{ConfigService, PropertySummary};
pub use types::{ConfigProperty, PropertyDefinition, PropertyType, PropertyValue, SchemaViolation};
