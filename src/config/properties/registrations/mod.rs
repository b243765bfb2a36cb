//! Registration of all built-in config properties

pub mod contributor;
pub mod email;
pub mod exploration;

use super::ConfigRegistry;
use super::error::ConfigError;

/// Register all properties from all modules
pub fn register_all(registry: &ConfigRegistry) -> Result<(), ConfigError> {
    exploration::register(registry)?;
    contributor::register(registry)?;
    email::register(registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all() {
        let registry = ConfigRegistry::new();
        register_all(&registry).unwrap();
        assert_eq!(registry.count(), 11);

        // A second pass must fail rather than silently overwrite
        assert!(register_all(&registry).is_err());
    }
}
