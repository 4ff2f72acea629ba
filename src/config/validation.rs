//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce the never-empty interface list invariant
//! - Validate value ranges (port must be bindable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::Config;
use thiserror::Error;

/// A single semantic problem found in an otherwise well-formed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The interface list was given but contains no entries.
    #[error("network.server.interfaces must not be empty")]
    EmptyInterfaceList,

    /// An interface entry is empty or whitespace-only.
    #[error("network.server.interfaces[{index}] is blank")]
    BlankInterface { index: usize },

    /// Port 0 asks the OS to pick, which is not a configurable choice here.
    #[error("network.server.port must not be 0")]
    PortZero,
}

/// Check semantic constraints on a parsed configuration.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let server = &config.network.server;

    if server.interfaces.is_empty() {
        errors.push(ValidationError::EmptyInterfaceList);
    }
    for (index, interface) in server.interfaces.iter().enumerate() {
        if interface.trim().is_empty() {
            errors.push(ValidationError::BlankInterface { index });
        }
    }
    if server.port == 0 {
        errors.push(ValidationError::PortZero);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_interface_list_rejected() {
        let mut config = Config::default();
        config.network.server.interfaces.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyInterfaceList]);
    }

    #[test]
    fn test_blank_interface_rejected() {
        let mut config = Config::default();
        config.network.server.interfaces = vec!["127.0.0.1".into(), "  ".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::BlankInterface { index: 1 }]);
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = Config::default();
        config.network.server.interfaces = vec!["".into()];
        config.network.server.port = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::BlankInterface { index: 0 }));
        assert!(errors.contains(&ValidationError::PortZero));
    }
}
