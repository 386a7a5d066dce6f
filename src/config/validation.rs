//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes, addresses, log filters)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `respond.default_status_code` is not in 100..=599.
    #[error("respond.default_status_code {0} is not a valid HTTP status")]
    InvalidStatusCode(u16),

    /// `listener.bind_address` is not a socket address.
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    /// `observability.log_level` is not a valid filter directive.
    #[error("observability.log_level {0:?} is not a valid filter")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let status = config.respond.default_status_code;
    if !(100..=599).contains(&status) {
        errors.push(ValidationError::InvalidStatusCode(status));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
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
    fn default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn reports_every_problem() {
        let mut config = ServiceConfig::default();
        config.respond.default_status_code = 99;
        config.listener.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidStatusCode(99),
                ValidationError::InvalidBindAddress("not-an-address".into()),
            ]
        );
    }

    #[test]
    fn status_code_bounds_are_inclusive() {
        let mut config = ServiceConfig::default();
        config.respond.default_status_code = 100;
        assert!(validate_config(&config).is_ok());
        config.respond.default_status_code = 599;
        assert!(validate_config(&config).is_ok());
        config.respond.default_status_code = 600;
        assert!(validate_config(&config).is_err());
    }
}
