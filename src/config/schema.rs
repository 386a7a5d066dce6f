//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid configuration.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Root configuration for a service using the responder.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// JSON response conventions.
    pub respond: RespondConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Settings that shape every JSON reply.
///
/// Fixed once serving begins; share it through [`crate::Responder`] rather
/// than mutating it at request time.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RespondConfig {
    /// Write `null` for nil payloads. When false the body is left empty.
    pub return_nulls: bool,

    /// Status used by `respond_error` for errors that carry no status.
    pub default_status_code: u16,

    /// Message used for errors that carry no message.
    /// Empty means "use the status reason phrase".
    pub default_error_message: String,

    /// Echo the error's `Display` text in the `rawError` field.
    pub return_raw_error: bool,
}

impl Default for RespondConfig {
    fn default() -> Self {
        Self {
            return_nulls: true,
            default_status_code: 500,
            default_error_message: String::new(),
            return_raw_error: false,
        }
    }
}

impl RespondConfig {
    /// The default status as a typed code.
    ///
    /// Falls back to 500 if the configured number is not a valid status;
    /// `validate_config` rejects such values at load time.
    pub fn default_status(&self) -> StatusCode {
        StatusCode::from_u16(self.default_status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info").
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert!(config.respond.return_nulls);
        assert_eq!(config.respond.default_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn partial_respond_section_keeps_other_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [respond]
            return_raw_error = true
            default_status_code = 418

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert!(config.respond.return_raw_error);
        assert!(config.respond.return_nulls);
        assert_eq!(config.respond.default_status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn invalid_default_status_falls_back_to_500() {
        let config = RespondConfig {
            default_status_code: 42,
            ..RespondConfig::default()
        };
        assert_eq!(config.default_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
