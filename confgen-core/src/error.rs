//! Error types for confgen-core.

use thiserror::Error;

/// Errors raised while validating the environment or building the render context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither telemetry destination endpoint is set.
    #[error("expected OTLP_ENDPOINT or ELASTICSEARCH_ENDPOINT")]
    MissingEndpoint,

    /// Neither destination credential is set.
    #[error("expected OTLP_API_KEY or ELASTICSEARCH_API_KEY")]
    MissingCredential,

    /// A variable is present but its value cannot be used.
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidConfiguration {
        var: &'static str,
        value: String,
        reason: String,
    },
}
