//! Validation gate run before any rendering work.

use crate::env::{vars, EnvSource};
use crate::error::ConfigError;

/// Require at least one destination endpoint and at least one credential.
///
/// Endpoints are checked first; only the first failure is reported. An
/// endpoint and a key from different destinations are accepted together.
pub fn validate_environment(env: &impl EnvSource) -> Result<(), ConfigError> {
    let has_endpoint = env.non_empty(vars::OTLP_ENDPOINT).is_some()
        || env.non_empty(vars::ELASTICSEARCH_ENDPOINT).is_some();
    if !has_endpoint {
        return Err(ConfigError::MissingEndpoint);
    }

    let has_credential = env.non_empty(vars::OTLP_API_KEY).is_some()
        || env.non_empty(vars::ELASTICSEARCH_API_KEY).is_some();
    if !has_credential {
        return Err(ConfigError::MissingCredential);
    }

    Ok(())
}
