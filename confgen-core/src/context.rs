//! Context builder — turns environment state into a [`RenderContext`].

use crate::env::{vars, EnvSource};
use crate::error::ConfigError;
use crate::types::{RenderContext, DEFAULT_NUM_PIPELINES};

/// Build the render context from `env`.
///
/// Unset string variables become empty strings and an unset `numpipelines`
/// becomes [`DEFAULT_NUM_PIPELINES`]. Values are taken verbatim; only the
/// pipeline count is parsed.
pub fn build_context(env: &impl EnvSource) -> Result<RenderContext, ConfigError> {
    let numpipelines = match env.var(vars::NUM_PIPELINES) {
        Some(raw) => parse_pipeline_count(&raw)?,
        None => DEFAULT_NUM_PIPELINES,
    };

    let ctx = RenderContext {
        otlp_endpoint: string_var(env, vars::OTLP_ENDPOINT),
        otlp_api_key: string_var(env, vars::OTLP_API_KEY),
        elasticsearch_endpoint: string_var(env, vars::ELASTICSEARCH_ENDPOINT),
        elasticsearch_api_key: string_var(env, vars::ELASTICSEARCH_API_KEY),
        monitoring_otlp_endpoint: string_var(env, vars::MONITORING_OTLP_ENDPOINT),
        monitoring_api_key: string_var(env, vars::MONITORING_API_KEY),
        numpipelines,
    };
    tracing::debug!(context = ?ctx, "built render context");
    Ok(ctx)
}

fn string_var(env: &impl EnvSource, key: &str) -> String {
    env.var(key).unwrap_or_default()
}

/// Parse a pipeline count. Surrounding whitespace and a leading sign are
/// accepted; an empty value is an error, not the default.
fn parse_pipeline_count(raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidConfiguration {
            var: vars::NUM_PIPELINES,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
