//! Render context — the values a collector template is rendered against.

use std::fmt;

use serde::Serialize;

/// Pipeline count used when `numpipelines` is unset.
pub const DEFAULT_NUM_PIPELINES: i64 = 3;

/// Flat rendering payload built from the environment.
///
/// Field names are the keys templates refer to. Unset string variables are
/// empty strings, so templates can test them with a plain `{% if %}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub otlp_endpoint: String,
    pub otlp_api_key: String,
    pub elasticsearch_endpoint: String,
    pub elasticsearch_api_key: String,
    pub monitoring_otlp_endpoint: String,
    pub monitoring_api_key: String,
    /// Passed through as parsed; zero and negative values are not rejected.
    pub numpipelines: i64,
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext {
            otlp_endpoint: String::new(),
            otlp_api_key: String::new(),
            elasticsearch_endpoint: String::new(),
            elasticsearch_api_key: String::new(),
            monitoring_otlp_endpoint: String::new(),
            monitoring_api_key: String::new(),
            numpipelines: DEFAULT_NUM_PIPELINES,
        }
    }
}

struct Secret<'a>(&'a str);

impl fmt::Debug for Secret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str("<redacted>")
        }
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("otlp_endpoint", &self.otlp_endpoint)
            .field("otlp_api_key", &Secret(&self.otlp_api_key))
            .field("elasticsearch_endpoint", &self.elasticsearch_endpoint)
            .field("elasticsearch_api_key", &Secret(&self.elasticsearch_api_key))
            .field("monitoring_otlp_endpoint", &self.monitoring_otlp_endpoint)
            .field("monitoring_api_key", &Secret(&self.monitoring_api_key))
            .field("numpipelines", &self.numpipelines)
            .finish()
    }
}
