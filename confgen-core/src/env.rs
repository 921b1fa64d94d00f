//! Environment access.
//!
//! Everything in this crate reads variables through [`EnvSource`], so the
//! validator and context builder can be driven from an in-memory map in
//! tests. [`ProcessEnv`] is the only implementation that touches the real
//! process environment.

use std::collections::{BTreeMap, HashMap};

/// Names of the environment variables the generator understands.
pub mod vars {
    pub const OTLP_ENDPOINT: &str = "OTLP_ENDPOINT";
    pub const OTLP_API_KEY: &str = "OTLP_API_KEY";
    pub const ELASTICSEARCH_ENDPOINT: &str = "ELASTICSEARCH_ENDPOINT";
    pub const ELASTICSEARCH_API_KEY: &str = "ELASTICSEARCH_API_KEY";
    pub const MONITORING_OTLP_ENDPOINT: &str = "MONITORING_OTLP_ENDPOINT";
    pub const MONITORING_API_KEY: &str = "MONITORING_API_KEY";
    /// Lowercase on purpose; existing deployments set it this way.
    pub const NUM_PIPELINES: &str = "numpipelines";
}

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value the same as an unset one.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        let raw = std::env::var_os(key)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(var = key, "value is not valid unicode; converting lossily");
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

/// In-memory environment, mostly for tests and embedding callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapEnv {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
