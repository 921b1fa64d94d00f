//! Error types for confgen-renderer.

use thiserror::Error;

use confgen_core::ConfigError;

/// Errors that can arise while loading or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested template does not exist in the template source.
    #[error("Error: Template '{name}' not found in {location}")]
    TemplateNotFound { name: String, location: String },

    /// Template engine error (syntax, unreadable file, filter failure).
    #[error("template engine error")]
    Engine(#[from] minijinja::Error),
}

/// Any failure of the validate → build → render pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
