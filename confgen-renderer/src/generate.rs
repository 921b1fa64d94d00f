//! End-to-end generation: validate → build → render.

use confgen_core::{build_context, validate_environment, ConfigError, EnvSource, RenderContext};

use crate::engine::{JinjaEngine, Renderer, TemplateEngine, TemplateSource};
use crate::error::GenerateError;

/// Render the collector configuration for `env` with `engine`.
///
/// Stops at the first failure; nothing is rendered unless the environment
/// passes the validation gate.
pub fn generate<E: TemplateEngine>(env: &impl EnvSource, engine: &E) -> Result<String, GenerateError> {
    let ctx = gated_context(env)?;
    let rendered = Renderer::new(engine).render(&ctx)?;
    Ok(rendered)
}

/// Like [`generate`], but the template environment for `source` is only set
/// up once the environment has passed the validation gate.
pub fn generate_from_source(
    env: &impl EnvSource,
    source: &TemplateSource,
) -> Result<String, GenerateError> {
    let ctx = gated_context(env)?;
    let engine = JinjaEngine::new(source)?;
    let rendered = Renderer::new(&engine).render(&ctx)?;
    Ok(rendered)
}

fn gated_context(env: &impl EnvSource) -> Result<RenderContext, ConfigError> {
    validate_environment(env)?;
    build_context(env)
}
