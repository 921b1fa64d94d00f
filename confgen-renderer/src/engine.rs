//! Jinja rendering engine — [`TemplateEngine`] seam, [`JinjaEngine`] and [`Renderer`].

use std::path::PathBuf;

use minijinja::{path_loader, AutoEscape, Environment, ErrorKind};

use confgen_core::RenderContext;

use crate::error::RenderError;

/// Name of the collector configuration template.
pub const TEMPLATE_NAME: &str = "collector-config.yaml.j2";

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[(
    TEMPLATE_NAME,
    include_str!("templates/collector-config.yaml.j2"),
)];

// ---------------------------------------------------------------------------
// TemplateSource
// ---------------------------------------------------------------------------

/// Where templates are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates shipped inside the binary.
    #[default]
    Embedded,
    /// Templates read from this directory when first requested.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Human-readable location used in diagnostics.
    pub fn location(&self) -> String {
        match self {
            TemplateSource::Embedded => "embedded templates".to_string(),
            TemplateSource::Directory(dir) => dir.display().to_string(),
        }
    }
}

fn build_environment(source: &TemplateSource) -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(false);
    // Output is YAML; values are quoted in the template with `tojson`.
    env.set_auto_escape_callback(|_| AutoEscape::None);

    match source {
        TemplateSource::Embedded => {
            for &(name, content) in TPLS {
                env.add_template(name, content)?;
            }
        }
        TemplateSource::Directory(dir) => env.set_loader(path_loader(dir)),
    }
    Ok(env)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Narrow rendering seam: render the template called `name` against `ctx`.
pub trait TemplateEngine {
    fn render(&self, name: &str, ctx: &RenderContext) -> Result<String, RenderError>;
}

impl<E: TemplateEngine + ?Sized> TemplateEngine for &E {
    fn render(&self, name: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        (**self).render(name, ctx)
    }
}

/// MiniJinja-backed [`TemplateEngine`] with Jinja's `trim_blocks` and
/// `lstrip_blocks` enabled.
///
/// Directory templates are loaded lazily, so only the requested template and
/// whatever it includes are ever read.
pub struct JinjaEngine {
    env: Environment<'static>,
    location: String,
}

impl JinjaEngine {
    pub fn new(source: &TemplateSource) -> Result<Self, RenderError> {
        tracing::debug!(location = %source.location(), "setting up template environment");
        Ok(JinjaEngine {
            env: build_environment(source)?,
            location: source.location(),
        })
    }
}

impl TemplateEngine for JinjaEngine {
    fn render(&self, name: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        let template = self.env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound {
                name: name.to_string(),
                location: self.location.clone(),
            },
            _ => RenderError::Engine(e),
        })?;
        let rendered = template.render(ctx)?;
        tracing::debug!(template = name, bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders the collector configuration template with a given engine.
pub struct Renderer<E> {
    engine: E,
}

impl<E: TemplateEngine> Renderer<E> {
    pub fn new(engine: E) -> Self {
        Renderer { engine }
    }

    /// Render [`TEMPLATE_NAME`] against `ctx`.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        self.engine.render(TEMPLATE_NAME, ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
