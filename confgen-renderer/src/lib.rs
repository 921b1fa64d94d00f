//! # confgen-renderer
//!
//! Jinja renderer for the telemetry collector configuration template.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use confgen_core::ProcessEnv;
//! use confgen_renderer::{generate_from_source, TemplateSource};
//!
//! fn print_config() -> Result<(), Box<dyn std::error::Error>> {
//!     println!("{}", generate_from_source(&ProcessEnv, &TemplateSource::Embedded)?);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod generate;

pub use engine::{JinjaEngine, Renderer, TemplateEngine, TemplateSource, TEMPLATE_NAME};
pub use error::{GenerateError, RenderError};
pub use generate::{generate, generate_from_source};
