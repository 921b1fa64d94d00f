//! confgen core — environment access, validation and the render context.
//!
//! - [`env`] — [`EnvSource`] accessor and its process / in-memory implementations
//! - [`validate`] — the validation gate
//! - [`context`] — builds a [`RenderContext`] from the environment
//! - [`error`] — [`ConfigError`]

pub mod context;
pub mod env;
pub mod error;
pub mod types;
pub mod validate;

pub use context::build_context;
pub use env::{vars, EnvSource, MapEnv, ProcessEnv};
pub use error::ConfigError;
pub use types::{RenderContext, DEFAULT_NUM_PIPELINES};
pub use validate::validate_environment;
