//! Invocation context and its loading

mod context;
mod loader;

pub use context::{Context, Platform};
pub use loader::{load_context, EDITOR_ENV_VAR};
