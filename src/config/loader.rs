//! Context loading from the running process

use std::path::Path;

use crate::errors::{GleeError, Result};
use crate::fs;

use super::context::Context;

/// Environment variable naming the user's preferred editor.
pub const EDITOR_ENV_VAR: &str = "EDITOR";

/// Build the invocation context from the process environment.
///
/// The working directory is the override if given, otherwise the process
/// cwd. It is canonicalized here so every later path computation works on
/// the real, symlink-free location.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Errors
/// * `Path` - If the working directory cannot be determined or resolved
pub fn load_context(cwd_option: Option<&Path>) -> Result<Context> {
    let cwd = fs::resolve_cwd(cwd_option)?;
    let cwd = cwd
        .canonicalize()
        .map_err(|e| GleeError::Path(format!("Cannot resolve path {}: {}", cwd.display(), e)))?;

    let editor = std::env::var(EDITOR_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty());

    let mut context = Context::new(cwd);
    context.editor = editor;
    Ok(context)
}
