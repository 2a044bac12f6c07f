//! Edit command - Open the exclude file in a text editor

use crate::config::load_context;
use crate::editor::edit_excludes;
use crate::errors::Result;
use std::path::Path;

/// Launch an editor on the exclude file without waiting for it to exit
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let ctx = load_context(cwd)?;
    edit_excludes(&ctx)?;
    Ok(())
}
