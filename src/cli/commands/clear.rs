//! Clear command - Empty the exclude file

use crate::config::load_context;
use crate::errors::Result;
use crate::exclude::clear_excludes;
use std::path::Path;

/// Truncate the exclude file
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let ctx = load_context(cwd)?;
    clear_excludes(&ctx)
}
