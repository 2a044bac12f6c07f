//! Remove command - Drop previously added entries from the exclude file

use crate::config::load_context;
use crate::errors::Result;
use crate::exclude::remove_excludes;
use std::path::Path;

/// Remove entries that exactly match existing exclude lines
pub async fn run(cwd: Option<&Path>, entries: &[String]) -> Result<()> {
    let ctx = load_context(cwd)?;
    remove_excludes(&ctx, entries)?;
    Ok(())
}
