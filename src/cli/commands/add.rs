//! Add command - Append entries to the exclude file

use crate::config::load_context;
use crate::errors::Result;
use crate::exclude::add_excludes;
use std::path::Path;

/// Append entries, resolved against the working directory, to the exclude file
pub async fn run(cwd: Option<&Path>, entries: &[String]) -> Result<()> {
    let ctx = load_context(cwd)?;
    let written = add_excludes(&ctx, entries)?;
    for line in &written {
        tracing::debug!(entry = %line, "excluded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_add_with_cwd_override() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(".git/info")).unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();

        run(Some(&temp.path().join("sub")), &["x.txt".to_string()])
            .await
            .unwrap();

        let content = std::fs::read_to_string(temp.path().join(".git/info/exclude")).unwrap();
        assert_eq!(content, "sub/x.txt\n");
    }
}
