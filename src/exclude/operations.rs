//! Repository-level exclude operations
//!
//! Each operation locates the repository root from the context and then
//! works on `<root>/.git/info/exclude`.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Context;
use crate::errors::{GleeError, Result};
use crate::fs::{find_repo_root, get_exclude_path};

use super::entry::to_root_relative;
use super::file;

/// A located exclude file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludeFile {
    /// Repository root
    pub root: PathBuf,

    /// Path to `.git/info/exclude` under the root
    #[serde(rename = "exclude_file")]
    pub path: PathBuf,
}

impl ExcludeFile {
    /// Locate the exclude file for the repository containing `ctx.cwd`.
    ///
    /// # Errors
    /// * `RepoNotFound` - If the working directory is not inside a repository
    pub fn locate(ctx: &Context) -> Result<Self> {
        let root = find_repo_root(ctx.cwd())?;
        let path = get_exclude_path(&root);
        Ok(ExcludeFile { root, path })
    }

    /// Convert entries against the canonical cwd, the same directory the
    /// root was found from.
    fn convert_all<S: AsRef<str>>(&self, ctx: &Context, entries: &[S]) -> Result<Vec<String>> {
        let cwd = ctx.cwd().canonicalize().map_err(|e| {
            GleeError::Path(format!("Cannot resolve path {}: {}", ctx.cwd().display(), e))
        })?;
        entries
            .iter()
            .map(|entry| to_root_relative(&self.root, &cwd, entry.as_ref()))
            .collect()
    }
}

/// Append entries to the exclude file, relative to the repository root.
///
/// Every entry is converted before anything is written, so an invalid
/// entry leaves the file untouched.
///
/// # Returns
/// The lines that were written, in order
pub fn add_excludes<S: AsRef<str>>(ctx: &Context, entries: &[S]) -> Result<Vec<String>> {
    let target = ExcludeFile::locate(ctx)?;
    let lines = target.convert_all(ctx, entries)?;

    file::append_lines(&target.path, &lines)?;
    tracing::info!(
        count = lines.len(),
        file = %target.path.display(),
        "appended exclude entries"
    );
    Ok(lines)
}

/// List the active entries of the exclude file in file order.
pub fn list_excludes(ctx: &Context) -> Result<Vec<String>> {
    let target = ExcludeFile::locate(ctx)?;
    file::read_entries(&target.path)
}

/// Truncate the exclude file. The file must already exist.
pub fn clear_excludes(ctx: &Context) -> Result<()> {
    let target = ExcludeFile::locate(ctx)?;
    file::truncate(&target.path)?;
    tracing::info!(file = %target.path.display(), "cleared exclude file");
    Ok(())
}

/// Remove entries previously added, matched exactly after conversion to
/// root-relative form.
///
/// # Returns
/// The number of lines removed
pub fn remove_excludes<S: AsRef<str>>(ctx: &Context, entries: &[S]) -> Result<usize> {
    let target = ExcludeFile::locate(ctx)?;
    let lines = target.convert_all(ctx, entries)?;

    let removed = file::remove_lines(&target.path, &lines)?;
    if removed == 0 {
        tracing::warn!(entries = ?lines, "no matching exclude entries found");
    } else {
        tracing::info!(
            count = removed,
            file = %target.path.display(),
            "removed exclude entries"
        );
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".git").join("info")).unwrap();
        temp
    }

    fn context_at(dir: &std::path::Path) -> Context {
        Context::new(dir.canonicalize().unwrap())
    }

    fn exclude_content(temp: &TempDir) -> String {
        fs::read_to_string(temp.path().join(".git").join("info").join("exclude")).unwrap()
    }

    #[test]
    fn test_add_excludes_from_root() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());

        let written = add_excludes(&ctx, &["file1.txt", "dir/file2.txt"]).unwrap();

        assert_eq!(written, vec!["file1.txt", "dir/file2.txt"]);
        assert_eq!(exclude_content(&temp), "file1.txt\ndir/file2.txt\n");
    }

    #[test]
    fn test_add_excludes_from_subdir() {
        let temp = setup_repo();
        let subdir = temp.path().join("src").join("nested");
        fs::create_dir_all(&subdir).unwrap();
        let ctx = context_at(&subdir);

        add_excludes(&ctx, &["scratch.rs", "../notes.md"]).unwrap();

        assert_eq!(exclude_content(&temp), "src/nested/scratch.rs\nsrc/notes.md\n");
    }

    #[test]
    fn test_add_excludes_invalid_entry_writes_nothing() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());

        let err = add_excludes(&ctx, &["ok.txt", ""]).unwrap_err();

        assert_eq!(err.code(), "INVALID_ENTRY");
        assert!(!temp.path().join(".git/info/exclude").exists());
    }

    #[test]
    fn test_add_excludes_outside_repo() {
        let temp = TempDir::new().unwrap();
        let ctx = context_at(temp.path());

        let err = add_excludes(&ctx, &["a.txt"]).unwrap_err();
        assert_eq!(err.code(), "REPO_NOT_FOUND");
    }

    #[test]
    fn test_list_excludes() {
        let temp = setup_repo();
        fs::write(
            temp.path().join(".git/info/exclude"),
            "file1.txt\n# Comment\ndir/file2.txt\n",
        )
        .unwrap();
        let ctx = context_at(temp.path());

        assert_eq!(list_excludes(&ctx).unwrap(), vec!["file1.txt", "dir/file2.txt"]);
    }

    #[test]
    fn test_list_excludes_missing_file() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());

        assert_eq!(list_excludes(&ctx).unwrap_err().code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_clear_excludes() {
        let temp = setup_repo();
        fs::write(temp.path().join(".git/info/exclude"), "file1.txt\ndir/file2.txt\n").unwrap();
        let ctx = context_at(temp.path());

        clear_excludes(&ctx).unwrap();

        assert_eq!(exclude_content(&temp), "");
        assert!(list_excludes(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_clear_excludes_missing_file() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());

        assert_eq!(clear_excludes(&ctx).unwrap_err().code(), "FILE_NOT_FOUND");
        assert!(!temp.path().join(".git/info/exclude").exists());
    }

    #[test]
    fn test_remove_excludes_undoes_add_from_subdir() {
        let temp = setup_repo();
        let subdir = temp.path().join("docs");
        fs::create_dir_all(&subdir).unwrap();
        let root_ctx = context_at(temp.path());
        let sub_ctx = context_at(&subdir);

        add_excludes(&root_ctx, &["keep.txt", "docs/draft.md"]).unwrap();
        let removed = remove_excludes(&sub_ctx, &["draft.md"]).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(list_excludes(&root_ctx).unwrap(), vec!["keep.txt"]);
    }

    #[test]
    fn test_remove_excludes_pattern_is_not_expanded() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());
        add_excludes(&ctx, &["a.log", "*.log"]).unwrap();

        let removed = remove_excludes(&ctx, &["*.log"]).unwrap();

        assert_eq!(removed, 1);
        assert_eq!(list_excludes(&ctx).unwrap(), vec!["a.log"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_add_excludes_through_symlinked_cwd() {
        let temp = setup_repo();
        let real = temp.path().join("real");
        fs::create_dir(&real).unwrap();
        let outside = TempDir::new().unwrap();
        let link = outside.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let ctx = Context::new(&link);
        let written = add_excludes(&ctx, &["a.txt"]).unwrap();

        assert_eq!(written, vec!["real/a.txt"]);
        assert_eq!(exclude_content(&temp), "real/a.txt\n");
    }

    #[test]
    fn test_add_excludes_with_non_canonical_cwd() {
        let temp = setup_repo();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        let ctx = Context::new(temp.path().join("src").join("..").join("src"));

        let written = add_excludes(&ctx, &["lib.rs"]).unwrap();
        assert_eq!(written, vec!["src/lib.rs"]);
    }

    #[test]
    fn test_locate_reports_root_and_path() {
        let temp = setup_repo();
        let ctx = context_at(temp.path());

        let located = ExcludeFile::locate(&ctx).unwrap();
        let root = temp.path().canonicalize().unwrap();
        assert_eq!(located.path, root.join(".git").join("info").join("exclude"));
        assert_eq!(located.root, root);
    }
}
