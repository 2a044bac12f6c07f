//! Path resolution utilities for glee
//!
//! Provides functions to locate the repository root and construct paths
//! to the git metadata files glee manages.

use std::path::{Path, PathBuf};

use crate::errors::{GleeError, Result};

/// Name of the git metadata directory that marks a repository root.
pub const GIT_DIR_NAME: &str = ".git";

/// Find the closest repository root containing a .git directory.
///
/// Walks up the directory tree from the starting directory looking for
/// a directory that contains a `.git` directory. A `.git` *file* (as used
/// by worktrees and submodules) does not count and the walk continues.
///
/// The start directory is canonicalized first so that a symlinked working
/// directory is walked through its real parents.
///
/// # Arguments
/// * `start_cwd` - The directory to start searching from
///
/// # Returns
/// The canonical path to the repository root
///
/// # Errors
/// * `Path` - If the start directory cannot be resolved
/// * `RepoNotFound` - If the filesystem root is reached without a match
pub fn find_repo_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd.canonicalize().map_err(|e| {
        GleeError::Path(format!("Cannot resolve path {}: {}", start_cwd.display(), e))
    })?;

    loop {
        if current.join(GIT_DIR_NAME).is_dir() {
            tracing::debug!(root = %current.display(), "found repository root");
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(GleeError::RepoNotFound(format!(
                    "No {} directory found above {}",
                    GIT_DIR_NAME,
                    start_cwd.display()
                )));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
///
/// # Errors
/// * `Path` - If no override is given and the process cwd is unavailable
pub fn resolve_cwd(cwd_option: Option<&Path>) -> Result<PathBuf> {
    match cwd_option {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| GleeError::Path(format!("Cannot get current working directory: {}", e))),
    }
}

/// Get the path to the .git directory.
pub fn get_git_dir(root: &Path) -> PathBuf {
    root.join(GIT_DIR_NAME)
}

/// Get the path to the .git/info directory.
pub fn get_info_dir(root: &Path) -> PathBuf {
    get_git_dir(root).join("info")
}

/// Get the path to the repository-local exclude file.
pub fn get_exclude_path(root: &Path) -> PathBuf {
    get_info_dir(root).join("exclude")
}
