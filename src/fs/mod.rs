//! File system utilities for glee
//!
//! Provides repository root discovery and git metadata path construction.

mod paths;

pub use paths::{
    find_repo_root, get_exclude_path, get_git_dir, get_info_dir, resolve_cwd, GIT_DIR_NAME,
};
