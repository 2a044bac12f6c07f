//! glee - exclude files from git tracking without adding them to .gitignore
//!
//! This library provides the core functionality for the glee CLI, including:
//! - Repository root discovery by walking up to the closest `.git` directory
//! - Append, list, remove and clear operations on `.git/info/exclude`
//! - Launching a text editor on the exclude file
//! - An explicit invocation context in place of process-global state

pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod exclude;
pub mod fs;

// Re-export commonly used types
pub use config::Context;
pub use errors::{GleeError, Result};
