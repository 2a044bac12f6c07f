//! Error types for the glee CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for glee operations
pub type Result<T> = std::result::Result<T, GleeError>;

/// Main error type for all glee operations
#[derive(Debug, Error)]
pub enum GleeError {
    /// No directory with a .git folder above the working directory
    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    /// The exclude file is required but missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Every editor candidate failed to start
    #[error("No editor available: {0}")]
    NoEditorAvailable(String),

    /// Working directory or relative path computation failed
    #[error("Path error: {0}")]
    Path(String),

    /// Entry cannot be written as a single exclude line
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl GleeError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            GleeError::RepoNotFound(_) => "REPO_NOT_FOUND",
            GleeError::FileNotFound(_) => "FILE_NOT_FOUND",
            GleeError::NoEditorAvailable(_) => "NO_EDITOR",
            GleeError::Path(_) => "PATH_ERROR",
            GleeError::InvalidEntry(_) => "INVALID_ENTRY",
            GleeError::Io(_) => "IO_ERROR",
            GleeError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        GleeError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }

    /// Map an IO error on the exclude file, turning `NotFound` into `FileNotFound`
    pub(crate) fn from_exclude_io(
        error: std::io::Error,
        path: &std::path::Path,
        action: &str,
    ) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            GleeError::FileNotFound(format!("Exclude file not found: {}", path.display()))
        } else {
            GleeError::wrap(error, format!("Cannot {} exclude file {}", action, path.display()))
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &GleeError) -> i32 {
    match error {
        GleeError::NoEditorAvailable(_) => 127, // Shell convention for "command not found"
        _ => 1,
    }
}
