//! Invocation context - the ambient inputs every operation reads

use std::path::{Path, PathBuf};

/// Desktop platform family, used to pick editor fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Explicit replacement for process-global state.
///
/// Operations take a `Context` instead of calling `std::env::current_dir`
/// or `std::env::var` themselves, so tests can run them against any
/// directory without touching the process.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory entries are resolved against
    pub cwd: PathBuf,

    /// Preferred editor command line, if any
    pub editor: Option<String>,

    /// Platform used for editor fallbacks
    pub platform: Platform,
}

impl Context {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Context {
            cwd: cwd.into(),
            editor: None,
            platform: Platform::current(),
        }
    }

    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}
