//! Process-based editor launcher
//!
//! Opens the exclude file in the first editor that starts. The editor is
//! spawned and never awaited: success means the process was created.

use std::fmt;
use std::path::Path;

use tokio::process::Command;

use crate::config::{Context, Platform};
use crate::errors::{GleeError, Result};
use crate::exclude::ExcludeFile;

/// One editor launch candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    /// Program resolved through the executable search path
    pub program: String,

    /// Arguments placed before the file path
    pub args: Vec<String>,
}

impl EditorCommand {
    pub fn new(program: impl Into<String>) -> Self {
        EditorCommand {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Parse an editor command line such as `code --wait`.
    ///
    /// Falls back to using the whole string as the program name when it
    /// cannot be split (for example an unbalanced quote).
    pub fn parse(command_line: &str) -> Option<Self> {
        let command_line = command_line.trim();
        if command_line.is_empty() {
            return None;
        }

        match shell_words::split(command_line) {
            Ok(mut words) if !words.is_empty() => {
                let program = words.remove(0);
                Some(EditorCommand {
                    program,
                    args: words,
                })
            }
            _ => Some(EditorCommand::new(command_line)),
        }
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Platform fallback editors, in the order they are tried
pub fn default_editors(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOs => &["open", "TextEdit", "vim", "nano"],
        Platform::Windows => &["notepad", "wordpad"],
        Platform::Other => &["xdg-open", "gedit", "kate", "kwrite", "nano", "vim", "emacs"],
    }
}

/// Build the priority-ordered list of editors to try.
///
/// The preferred editor (usually `$EDITOR`) comes first when set, followed
/// by the platform defaults.
pub fn editor_candidates(preferred: Option<&str>, platform: Platform) -> Vec<EditorCommand> {
    preferred
        .and_then(EditorCommand::parse)
        .into_iter()
        .chain(default_editors(platform).iter().map(|name| EditorCommand::new(*name)))
        .collect()
}

/// Open `path` with the first candidate that starts.
///
/// Must be called from within a tokio runtime, which reaps the detached
/// child once it exits.
///
/// # Returns
/// The candidate that was launched
///
/// # Errors
/// * `FileNotFound` - If `path` does not exist
/// * `NoEditorAvailable` - If every candidate failed to start
pub fn open_in_editor(path: &Path, candidates: &[EditorCommand]) -> Result<EditorCommand> {
    std::fs::metadata(path).map_err(|e| GleeError::from_exclude_io(e, path, "access"))?;

    for candidate in candidates {
        let spawned = Command::new(&candidate.program)
            .args(&candidate.args)
            .arg(path)
            .spawn();

        match spawned {
            Ok(_child) => {
                tracing::info!(editor = %candidate, file = %path.display(), "launched editor");
                return Ok(candidate.clone());
            }
            Err(e) => {
                tracing::debug!(editor = %candidate, error = %e, "editor failed to start");
            }
        }
    }

    Err(GleeError::NoEditorAvailable(format!(
        "Unable to open {} with any of {} candidate editors",
        path.display(),
        candidates.len()
    )))
}

/// Open the repository's exclude file in the user's editor.
pub fn edit_excludes(ctx: &Context) -> Result<EditorCommand> {
    let target = ExcludeFile::locate(ctx)?;
    let candidates = editor_candidates(ctx.editor.as_deref(), ctx.platform);
    open_in_editor(&target.path, &candidates)
}
