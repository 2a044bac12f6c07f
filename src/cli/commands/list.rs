//! List command - Print the active exclude entries

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::load_context;
use crate::errors::{GleeError, Result};
use crate::exclude::{read_entries, ExcludeFile};

/// JSON shape printed by `glee list --json`
#[derive(Debug, Serialize)]
pub struct ListOutput {
    #[serde(flatten)]
    pub file: ExcludeFile,

    pub entries: Vec<String>,
}

/// Print entries one per line, or as a JSON document
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let ctx = load_context(cwd)?;
    let file = ExcludeFile::locate(&ctx)?;
    let entries = read_entries(&file.path)?;
    let output = ListOutput { file, entries };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    ignore_broken_pipe(render(&mut handle, &output, json))
}

/// A reader that stops early (`glee list | head -1`) is not a failure
fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(GleeError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn render<W: Write>(out: &mut W, output: &ListOutput, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(output)
            .map_err(|e| GleeError::wrap(e, "Cannot serialize exclude list"))?;
        writeln!(out, "{}", text)?;
    } else {
        for entry in &output.entries {
            writeln!(out, "{}", entry)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> ListOutput {
        ListOutput {
            file: ExcludeFile {
                root: PathBuf::from("/repo"),
                path: PathBuf::from("/repo/.git/info/exclude"),
            },
            entries: vec!["file1.txt".to_string(), "dir/f2.txt".to_string()],
        }
    }

    #[test]
    fn test_render_plain() {
        let mut buf = Vec::new();
        render(&mut buf, &sample(), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "file1.txt\ndir/f2.txt\n");
    }

    #[test]
    fn test_render_json() {
        let mut buf = Vec::new();
        render(&mut buf, &sample(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["root"], "/repo");
        assert_eq!(value["exclude_file"], "/repo/.git/info/exclude");
        assert_eq!(value["entries"][1], "dir/f2.txt");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_to_closed_pipe_is_not_an_error() {
        let result = render(&mut ClosedPipe, &sample(), false);
        assert!(result.is_err());
        assert!(ignore_broken_pipe(result).is_ok());
    }

    #[test]
    fn test_other_errors_are_kept() {
        let err = ignore_broken_pipe(Err(GleeError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ))))
        .unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_render_plain_empty() {
        let mut buf = Vec::new();
        let mut output = sample();
        output.entries.clear();
        render(&mut buf, &output, false).unwrap();
        assert!(buf.is_empty());
    }
}
