//! Line-level operations on an exclude file
//!
//! These work on an explicit file path; repository discovery happens in
//! the callers.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::{GleeError, Result};

/// Append one newline-terminated line per entry.
///
/// The file is created if absent (its parent directory is not) and all
/// lines go through a single handle. If the existing content does not end
/// with a newline, one is written first so the first new entry starts on
/// its own line. A failure partway leaves earlier lines written.
///
/// # Errors
/// * `Wrapped` - If the file cannot be opened or written
pub fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| {
            GleeError::wrap(e, format!("Cannot open exclude file {}", path.display()))
        })?;

    let write_err =
        |e: std::io::Error| GleeError::wrap(e, format!("Cannot write to exclude file {}", path.display()));

    if ends_without_newline(&mut file).map_err(write_err)? {
        file.write_all(b"\n").map_err(write_err)?;
    }

    for line in lines {
        file.write_all(line.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
    }

    Ok(())
}

fn ends_without_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Read the active entries of an exclude file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Wrapped` - If the file cannot be opened or read
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| GleeError::from_exclude_io(e, path, "open"))?;
    parse_entries(BufReader::new(file)).map_err(|e| GleeError::from_exclude_io(e, path, "read"))
}

/// Keep every trimmed line that is neither blank nor a `#` comment.
pub fn parse_entries<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(entry) = active_entry(&line) {
            entries.push(entry.to_string());
        }
    }
    Ok(entries)
}

fn active_entry(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

/// Truncate the exclude file to zero length without creating it.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Wrapped` - If the file cannot be truncated
pub fn truncate(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| GleeError::from_exclude_io(e, path, "truncate"))?;
    Ok(())
}

/// Drop every active line that exactly matches one of `targets`.
///
/// Comments, blank lines and non-matching entries are kept in order. The
/// file is rewritten through a temp file and a rename, and only when at
/// least one line was removed.
///
/// # Returns
/// The number of lines removed
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Wrapped` - If the file cannot be read or rewritten
pub fn remove_lines(path: &Path, targets: &[String]) -> Result<usize> {
    let content =
        fs::read_to_string(path).map_err(|e| GleeError::from_exclude_io(e, path, "read"))?;

    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;
    for line in content.split_inclusive('\n') {
        match active_entry(line) {
            Some(entry) if targets.iter().any(|t| t == entry) => removed += 1,
            _ => kept.push_str(line),
        }
    }

    if removed > 0 {
        write_atomically(path, &kept).map_err(|e| {
            GleeError::wrap(e, format!("Cannot rewrite exclude file {}", path.display()))
        })?;
    }

    Ok(removed)
}

/// Write to a uniquely named sibling temp file, copy the original
/// permissions onto it and rename it over `path`. The temp file is
/// removed if any step before the rename fails.
fn write_atomically(path: &Path, content: &str) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.as_file().set_permissions(permissions)?;

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
