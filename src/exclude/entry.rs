//! Entry validation and conversion to root-relative exclude lines

use std::path::{Component, Path, PathBuf};

use crate::errors::{GleeError, Result};

/// Check that an entry can be written as a single exclude line.
///
/// # Errors
/// * `InvalidEntry` - If the entry is blank or contains a line break
pub fn validate_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        return Err(GleeError::InvalidEntry("entry is empty".to_string()));
    }
    if entry.contains('\n') || entry.contains('\r') {
        return Err(GleeError::InvalidEntry(format!(
            "entry contains a line break: {:?}",
            entry
        )));
    }
    Ok(())
}

/// Convert a user entry into the line written to the exclude file.
///
/// The entry is joined onto `cwd`, normalized lexically (glob characters
/// are plain text here) and expressed relative to `root` with `/`
/// separators. A trailing separator on the entry is kept since git treats
/// `dir/` as a directory-only pattern; plain path cleaning would strip it
/// and widen the pattern to files of the same name.
///
/// Blank entries are rejected instead of being resolved to the working
/// directory, which would otherwise write `.` (or the subdirectory) and
/// exclude everything under it.
///
/// # Arguments
/// * `root` - Canonical repository root
/// * `cwd` - Canonical directory the entry was given relative to
/// * `entry` - Raw user entry
///
/// # Errors
/// * `InvalidEntry` - If the entry fails [`validate_entry`]
/// * `Path` - If no relative path from `root` exists or it is not UTF-8
pub fn to_root_relative(root: &Path, cwd: &Path, entry: &str) -> Result<String> {
    validate_entry(entry)?;

    let absolute = normalize_lexically(&cwd.join(entry));
    let root = normalize_lexically(root);

    let parts = relative_components(&root, &absolute).ok_or_else(|| {
        GleeError::Path(format!(
            "Cannot build a relative exclude path from {} to {}",
            root.display(),
            absolute.display()
        ))
    })?;

    if parts.is_empty() {
        return Ok(".".to_string());
    }

    let mut line = parts.join("/");
    if has_trailing_separator(entry) {
        line.push('/');
    }
    Ok(line)
}

/// Drop `.` components and fold `..` into their parent without touching
/// the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the filesystem root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

fn relative_components(root: &Path, target: &Path) -> Option<Vec<String>> {
    let root: Vec<Component<'_>> = root.components().collect();
    let target: Vec<Component<'_>> = target.components().collect();

    let common = root
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return None;
    }

    let mut parts = Vec::with_capacity(root.len() - common + target.len() - common);
    for _ in &root[common..] {
        parts.push("..".to_string());
    }
    for component in &target[common..] {
        parts.push(component.as_os_str().to_str()?.to_string());
    }
    Some(parts)
}

fn has_trailing_separator(entry: &str) -> bool {
    entry.ends_with('/') || (cfg!(windows) && entry.ends_with('\\'))
}
