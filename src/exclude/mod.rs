//! Management of the repository-local exclude file

mod entry;
mod file;
mod operations;


pub use entry::{to_root_relative, validate_entry};
pub use file::{append_lines, parse_entries, read_entries, remove_lines, truncate};
pub use operations::{
    add_excludes, clear_excludes, list_excludes, remove_excludes, ExcludeFile,
};
