//! Editor launching for the exclude file

mod launcher;

pub use launcher::{
    default_editors, edit_excludes, editor_candidates, open_in_editor, EditorCommand,
};
