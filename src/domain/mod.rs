//! Core types: Note, NoteUrl, Priority

mod note;

pub use note::{MAX_URLS, Note, NoteBuilder, NoteUrl, ParseNoteError, Priority};
