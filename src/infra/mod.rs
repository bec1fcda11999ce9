//! Infrastructure: note file parsing and file name handling.

pub mod filename;
pub mod frontmatter;

pub use filename::sanitize_file_name;
pub use frontmatter::{ParseError, ReadError, parse_note, read_note};
