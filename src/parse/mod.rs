//! Hand-rolled parser for the constrained markdown dialect the note editor
//! produces.
//!
//! This is deliberately not a CommonMark engine: the dialect is a small,
//! fixed subset (headings 1-4, blockquotes, three list kinds, bare code
//! fences, horizontal rules, and four inline span families), and every
//! construct that doesn't match degrades to plain paragraph text instead of
//! erroring.

mod block;
mod inline;

pub use block::{Block, ListItem, ListKind, parse_blocks};
pub use inline::{InlineRun, parse_inline};
