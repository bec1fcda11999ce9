//! Frontmatter parser for extracting YAML metadata from note files.

use crate::domain::{Note, NoteUrl, ParseNoteError, Priority};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing opening frontmatter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    InvalidNote(#[from] ParseNoteError),
}

/// Errors when reading a note file from disk.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid note file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Frontmatter fields as they appear in the YAML header.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    urls: Vec<NoteUrl>,
    #[serde(default)]
    favorite: bool,
    #[serde(default)]
    priority: Priority,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

/// Parses note file content with YAML frontmatter into a [`Note`].
///
/// # Format
/// ```text
/// ---
/// title: Note Title
/// category: 仕事/メモ
/// tags: [rust, notes]
/// urls:
///   - title: Example
///     url: https://example.com
/// favorite: true
/// priority: high
/// created: 2024-01-15T10:30:00Z
/// updated: 2024-01-15T10:30:00Z
/// ---
/// Body content here...
/// ```
///
/// The body below the closing delimiter becomes `Note::content`.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The content doesn't start with `---`
/// - There's no closing `---` delimiter
/// - The YAML between delimiters is invalid
/// - Required fields are missing or violate note invariants
pub fn parse_note(content: &str) -> Result<Note, ParseError> {
    // Opening delimiter must be at the very start.
    if !content.starts_with("---") {
        return Err(ParseError::MissingOpeningDelimiter);
    }
    let after_opening = if let Some(rest) = content.strip_prefix("---\r\n") {
        rest
    } else if let Some(rest) = content.strip_prefix("---\n") {
        rest
    } else if content == "---" {
        return Err(ParseError::MissingClosingDelimiter);
    } else {
        return Err(ParseError::MissingOpeningDelimiter);
    };

    let (yaml, body) = split_at_closing_delimiter(after_opening)?;
    let fm: Frontmatter = serde_yaml::from_str(yaml)?;

    let note = Note::builder(fm.title, fm.created, fm.updated)
        .content(body)
        .category(fm.category)
        .tags(fm.tags)
        .urls(fm.urls)
        .favorite(fm.favorite)
        .priority(fm.priority)
        .build()?;

    Ok(note)
}

/// Reads and parses a note file from disk.
pub fn read_note(path: &Path) -> Result<Note, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_note(&content).map_err(|source| ReadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Splits content after the opening delimiter into (yaml, body).
///
/// The closing delimiter must be exactly `---` at the start of a line,
/// followed by a newline or end of input.
fn split_at_closing_delimiter(content: &str) -> Result<(&str, &str), ParseError> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == "---" {
            let yaml = &content[..offset];
            let body = &content[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(ParseError::MissingClosingDelimiter)
}
