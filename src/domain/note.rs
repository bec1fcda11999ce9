//! Note struct representing a markdown note with export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of reference URLs a note may carry.
pub const MAX_URLS: usize = 5;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
    TooManyUrls(usize),
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
            ParseNoteErrorKind::TooManyUrls(n) => {
                write!(f, "invalid note: {} urls given, at most {} allowed", n, MAX_URLS)
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A reference URL attached to a note, with an optional display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUrl {
    /// Display title, shown instead of the raw URL when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The URL itself.
    pub url: String,
}

impl NoteUrl {
    /// Creates a URL entry without a display title.
    pub fn bare(url: impl Into<String>) -> Self {
        Self { title: None, url: url.into() }
    }

    /// Creates a URL entry with a display title.
    pub fn titled(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: Some(title.into()), url: url.into() }
    }
}

/// Note priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Display label used in exported documents.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "低",
            Priority::Medium => "中",
            Priority::High => "高",
        }
    }
}

/// A note with export metadata.
///
/// Notes are flat markdown files with YAML frontmatter; the body below the
/// frontmatter is the note content in the editor's constrained markdown
/// dialect. The export pipeline treats a note as read-only input.
///
/// # Required Fields
/// - `title`: Human-readable title (non-empty)
/// - `created`: When the note was created
/// - `updated`: When the note was last modified
///
/// # Optional Fields
/// - `content`: Markdown body (may be empty)
/// - `category`: Category breadcrumb such as `仕事/メモ` (may be empty)
/// - `tags`: Tag display names
/// - `urls`: Up to [`MAX_URLS`] reference URLs
/// - `favorite`, `priority`
///
/// # Examples
///
/// ```
/// use kiroku::domain::Note;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::new("API Design", now, now).unwrap();
/// assert_eq!(note.title(), "API Design");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    title: String,
    content: String,
    category: String,
    tags: Vec<String>,
    urls: Vec<NoteUrl>,
    favorite: bool,
    priority: Priority,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note with required fields only.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title is empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(title, created, updated).build()
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        title: impl Into<String>,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder {
            title: title.into(),
            content: String::new(),
            category: String::new(),
            tags: Vec::new(),
            urls: Vec::new(),
            favorite: false,
            priority: Priority::default(),
            created,
            updated,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn urls(&self) -> &[NoteUrl] {
        &self.urls
    }

    pub fn favorite(&self) -> bool {
        self.favorite
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

/// Builder for constructing a Note with optional fields.
#[derive(Debug, Clone)]
pub struct NoteBuilder {
    title: String,
    content: String,
    category: String,
    tags: Vec<String>,
    urls: Vec<NoteUrl>,
    favorite: bool,
    priority: Priority,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl NoteBuilder {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn urls(mut self, urls: Vec<NoteUrl>) -> Self {
        self.urls = urls;
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builds the Note, validating required invariants.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if:
    /// - The title is empty or whitespace-only
    /// - More than [`MAX_URLS`] urls were given
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteError { kind: ParseNoteErrorKind::EmptyTitle });
        }
        if self.urls.len() > MAX_URLS {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::TooManyUrls(self.urls.len()),
            });
        }

        Ok(Note {
            title: trimmed.to_string(),
            content: self.content,
            category: self.category,
            tags: self.tags,
            urls: self.urls,
            favorite: self.favorite,
            priority: self.priority,
            created: self.created,
            updated: self.updated,
        })
    }
}
