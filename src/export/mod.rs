//! Export functionality for converting notes to their output formats.
//!
//! Three string formats (plain text, markdown, print-to-PDF HTML) share one
//! orchestrator entry point; the styled word-processing document is a
//! separate batch path under [`docx`].

pub mod artifact;
pub mod docx;
mod markdown;
mod printable;
mod text;

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::Note;
use crate::infra::sanitize_file_name;

pub use artifact::{ArtifactError, ArtifactSink, DirectorySink};
pub use docx::{DocxError, ResolvedNote};
pub use markdown::render_markdown;
pub use printable::render_printable;
pub use text::render_text;

/// Placeholder substituted for markdown image tags in exported text.
pub const IMAGE_PLACEHOLDER: &str = "<<画像>>";

/// Output format for the string export paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Line-oriented plain text (`.txt`).
    #[default]
    Text,
    /// Normalized markdown (`.md`).
    Markdown,
    /// Self-contained HTML intended for browser print-to-PDF.
    Printable,
}

/// User-chosen export options.
///
/// The metadata flags are fully independent; no flag implies another.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_category: bool,
    pub include_tags: bool,
    pub include_created: bool,
    pub include_updated: bool,
    pub include_urls: bool,
    /// Output file base name (sans extension); the sanitized note title is
    /// used when absent.
    pub file_name: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            include_category: true,
            include_tags: true,
            include_created: true,
            include_updated: true,
            include_urls: true,
            file_name: None,
        }
    }
}

/// Resolved display strings that are not stored on the note itself.
///
/// The pipeline never resolves identifiers; callers supply the human-readable
/// category breadcrumb and tag names.
#[derive(Debug, Clone, Default)]
pub struct ExportContext {
    pub category_path: String,
    pub tag_names: Vec<String>,
}

impl ExportContext {
    /// Builds a context from the display strings a note file carries.
    pub fn for_note(note: &Note) -> Self {
        Self {
            category_path: note.category().to_string(),
            tag_names: note.tags().to_vec(),
        }
    }
}

/// Result of a successful export: where the artifact was emitted.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
}

/// Errors from the export orchestrator.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Docx(#[from] DocxError),

    #[error("failed to render print document: {0}")]
    Template(#[from] minijinja::Error),
}

/// Exports a single note in the format chosen in `options`, handing the
/// artifact to `sink`.
///
/// Returns once the save has been initiated; there is no feedback channel
/// for what the user does with the file afterwards. Failures never touch
/// the note itself, only the generated artifact.
pub fn export_note(
    note: &Note,
    options: &ExportOptions,
    context: &ExportContext,
    sink: &dyn ArtifactSink,
) -> Result<ExportOutcome, ExportError> {
    let base = output_base_name(note, options);
    let path = match options.format {
        ExportFormat::Text => {
            let text = render_text(note, options, context);
            sink.save_blob(&format!("{base}.txt"), text.as_bytes())?
        }
        ExportFormat::Markdown => {
            let md = render_markdown(note, options, context);
            sink.save_blob(&format!("{base}.md"), md.as_bytes())?
        }
        ExportFormat::Printable => {
            let html = render_printable(note, options, context, &base)?;
            sink.print_html(&base, &html)?
        }
    };
    Ok(ExportOutcome { path })
}

/// Returns the string a text or markdown export would produce, for on-screen
/// preview. Defined as empty for the print format, which has no cheap
/// preview.
pub fn generate_preview(note: &Note, options: &ExportOptions, context: &ExportContext) -> String {
    match options.format {
        ExportFormat::Text => render_text(note, options, context),
        ExportFormat::Markdown => render_markdown(note, options, context),
        ExportFormat::Printable => String::new(),
    }
}

/// Exports one or more resolved notes as a single styled `.docx` document.
///
/// Multiple notes are separated by page breaks. `label` is the running
/// header text; `file_name` overrides the default naming (single note:
/// sanitized title, multiple: `notes_yyyyMMdd`).
pub fn export_docx(
    notes: &[ResolvedNote<'_>],
    label: &str,
    file_name: Option<&str>,
    sink: &dyn ArtifactSink,
) -> Result<ExportOutcome, ExportError> {
    let bytes = docx::generate(notes, label)?;
    let base = match file_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => sanitize_file_name(name),
        None => docx::default_base_name(notes, chrono::Utc::now()),
    };
    let path = sink.save_blob(&format!("{base}.docx"), &bytes)?;
    Ok(ExportOutcome { path })
}

/// Convenience entry point for single-note call sites that already carry
/// resolved display strings.
pub fn export_docx_note(
    note: &Note,
    context: &ExportContext,
    label: &str,
    file_name: Option<&str>,
    sink: &dyn ArtifactSink,
) -> Result<ExportOutcome, ExportError> {
    let resolved = ResolvedNote::new(note, context);
    export_docx(std::slice::from_ref(&resolved), label, file_name, sink)
}

fn output_base_name(note: &Note, options: &ExportOptions) -> String {
    match options.file_name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => sanitize_file_name(name),
        None => sanitize_file_name(note.title()),
    }
}

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap())
}

/// Replaces every markdown image tag with [`IMAGE_PLACEHOLDER`], discarding
/// the source URL.
pub(crate) fn replace_images(body: &str) -> Cow<'_, str> {
    image_re().replace_all(body, IMAGE_PLACEHOLDER)
}

/// Timestamp format used in exported metadata lines.
pub(crate) fn format_timestamp(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
