//! Word-processing document generator.
//!
//! Emits a real `.docx`: an OPC zip container holding WordprocessingML
//! parts. The document model in [`document`] maps parsed note bodies to
//! styled paragraphs; [`xml`] serializes the parts; [`package`] assembles
//! the container.

mod document;
mod package;
mod xml;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::Note;
use crate::export::ExportContext;
use crate::infra::sanitize_file_name;

/// Base name used when exporting several notes at once.
const BATCH_PREFIX: &str = "notes";

/// Errors while assembling a document.
///
/// Document content itself is never validated — any string renders. The
/// only failure modes are the underlying packer and part writers, which
/// propagate to the caller.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("failed to assemble document container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to write document part: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A note together with the resolved display strings the document needs.
#[derive(Debug, Clone)]
pub struct ResolvedNote<'a> {
    pub note: &'a Note,
    pub category_path: String,
    pub tag_names: Vec<String>,
}

impl<'a> ResolvedNote<'a> {
    pub fn new(note: &'a Note, context: &ExportContext) -> Self {
        Self {
            note,
            category_path: context.category_path.clone(),
            tag_names: context.tag_names.clone(),
        }
    }
}

/// Generates the `.docx` payload for one or more resolved notes.
///
/// Notes after the first start on a new page. `label` becomes the running
/// header text.
pub fn generate(notes: &[ResolvedNote<'_>], label: &str) -> Result<Vec<u8>, DocxError> {
    let model = document::build_model(notes, label);
    package::pack(&model, Utc::now())
}

/// Default output base name: the sanitized title for a single note, a fixed
/// prefix plus the current date for a batch.
pub fn default_base_name(notes: &[ResolvedNote<'_>], now: DateTime<Utc>) -> String {
    match notes {
        [single] => sanitize_file_name(single.note.title()),
        _ => format!("{BATCH_PREFIX}_{}", now.format("%Y%m%d")),
    }
}
