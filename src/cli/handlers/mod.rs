//! Command handlers for the CLI.

mod completions;
mod export;
mod preview;

pub use completions::handle_completions;
pub use export::{ExportResult, handle_export};
pub use preview::handle_preview;

use crate::cli::{ExportArgs, PreviewArgs};
use crate::export::{ExportFormat, ExportOptions};

/// Builds the pipeline options shared by `export` and `preview`.
fn export_options(
    format: ExportFormat,
    no_category: bool,
    no_tags: bool,
    no_created: bool,
    no_updated: bool,
    no_urls: bool,
    file_name: Option<String>,
) -> ExportOptions {
    ExportOptions {
        format,
        include_category: !no_category,
        include_tags: !no_tags,
        include_created: !no_created,
        include_updated: !no_updated,
        include_urls: !no_urls,
        file_name,
    }
}

impl ExportArgs {
    pub(crate) fn to_options(&self, format: ExportFormat) -> ExportOptions {
        export_options(
            format,
            self.no_category,
            self.no_tags,
            self.no_created,
            self.no_updated,
            self.no_urls,
            self.name.clone(),
        )
    }
}

impl PreviewArgs {
    pub(crate) fn to_options(&self, format: ExportFormat) -> ExportOptions {
        export_options(
            format,
            self.no_category,
            self.no_tags,
            self.no_created,
            self.no_updated,
            self.no_urls,
            None,
        )
    }
}
