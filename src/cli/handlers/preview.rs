//! Handler for the `preview` command.

use anyhow::{Result, bail};

use crate::cli::PreviewArgs;
use crate::export::{ExportContext, ExportFormat, generate_preview};
use crate::infra::read_note;

/// Handle the `preview` command: render to stdout without writing a file.
pub fn handle_preview(args: &PreviewArgs) -> Result<()> {
    let format = match args.format.as_export_format() {
        Some(ExportFormat::Printable) => {
            bail!("printable documents have no text preview; use `export --format printable`")
        }
        None => bail!("docx documents have no text preview; use `export --format docx`"),
        Some(format) => format,
    };

    let note = read_note(&args.file)?;
    let context = ExportContext::for_note(&note);
    let options = args.to_options(format);

    print!("{}", generate_preview(&note, &options, &context));
    Ok(())
}
