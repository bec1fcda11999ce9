//! Handler for the `export` command.

use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::{
    ExportArgs, FormatArg,
    output::{Output, OutputFormat},
};
use crate::domain::Note;
use crate::export::{
    DirectorySink, ExportContext, ResolvedNote, export_docx, export_note,
};
use crate::infra::read_note;

/// Result of an export operation.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Number of notes exported
    pub notes_exported: usize,
    /// Paths of the written artifacts
    pub paths: Vec<String>,
}

/// Handle the `export` command.
pub fn handle_export(
    args: &ExportArgs,
    export_dir: &Path,
    doc_label: &str,
    verbose: bool,
) -> Result<()> {
    let notes: Vec<Note> = args
        .files
        .iter()
        .map(|path| {
            if verbose {
                eprintln!("  reading: {}", path.display());
            }
            read_note(path)
        })
        .collect::<Result<_, _>>()?;
    let sink = DirectorySink::new(export_dir);

    let result = match args.format.as_export_format() {
        None => {
            let resolved: Vec<ResolvedNote<'_>> = notes
                .iter()
                .map(|note| ResolvedNote::new(note, &ExportContext::for_note(note)))
                .collect();
            let outcome = export_docx(&resolved, doc_label, args.name.as_deref(), &sink)?;
            ExportResult {
                notes_exported: notes.len(),
                paths: vec![outcome.path.display().to_string()],
            }
        }
        Some(format) => {
            if args.name.is_some() && notes.len() > 1 {
                bail!("--name requires a single input file for {:?} exports", args.format);
            }
            let options = args.to_options(format);
            let mut paths = Vec::with_capacity(notes.len());
            for note in &notes {
                let context = ExportContext::for_note(note);
                let outcome = export_note(note, &options, &context, &sink)?;
                paths.push(outcome.path.display().to_string());
            }
            ExportResult { notes_exported: notes.len(), paths }
        }
    };

    print_result(&args.cli_format, &args.format, result)
}

/// Print the result in the requested format.
fn print_result(cli_format: &OutputFormat, format: &FormatArg, result: ExportResult) -> Result<()> {
    match cli_format {
        OutputFormat::Human => {
            match result.paths.as_slice() {
                [single] => println!("Exported {} note(s) to {}", result.notes_exported, single),
                paths => {
                    println!("Exported {} notes:", result.notes_exported);
                    for path in paths {
                        println!("  {path}");
                    }
                }
            }
            if matches!(format, FormatArg::Printable) {
                println!("Open the document in a browser and save it as PDF from the print dialog.");
            }
        }
        OutputFormat::Json => {
            let output = Output::new(result);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for path in &result.paths {
                println!("{path}");
            }
        }
    }

    Ok(())
}
