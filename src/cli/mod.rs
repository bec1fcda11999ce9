//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::export::ExportFormat;
use output::OutputFormat;

/// kiroku - export markdown notes to text, markdown, print and docx documents
#[derive(Parser, Debug)]
#[command(name = "kiroku", version, about, long_about = None)]
pub struct Cli {
    /// Output directory (overrides config file)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export notes to a chosen document format
    Export(ExportArgs),

    /// Print the rendered export to stdout without writing a file
    Preview(PreviewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Document format for the `export` and `preview` commands
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// Plain text document
    #[default]
    Text,
    /// Normalized markdown document
    Markdown,
    /// Self-contained HTML for browser print-to-PDF
    Printable,
    /// Styled word-processing document
    Docx,
}

impl FormatArg {
    /// The string-pipeline format, when this is not the docx path.
    pub fn as_export_format(self) -> Option<ExportFormat> {
        match self {
            FormatArg::Text => Some(ExportFormat::Text),
            FormatArg::Markdown => Some(ExportFormat::Markdown),
            FormatArg::Printable => Some(ExportFormat::Printable),
            FormatArg::Docx => None,
        }
    }
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note files to export
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Export format
    #[arg(short = 'F', long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Output file base name (sans extension)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Header label for docx exports (overrides config)
    #[arg(long)]
    pub label: Option<String>,

    /// Omit the category line from exported metadata
    #[arg(long)]
    pub no_category: bool,

    /// Omit the tag line from exported metadata
    #[arg(long)]
    pub no_tags: bool,

    /// Omit the creation timestamp from exported metadata
    #[arg(long)]
    pub no_created: bool,

    /// Omit the update timestamp from exported metadata
    #[arg(long)]
    pub no_updated: bool,

    /// Omit the reference URL section
    #[arg(long)]
    pub no_urls: bool,

    /// CLI output format (for status messages, not export content)
    #[arg(long = "cli-format", value_enum, default_value_t = OutputFormat::Human)]
    pub cli_format: OutputFormat,
}

/// Arguments for the `preview` command
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Note file to preview
    pub file: PathBuf,

    /// Export format (docx has no text preview)
    #[arg(short = 'F', long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Omit the category line from exported metadata
    #[arg(long)]
    pub no_category: bool,

    /// Omit the tag line from exported metadata
    #[arg(long)]
    pub no_tags: bool,

    /// Omit the creation timestamp from exported metadata
    #[arg(long)]
    pub no_created: bool,

    /// Omit the update timestamp from exported metadata
    #[arg(long)]
    pub no_updated: bool,

    /// Omit the reference URL section
    #[arg(long)]
    pub no_urls: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
