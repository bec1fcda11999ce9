//! kiroku - export markdown notes to text, markdown, print and docx documents

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod parse;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_export, handle_preview},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let export_dir = config.export_dir(cli.output.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Export(args) => {
            let label = config.doc_label(args.label.as_deref());
            handle_export(args, &export_dir, &label, verbose)
        }
        Command::Preview(args) => handle_preview(args),
        Command::Completions(args) => handle_completions(args),
    }
}
