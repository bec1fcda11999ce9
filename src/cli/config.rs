//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Header label used for docx exports when nothing else is configured.
const DEFAULT_DOC_LABEL: &str = "kiroku notes";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default export directory
    pub export_dir: Option<PathBuf>,

    /// Running header label for docx exports
    pub doc_label: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/kiroku/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kiroku")
            .join("config.toml")
    }

    /// Resolve the export directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--output` argument
    /// 2. Config file `export_dir` setting
    /// 3. Current working directory
    pub fn export_dir(&self, cli_output: Option<&PathBuf>) -> PathBuf {
        cli_output
            .cloned()
            .or_else(|| self.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the docx header label.
    ///
    /// Precedence order:
    /// 1. CLI `--label` argument
    /// 2. Config file `doc_label` setting
    /// 3. Built-in default
    pub fn doc_label(&self, cli_label: Option<&str>) -> String {
        cli_label
            .map(str::to_string)
            .or_else(|| self.doc_label.clone())
            .unwrap_or_else(|| DEFAULT_DOC_LABEL.to_string())
    }
}
