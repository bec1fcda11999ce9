//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `kiroku` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct KirokuCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl KirokuCommand {
    /// Creates a new command for the `kiroku` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--output` option to specify the export directory.
    pub fn output(mut self, path: &Path) -> Self {
        self.args.push("--output".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `XDG_CONFIG_HOME` at an isolated directory so the user's real
    /// config file never leaks into a test.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("kiroku").expect("Failed to find kiroku binary");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `export` command with input files.
    pub fn export<I, S>(self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["export"]).args(files)
    }

    /// Configures for the `preview` command with a file.
    pub fn preview(self, file: &str) -> Self {
        self.args(["preview", file])
    }

    /// Adds `--format <fmt>` to the command.
    pub fn format(self, fmt: &str) -> Self {
        self.args(["--format", fmt])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--cli-format json` to the command.
    pub fn cli_format_json(self) -> Self {
        self.args(["--cli-format", "json"])
    }

    /// Adds `--cli-format paths` to the command.
    pub fn cli_format_paths(self) -> Self {
        self.args(["--cli-format", "paths"])
    }
}

impl Default for KirokuCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        KirokuCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_output() {
        let temp = TempDir::new().unwrap();
        let cmd = KirokuCommand::new().output(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--output");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = KirokuCommand::new().export(["a.md"]).format("markdown");
        let args = cmd.get_args();
        assert!(args.contains(&"export".to_string()));
        assert!(args.contains(&"a.md".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"markdown".to_string()));
    }
}
