//! Isolated test environment with temp directory.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use super::{KirokuCommand, TestNote};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with temporary note and export directories.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Notes land under `notes/`, exported artifacts under `out/`.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    out_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            out_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path to the export output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes a test note file and returns its path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        let file_name = format!("{}.md", test_note.title().replace(['/', ' '], "-"));
        let path = self.notes_dir.join(file_name);
        std::fs::write(&path, test_note.render()).expect("Failed to write test note");
        path
    }

    /// Names of the files currently in the export directory, sorted.
    pub fn exported_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match std::fs::read_dir(&self.out_dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Reads an exported artifact as a string.
    pub fn read_export(&self, name: &str) -> String {
        std::fs::read_to_string(self.out_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read export {name}: {e}"))
    }

    /// Reads an exported artifact as bytes.
    pub fn read_export_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.out_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read export {name}: {e}"))
    }

    /// Creates a KirokuCommand configured for this test environment.
    pub fn cmd(&self) -> KirokuCommand {
        KirokuCommand::new()
            .output(&self.out_dir)
            .config_home(self._temp_dir.path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiroku::infra::read_note;

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_parseable() {
        let env = TestEnv::new();
        let note = TestNote::new("Parseable Note")
            .category("software/testing")
            .tag("integration")
            .body("# Test Content\n\nThis is a test.");

        let path = env.add_note(&note);
        let parsed = read_note(&path).expect("Should parse the note");

        assert_eq!(parsed.title(), "Parseable Note");
        assert_eq!(parsed.category(), "software/testing");
        assert_eq!(parsed.tags(), &["integration".to_string()]);
        assert!(parsed.content().contains("# Test Content"));
    }

    #[test]
    fn test_env_exported_files_empty_before_export() {
        let env = TestEnv::new();
        assert!(env.exported_files().is_empty());
    }
}
