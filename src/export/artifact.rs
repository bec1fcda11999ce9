//! The narrow seam between the export pipeline and the platform.
//!
//! The pipeline only ever performs two side effects: saving a named blob and
//! handing a print document to the environment. Everything platform-specific
//! lives behind [`ArtifactSink`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors when emitting an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A window-hosted sink could not open its print window. Terminal: the
    /// user has to allow popups and retry manually.
    #[error("print window was blocked")]
    PrintBlocked,
}

/// Destination for generated export artifacts.
pub trait ArtifactSink {
    /// Saves a named binary blob and returns where it landed.
    fn save_blob(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ArtifactError>;

    /// Emits a print-ready HTML document. Window-hosted implementations open
    /// it and trigger the print dialog; they fail with
    /// [`ArtifactError::PrintBlocked`] when the window cannot be opened.
    fn print_html(&self, base_name: &str, html: &str) -> Result<PathBuf, ArtifactError>;
}

/// Sink that writes artifacts into a directory on disk.
///
/// The print path saves the HTML document next to the other artifacts; the
/// document itself triggers the print dialog when opened in a browser.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn save_blob(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ArtifactError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ArtifactError::Write {
            name: file_name.to_string(),
            source,
        })?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes).map_err(|source| ArtifactError::Write {
            name: file_name.to_string(),
            source,
        })?;
        Ok(path)
    }

    fn print_html(&self, base_name: &str, html: &str) -> Result<PathBuf, ArtifactError> {
        self.save_blob(&format!("{base_name}.html"), html.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_blob_writes_file() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        let path = sink.save_blob("out.txt", b"hello").unwrap();

        assert_eq!(path, dir.path().join("out.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn save_blob_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let sink = DirectorySink::new(&nested);

        sink.save_blob("out.txt", b"x").unwrap();

        assert!(nested.join("out.txt").exists());
    }

    #[test]
    fn print_html_saves_with_html_extension() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        let path = sink.print_html("report", "<html></html>").unwrap();

        assert_eq!(path, dir.path().join("report.html"));
    }

    #[test]
    fn write_error_names_the_file() {
        let sink = DirectorySink::new("/proc/nonexistent/denied");
        let err = sink.save_blob("out.txt", b"x").unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }
}
