use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{ReviewError, ReviewResult};
use crate::traits::document_source::DocumentSource;

/// A document backed by a file on disk. Reads and writes go straight to the
/// file; nothing is cached.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl DocumentSource for FileDocument {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn get_content(&self) -> ReviewResult<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| ReviewError::document_error(&self.name(), "read", &e.to_string()))
    }

    fn set_content(&mut self, content: &str) -> ReviewResult<()> {
        log::debug!("📝 Writing {} bytes to {}", content.len(), self.path.display());
        fs::write(&self.path, content)
            .map_err(|e| ReviewError::document_error(&self.name(), "write", &e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = FileDocument::new(dir.path().join("final.txt"));
        document.set_content("A\nX\nC").unwrap();
        assert_eq!(document.get_content().unwrap(), "A\nX\nC");
    }

    #[test]
    fn missing_file_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let document = FileDocument::new(dir.path().join("absent.txt"));
        match document.get_content() {
            Err(ReviewError::DocumentError { operation, .. }) => assert_eq!(operation, "read"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
