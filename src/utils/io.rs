//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of [`create_dir`] when the directory may already be there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
///
/// Existing files are overwritten.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a single directory; an existing one is reported, not treated as an error.
///
/// A non-directory already at `path` is still an error.
pub fn create_dir(path: &Path, operation: &str) -> Result<DirStatus> {
    match fs::create_dir(path) {
        Ok(()) => Ok(DirStatus::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(DirStatus::AlreadyExists)
        }
        Err(e) => Err(Error::internal_io(e.to_string(), Some(operation.to_string()))),
    }
}

/// Create a directory and all missing parents.
pub fn create_dir_all(path: &Path, operation: &str) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_overwrites_existing_content() {
        let temp = NamedTempFile::new().unwrap();
        write_file(temp.path(), "first", "test write").unwrap();
        write_file(temp.path(), "second", "test write").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "test write");
    }

    #[test]
    fn create_dir_tolerates_existing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("root");

        assert_eq!(create_dir(&target, "mkdir").unwrap(), DirStatus::Created);
        assert_eq!(create_dir(&target, "mkdir").unwrap(), DirStatus::AlreadyExists);
    }

    #[test]
    fn create_dir_rejects_existing_file() {
        let temp = NamedTempFile::new().unwrap();
        let err = create_dir(temp.path(), "mkdir").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn create_dir_fails_without_parent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("root");

        assert!(create_dir(&target, "mkdir").is_err());
        create_dir_all(&target, "mkdir -p").unwrap();
        assert!(target.is_dir());
    }
}
