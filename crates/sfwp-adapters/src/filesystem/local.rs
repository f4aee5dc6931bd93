//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use sfwp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SfwpError, SfwpResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> SfwpResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SfwpResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> SfwpResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> SfwpResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "list directory"))?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "list directory"))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SfwpError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a.txt");

        fs.write_file(&path, "hello").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn write_needs_parent() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("missing").join("a.txt");

        assert!(fs.write_file(&path, "x").is_err());
        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "x").unwrap();
    }

    #[test]
    fn list_files_is_sorted_and_flat() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("nested")).unwrap();
        fs.write_file(&dir.path().join("b.php"), "").unwrap();
        fs.write_file(&dir.path().join("a.php"), "").unwrap();
        fs.write_file(&dir.path().join("nested/c.php"), "").unwrap();

        let files = fs.list_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.php"), dir.path().join("b.php")]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let files = LocalFilesystem::new()
            .list_files(&dir.path().join("nope"))
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn read_error_names_the_path() {
        let err = LocalFilesystem::new()
            .read_to_string(Path::new("/definitely/not/here.php"))
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.php"));
    }
}
