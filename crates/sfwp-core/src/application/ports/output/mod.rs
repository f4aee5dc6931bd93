//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sfwp-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Template, TemplateName};
use crate::error::SfwpResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sfwp_adapters::filesystem::LocalFilesystem` (production)
/// - `sfwp_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Reads and writes are whole-file: no streaming and no partial writes.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> SfwpResult<String>;

    /// Write (create or truncate) a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &str) -> SfwpResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SfwpResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, sorted by path.
    fn list_files(&self, dir: &Path) -> SfwpResult<Vec<PathBuf>>;
}

/// Port for stub lookup.
///
/// Implemented by:
/// - `sfwp_adapters::template_store::InMemoryStore` (bundled stubs)
/// - `sfwp_adapters::template_store::DirectoryStore` (user stubs directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a stub by logical name.
    fn get(&self, name: TemplateName) -> SfwpResult<Template>;

    /// Names this store can serve.
    fn names(&self) -> Vec<TemplateName>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}

/// What an archive run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub files: usize,
    pub bytes: u64,
}

/// Port for packing a directory into an archive file.
///
/// Implemented by:
/// - `sfwp_adapters::archive::ZipArchiver`
#[cfg_attr(test, mockall::automock)]
pub trait Archiver: Send + Sync {
    /// Archive everything below `root` into `destination`, recursively.
    /// `destination` itself is never included.
    fn archive_dir(&self, root: &Path, destination: &Path) -> SfwpResult<ArchiveSummary>;
}
