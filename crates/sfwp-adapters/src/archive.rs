//! Zip archiver.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use sfwp_core::{
    application::{
        ApplicationError,
        ports::{ArchiveSummary, Archiver},
    },
    error::{SfwpError, SfwpResult},
};

/// Packs a directory tree into a deflated zip file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

impl Archiver for ZipArchiver {
    #[instrument(skip(self), fields(root = %root.display(), destination = %destination.display()))]
    fn archive_dir(&self, root: &Path, destination: &Path) -> SfwpResult<ArchiveSummary> {
        if !root.is_dir() {
            return Err(archive_error(destination, "source is not a directory"));
        }

        let result = write_archive(root, destination);
        if result.is_err() && destination.exists() {
            warn!("removing incomplete archive");
            let _ = std::fs::remove_file(destination);
        }
        result
    }
}

fn write_archive(root: &Path, destination: &Path) -> SfwpResult<ArchiveSummary> {
    let file = File::create(destination).map_err(|e| archive_error(destination, e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut files = 0usize;
    let walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| archive_error(destination, e))?;
        let path = entry.path();
        if path == destination {
            continue;
        }

        let name = entry_name(root, path)
            .ok_or_else(|| archive_error(destination, format!("bad path {}", path.display())))?;

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{name}/"), options)
                .map_err(|e| archive_error(destination, e))?;
        } else if entry.file_type().is_file() {
            debug!(entry = %name, "adding file");
            zip.start_file(name, options)
                .map_err(|e| archive_error(destination, e))?;
            let mut source = File::open(path).map_err(|e| archive_error(path, e))?;
            io::copy(&mut source, &mut zip).map_err(|e| archive_error(path, e))?;
            files += 1;
        }
    }

    zip.finish().map_err(|e| archive_error(destination, e))?;
    let bytes = std::fs::metadata(destination)
        .map(|m| m.len())
        .map_err(|e| archive_error(destination, e))?;

    Ok(ArchiveSummary {
        path: destination.to_path_buf(),
        files,
        bytes,
    })
}

/// `/`-separated path of `path` relative to `root`.
fn entry_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

fn archive_error(path: &Path, reason: impl ToString) -> SfwpError {
    ApplicationError::ArchiveFailed {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
    .into()
}
