//! Archive Service - packs a project directory into `<name>.zip`.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{ArchiveSummary, Archiver},
    domain::DomainError,
    error::SfwpResult,
};

const ARCHIVE_EXTENSION: &str = ".zip";

pub struct ArchiveService {
    archiver: Box<dyn Archiver>,
}

impl ArchiveService {
    pub fn new(archiver: Box<dyn Archiver>) -> Self {
        Self { archiver }
    }

    /// `name` with the archive extension, added only when missing.
    pub fn archive_file_name(name: &str) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() || name == ARCHIVE_EXTENSION {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: "archive name must not be empty".into(),
            });
        }
        Ok(if name.ends_with(ARCHIVE_EXTENSION) {
            name.to_string()
        } else {
            format!("{name}{ARCHIVE_EXTENSION}")
        })
    }

    /// Archive `root` into `root/<name>.zip`.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn archive(&self, root: &Path, name: &str) -> SfwpResult<ArchiveSummary> {
        let destination = root.join(Self::archive_file_name(name)?);
        let summary = self.archiver.archive_dir(root, &destination)?;
        info!(
            path = %summary.path.display(),
            files = summary.files,
            bytes = summary.bytes,
            "Archive written"
        );
        Ok(summary)
    }
}
