//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateName;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A stub is missing from the template store.
    #[error("Template '{name}' not found in {location}")]
    TemplateNotFound { name: TemplateName, location: String },

    /// The widget source to read does not exist.
    #[error("Widget file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The companion documentation file does not exist.
    #[error("Documentation file not found: {}", path.display())]
    DocMissing { path: PathBuf },

    /// Destination artifacts exist and overwriting was not allowed.
    #[error("{} file(s) already exist", paths.len())]
    AlreadyExists { paths: Vec<PathBuf> },

    /// No `wp-config.php` in the start directory or any ancestor.
    #[error("wp-config.php not found in {} or any parent directory", start.display())]
    ConfigFileNotFound { start: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Creating an archive failed.
    #[error("Archive error at {}: {reason}", path.display())]
    ArchiveFailed { path: PathBuf, reason: String },

    /// The trait registry could not be encoded or decoded.
    #[error("Trait registry error at {}: {reason}", path.display())]
    RegistryError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, location } => vec![
                format!("Add {} to {}", name.file_name(), location),
                "Or point --stubs / SFWP_STUBS_DIR at a complete stubs directory".into(),
                "Remove the override to use the bundled stubs".into(),
            ],
            Self::SourceMissing { path } => vec![
                format!("Expected widget source at {}", path.display()),
                "Run the command from the plugin root".into(),
                "Create the widget first: sfwp create <name>".into(),
            ],
            Self::DocMissing { path } => vec![
                format!("Expected documentation at {}", path.display()),
                "Widgets created with --no-readme have no documentation file".into(),
            ],
            Self::AlreadyExists { paths } => {
                let mut out: Vec<String> = paths
                    .iter()
                    .map(|p| format!("Exists: {}", p.display()))
                    .collect();
                out.push("Use --force to overwrite".into());
                out
            }
            Self::ConfigFileNotFound { .. } => vec![
                "Run this command inside a WordPress installation".into(),
                "wp-config.php is searched from the current directory upwards".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::ArchiveFailed { path, .. } => vec![
                format!("Could not write {}", path.display()),
                "Check free disk space and permissions".into(),
            ],
            Self::RegistryError { path, .. } => vec![
                format!("Delete {} and run the command again", path.display()),
                "The registry is regenerated from the traits directory".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::SourceMissing { .. }
            | Self::DocMissing { .. }
            | Self::ConfigFileNotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. }
            | Self::ArchiveFailed { .. }
            | Self::RegistryError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
