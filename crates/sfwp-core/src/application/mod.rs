//! Application layer for SFWP.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (widgets, traits, docs, debug, archive)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! text logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArchiveService, DebugReport, DebugService, DocsReport, DocsService, InjectionReport,
    TemplateService, TraitService, WidgetService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ArchiveSummary, Archiver, Filesystem, TemplateStore};

pub use error::ApplicationError;
