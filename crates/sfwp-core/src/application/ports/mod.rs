//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sfwp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: whole-file reads and writes
//!   - `TemplateStore`: stub lookup
//!   - `Archiver`: directory archiving
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArchiveSummary, Archiver, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockArchiver, MockFilesystem, MockTemplateStore};
