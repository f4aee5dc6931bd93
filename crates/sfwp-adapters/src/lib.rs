//! Infrastructure adapters for SFWP.
//!
//! This crate implements the ports defined in `sfwp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod stubs;
pub mod template_store;

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use stubs::StubSource;
pub use template_store::{DirectoryStore, InMemoryStore};
