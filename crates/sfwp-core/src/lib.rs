//! SFWP Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the SFWP
//! widget generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             sfwp-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (WidgetService, TraitService, Docs...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Store, Filesystem, Archiver)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sfwp-adapters (Infrastructure)      │
//! │  (InMemoryStore, LocalFilesystem, Zip)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (derive, render, inject, doc blocks)   │
//! │             No I/O at all               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sfwp_core::domain::{TraitReference, inject_traits};
//!
//! let source = "class CardBox {\n    protected function render() {}\n}\n";
//! let traits = TraitReference::parse_list(["card"]).unwrap();
//!
//! let first = inject_traits(source, &traits);
//! assert!(first.changed);
//!
//! let second = inject_traits(&first.text, &traits);
//! assert!(!second.changed);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArchiveService, DebugService, DocsService, TemplateService, TraitService, WidgetService,
        ports::{ArchiveSummary, Archiver, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Conventions, DebugMode, DocBlock, IdentifierSet, InjectionOutcome, ProjectLayout,
        ReplacementMap, Template, TemplateName, TraitReference, WidgetRequest,
    };
    pub use crate::error::{SfwpError, SfwpResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
