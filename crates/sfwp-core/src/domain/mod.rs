//! Core domain layer for SFWP.
//!
//! Pure text logic with no I/O: identifier derivation, stub rendering, the
//! structural patch engine, documentation blocks and the debug-flag patch.
//! Files are read and written by the application layer through ports.
//!
//! ## Rules
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or process access
//! - **Pure functions**: same input, byte-identical output
//! - **Never panics on user input**: failures are `DomainError`s
//!
// Public API - what the world sees
pub mod conventions;
pub mod debug_mode;
pub mod docs;
pub mod error;
pub mod identifiers;
pub mod layout;
pub mod patch;
pub mod registry;
pub mod template;
pub mod widget;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use conventions::{
    BRAND_PREFIX, Conventions, DEFAULT_ICON, DOCS_PLACEHOLDER, TRAIT_NAMESPACE, TRAIT_SUFFIX,
};
pub use debug_mode::{DEBUG_BLOCK, DebugMode, DebugToggle, GuardChange, WP_CONFIG_FILE, toggle_debug};
pub use docs::{DocBlock, compose_doc_block, insert_doc_block, placeholder_count};
pub use error::{DomainError, ErrorCategory};
pub use identifiers::{DeriveOptions, IdentifierSet, derive, strip_brand_prefix};
pub use layout::ProjectLayout;
pub use registry::{parse_registry, registry_entries, render_registry};
pub use patch::{
    FragmentKind, FragmentOutcome, FragmentReport, InjectionOutcome, PatternLocator,
    SectionLocator, TraitInjector, TraitReference, TraitReport, inject_traits,
};
pub use template::{ReplacementMap, Template, TemplateName, render_template};
pub use validation::DomainValidator;
pub use widget::{
    ArtifactKind, PlannedArtifact, TraitPlan, WidgetPlan, WidgetRequest, plan_trait, plan_widget,
    widget_identifiers,
};
