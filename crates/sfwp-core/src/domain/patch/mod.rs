//! Structural, idempotent patching of widget sources.
//!
//! The patch engine never parses PHP. It finds insertion points through a
//! [`SectionLocator`] (regex based today) and only ever *adds* text:
//!
//! ```text
//! TraitReference ──► fragments (use / controls call / render call)
//!                          │
//!        SectionLocator ──►│ where does each fragment go?
//!                          ▼
//!                   TraitInjector ──► InjectionOutcome { text, changed, reports }
//! ```
//!
//! Presence is checked by exact substring before every insertion, so running
//! the same injection twice leaves the file untouched the second time.

mod fragments;
mod injector;
mod locator;

pub use fragments::TraitReference;
pub use injector::{
    CONTROLS_METHOD, DEFAULT_INDENT, FragmentKind, FragmentOutcome, FragmentReport,
    InjectionOutcome, RENDER_METHODS, TraitInjector, TraitReport, inject_traits,
};
pub use locator::{MethodBody, PatternLocator, SectionLocator};
