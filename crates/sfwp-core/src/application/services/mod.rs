//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a widget" or "inject traits".

pub mod archive_service;
pub mod debug_service;
pub mod docs_service;
pub mod template_service;
pub mod trait_service;
pub mod widget_service;

pub use archive_service::ArchiveService;
pub use debug_service::{DebugReport, DebugService};
pub use docs_service::{DocsReport, DocsService};
pub use template_service::TemplateService;
pub use trait_service::{InjectionReport, TraitService};
pub use widget_service::WidgetService;
