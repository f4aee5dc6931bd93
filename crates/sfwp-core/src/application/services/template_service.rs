//! Template Service - stub lookup and rendering.
//!
//! Loads stubs from the configured store and renders them. Writing is
//! unconditional: existence and overwrite policy belong to the caller.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{ReplacementMap, TemplateName},
    error::SfwpResult,
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Render a stub to a string.
    #[instrument(skip(self, replacements), fields(store = %self.store.location()))]
    pub fn render(&self, name: TemplateName, replacements: &ReplacementMap) -> SfwpResult<String> {
        let template = self.store.get(name)?;
        debug!(placeholders = replacements.len(), "Rendering stub");
        Ok(template.render(replacements))
    }

    /// Render a stub and write it to `destination`, creating missing parent
    /// directories. Overwrites without asking.
    #[instrument(skip(self, replacements), fields(destination = %destination.display()))]
    pub fn render_to_file(
        &self,
        name: TemplateName,
        replacements: &ReplacementMap,
        destination: &Path,
    ) -> SfwpResult<()> {
        let content = self.render(name, replacements)?;
        self.write(destination, &content)
    }

    /// Names the configured store serves.
    pub fn names(&self) -> Vec<TemplateName> {
        self.store.names()
    }

    /// Where stubs are loaded from.
    pub fn location(&self) -> String {
        self.store.location()
    }

    pub(crate) fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub(crate) fn write(&self, destination: &Path, content: &str) -> SfwpResult<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(destination, content)
    }
}
