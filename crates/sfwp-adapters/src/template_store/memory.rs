//! In-memory template store with the bundled stubs.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use sfwp_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateName},
    error::SfwpResult,
};

use crate::stubs;

const BUNDLED_LOCATION: &str = "bundled stubs";

/// Thread-safe in-memory template store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateName, Template>>>,
    location: String,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            location: "memory".to_string(),
        }
    }

    /// Create a store holding every stub compiled into the binary.
    pub fn with_builtin() -> Self {
        let store = Self {
            location: BUNDLED_LOCATION.to_string(),
            ..Self::new()
        };
        if let Ok(mut inner) = store.inner.write() {
            for name in TemplateName::ALL {
                inner.insert(name, Template::new(name, stubs::bundled(name)));
            }
        }
        store
    }

    /// Add or replace a stub.
    pub fn insert(&self, template: Template) -> SfwpResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(template.name, template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> SfwpResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, name: TemplateName) -> SfwpResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(&name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name,
                location: self.location.clone(),
            }
            .into()
        })
    }

    fn names(&self) -> Vec<TemplateName> {
        let mut names: Vec<TemplateName> = self
            .inner
            .read()
            .map(|inner| inner.keys().copied().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}
