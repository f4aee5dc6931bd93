//! Stubs read from a directory on disk.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use sfwp_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateName},
    error::SfwpResult,
};

/// Reads `<dir>/<stub file name>` on every lookup.
///
/// Stubs are not cached, so edits to the directory are picked up by the next
/// command without restarting anything.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stub_path(&self, name: TemplateName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl TemplateStore for DirectoryStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, name: TemplateName) -> SfwpResult<Template> {
        let path = self.stub_path(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "stub loaded");
                Ok(Template::new(name, content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::TemplateNotFound {
                    name,
                    location: self.location(),
                }
                .into())
            }
            Err(e) => Err(ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read stub: {}", e),
            }
            .into()),
        }
    }

    fn names(&self) -> Vec<TemplateName> {
        TemplateName::ALL
            .into_iter()
            .filter(|name| self.stub_path(*name).is_file())
            .collect()
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfwp_core::error::SfwpError;
    use tempfile::TempDir;

    #[test]
    fn reads_stub_by_file_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("style.css.stub"), ".{{FILENAME}} {}\n").unwrap();

        let store = DirectoryStore::new(dir.path());
        let template = store.get(TemplateName::Stylesheet).unwrap();
        assert_eq!(template.content, ".{{FILENAME}} {}\n");
        assert_eq!(store.names(), vec![TemplateName::Stylesheet]);
    }

    #[test]
    fn missing_stub_is_template_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());

        let err = store.get(TemplateName::TraitSource).unwrap_err();
        match err {
            SfwpError::Application(ApplicationError::TemplateNotFound { name, location }) => {
                assert_eq!(name, TemplateName::TraitSource);
                assert_eq!(location, dir.path().display().to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
