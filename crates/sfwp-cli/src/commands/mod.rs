//! Command handlers.
//!
//! Each handler translates CLI arguments into calls on the core services and
//! displays the results. No business logic lives here.

use std::path::PathBuf;

use sfwp_adapters::{LocalFilesystem, StubSource, ZipArchiver};
use sfwp_core::{
    application::{
        ArchiveService, DebugService, DocsService, TraitService, WidgetService,
        ports::TemplateStore,
    },
    domain::{Conventions, ProjectLayout},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli as _},
};

pub mod add_trait;
pub mod completions;
pub mod config;
pub mod create;
pub mod debug;
pub mod docs;
pub mod zip;

/// The plugin being worked on plus the settings every command shares.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub layout: ProjectLayout,
    pub conventions: Conventions,
    stubs: Option<PathBuf>,
}

impl Workspace {
    /// Workspace rooted at the current directory.
    pub fn current(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let root = std::env::current_dir().with_cli_context(|| "reading current directory")?;
        Ok(Self::at(root, global, config))
    }

    pub fn at(root: PathBuf, global: &GlobalArgs, config: &AppConfig) -> Self {
        let layout = ProjectLayout::new(&root).with_registry(&config.registry.path);
        let stubs = global
            .stubs
            .clone()
            .or_else(|| config.templates.stubs_dir.clone());
        Self {
            root,
            layout,
            conventions: config.conventions.clone(),
            stubs,
        }
    }

    fn store(&self) -> Box<dyn TemplateStore> {
        StubSource::resolve(self.stubs.as_deref()).into_store()
    }

    pub fn widgets(&self) -> WidgetService {
        WidgetService::new(self.store(), Box::new(LocalFilesystem::new()))
            .with_conventions(self.conventions.clone())
    }

    pub fn traits(&self) -> TraitService {
        TraitService::new(self.store(), Box::new(LocalFilesystem::new()))
            .with_conventions(self.conventions.clone())
    }

    pub fn docs(&self) -> DocsService {
        DocsService::new(Box::new(LocalFilesystem::new()))
            .with_conventions(self.conventions.clone())
    }

    pub fn debug(&self) -> DebugService {
        DebugService::new(Box::new(LocalFilesystem::new()))
    }

    pub fn archive(&self) -> ArchiveService {
        ArchiveService::new(Box::new(ZipArchiver::new()))
    }
}

/// `path` relative to the workspace root when possible, for display.
pub fn display_path(root: &std::path::Path, path: &std::path::Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn stubs_flag_beats_config() {
        let mut config = AppConfig::default();
        config.templates.stubs_dir = Some(PathBuf::from("from-config"));
        let global = GlobalArgs {
            stubs: Some(PathBuf::from("from-flag")),
            ..GlobalArgs::for_tests()
        };

        let ws = Workspace::at(PathBuf::from("/p"), &global, &config);
        assert_eq!(ws.stubs, Some(PathBuf::from("from-flag")));

        let ws = Workspace::at(PathBuf::from("/p"), &GlobalArgs::for_tests(), &config);
        assert_eq!(ws.stubs, Some(PathBuf::from("from-config")));
    }

    #[test]
    fn registry_path_comes_from_config() {
        let mut config = AppConfig::default();
        config.registry.path = PathBuf::from("data/traits.json");
        let ws = Workspace::at(PathBuf::from("/p"), &GlobalArgs::for_tests(), &config);
        assert_eq!(ws.layout.registry(), Path::new("/p/data/traits.json"));
    }

    #[test]
    fn paths_are_shown_relative_to_root() {
        assert_eq!(
            display_path(Path::new("/p"), Path::new("/p/widgets/card.php")),
            "widgets/card.php"
        );
        assert_eq!(display_path(Path::new("/p"), Path::new("/q/x")), "/q/x");
    }
}
