//! Trait Service - trait sources, injection into widgets, and the registry.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
        services::TemplateService,
    },
    domain::{
        Conventions, FragmentOutcome, InjectionOutcome, ProjectLayout, TraitInjector, TraitPlan,
        TraitReference, parse_registry, plan_trait, registry_entries, render_registry,
        widget_identifiers,
    },
    error::SfwpResult,
};

/// Result of injecting traits into one widget file.
#[derive(Debug, Clone)]
pub struct InjectionReport {
    pub path: PathBuf,
    pub outcome: InjectionOutcome,
}

impl InjectionReport {
    /// Whether the widget file was rewritten.
    pub fn written(&self) -> bool {
        self.outcome.changed
    }
}

/// Service for trait operations.
pub struct TraitService {
    templates: TemplateService,
    conventions: Conventions,
}

impl TraitService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates: TemplateService::new(store, filesystem),
            conventions: Conventions::default(),
        }
    }

    pub fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    pub fn plan(&self, name: &str, layout: &ProjectLayout) -> SfwpResult<TraitPlan> {
        Ok(plan_trait(name, layout)?)
    }

    /// The trait source path, if it already exists.
    pub fn conflict(&self, plan: &TraitPlan) -> Option<PathBuf> {
        let path = &plan.artifact.path;
        self.templates
            .filesystem()
            .exists(path)
            .then(|| path.clone())
    }

    /// Render `trait-source` into `core/helpers/traits/<slug>-trait.php`.
    #[instrument(skip_all, fields(name = %name, overwrite = allow_overwrite))]
    pub fn create_trait(
        &self,
        name: &str,
        layout: &ProjectLayout,
        allow_overwrite: bool,
    ) -> SfwpResult<TraitPlan> {
        let plan = self.plan(name, layout)?;
        if let Some(existing) = self.conflict(&plan) {
            if !allow_overwrite {
                return Err(ApplicationError::AlreadyExists {
                    paths: vec![existing],
                }
                .into());
            }
        }

        self.templates.render_to_file(
            plan.artifact.kind.template(),
            &plan.replacements,
            &plan.artifact.path,
        )?;
        info!(trait_name = %plan.reference.type_name(), "Trait created");
        Ok(plan)
    }

    /// Inject `traits` into the widget called `widget_name`.
    ///
    /// The file is written only when at least one fragment was inserted.
    #[instrument(skip_all, fields(widget = %widget_name, traits = traits.len()))]
    pub fn inject(
        &self,
        layout: &ProjectLayout,
        widget_name: &str,
        traits: &[TraitReference],
    ) -> SfwpResult<InjectionReport> {
        let ids = widget_identifiers(widget_name, &self.conventions)?;
        let path = layout.widget_source(&ids.file_slug);
        let fs = self.templates.filesystem();

        if !fs.exists(&path) {
            return Err(ApplicationError::SourceMissing { path }.into());
        }

        let source = fs.read_to_string(&path)?;
        let outcome = TraitInjector::new(self.conventions.clone()).inject(&source, traits);

        for report in &outcome.reports {
            for fragment in &report.fragments {
                match fragment.outcome {
                    FragmentOutcome::TargetNotFound => {
                        warn!(trait_name = %report.trait_name, "{fragment}")
                    }
                    _ => debug!(trait_name = %report.trait_name, "{fragment}"),
                }
            }
        }

        if outcome.changed {
            fs.write_file(&path, &outcome.text)?;
            info!(inserted = outcome.inserted(), "Traits injected");
        } else {
            info!("Nothing to inject, widget left untouched");
        }

        Ok(InjectionReport { path, outcome })
    }

    /// Rebuild the registry from the traits directory and write it. A registry
    /// that already lists the same names is left alone.
    #[instrument(skip_all, fields(registry = %layout.registry().display()))]
    pub fn sync_registry(&self, layout: &ProjectLayout) -> SfwpResult<Vec<String>> {
        let fs = self.templates.filesystem();
        let dir = layout.traits_dir();

        let files = if fs.exists(&dir) {
            fs.list_files(&dir)?
        } else {
            Vec::new()
        };
        let names = registry_entries(
            files
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy()),
        );

        let registry = layout.registry();
        if fs.exists(registry) {
            let current = fs.read_to_string(registry)?;
            // An unreadable registry is simply regenerated.
            if parse_registry(&current).ok().as_deref() == Some(names.as_slice()) {
                debug!(count = names.len(), "Trait registry already up to date");
                return Ok(names);
            }
        }

        let json = render_registry(&names).map_err(|e| ApplicationError::RegistryError {
            path: registry.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.templates.write(registry, &json)?;

        debug!(count = names.len(), "Trait registry synced");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::Template;
    use crate::error::SfwpError;

    const WIDGET: &str = "<?php\nclass CardBox extends Widget_Base {\n    protected function register_controls() {\n        $x = 1;\n    }\n    protected function render() {\n        echo 1;\n    }\n}\n";

    fn trait_store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|name| {
            Ok(Template::new(
                name,
                "trait {{TRAITNAME}} {\n    function render_{{TRAITSLUG}}() {}\n}\n",
            ))
        });
        store.expect_location().returning(|| "memory".to_string());
        store
    }

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/p")
    }

    #[test]
    fn create_trait_renders_into_traits_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("/p/core/helpers/traits")))
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(
                eq(PathBuf::from("/p/core/helpers/traits/icon-list-trait.php")),
                eq("trait IconListTrait {\n    function render_icon_list() {}\n}\n".to_string()),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let plan = service.create_trait("icon list", &layout(), false).unwrap();
        assert_eq!(plan.reference.type_name(), "IconListTrait");
    }

    #[test]
    fn create_trait_refuses_to_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let err = service.create_trait("card", &layout(), false).unwrap_err();
        assert!(matches!(
            err,
            SfwpError::Application(ApplicationError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn inject_writes_patched_widget() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .with(eq(PathBuf::from("/p/widgets/card-box.php")))
            .returning(|_| Ok(WIDGET.to_string()));
        fs.expect_write_file()
            .times(1)
            .returning(|_, content| {
                assert!(content.contains("$this->register_card_controls();"));
                assert!(content.contains("$this->render_card();"));
                Ok(())
            });

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let traits = TraitReference::parse_list(["card"]).unwrap();
        let report = service.inject(&layout(), "Card Box", &traits).unwrap();
        assert!(report.written());
        assert_eq!(report.outcome.inserted(), 3);
    }

    #[test]
    fn inject_without_changes_does_not_write() {
        let traits = TraitReference::parse_list(["card"]).unwrap();
        let patched = crate::domain::inject_traits(WIDGET, &traits).text;

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(patched.clone()));
        fs.expect_write_file().never();

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let report = service.inject(&layout(), "card-box", &traits).unwrap();
        assert!(!report.written());
    }

    #[test]
    fn inject_into_missing_widget_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let traits = TraitReference::parse_list(["card"]).unwrap();
        let err = service.inject(&layout(), "ghost", &traits).unwrap_err();
        match err {
            SfwpError::Application(ApplicationError::SourceMissing { path }) => {
                assert_eq!(path, Path::new("/p/widgets/ghost.php"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sync_registry_writes_sorted_names() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files().returning(|dir| {
            Ok(vec![
                dir.join("icon-list-trait.php"),
                dir.join("card-trait.php"),
                dir.join("notes.txt"),
            ])
        });
        fs.expect_read_to_string()
            .with(eq(PathBuf::from("/p/traits.json")))
            .returning(|_| Ok("[\n  \"CardTrait\"\n]\n".to_string()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(
                eq(PathBuf::from("/p/traits.json")),
                eq("[\n  \"CardTrait\",\n  \"IconListTrait\"\n]\n".to_string()),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        let names = service.sync_registry(&layout()).unwrap();
        assert_eq!(names, ["CardTrait", "IconListTrait"]);
    }

    #[test]
    fn sync_registry_without_traits_dir_writes_empty_list() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_list_files().never();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(always(), eq("[]\n".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        assert!(service.sync_registry(&layout()).unwrap().is_empty());
    }

    #[test]
    fn sync_registry_leaves_matching_registry_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files()
            .returning(|dir| Ok(vec![dir.join("card-trait.php")]));
        // Same names, different formatting.
        fs.expect_read_to_string()
            .with(eq(PathBuf::from("/p/traits.json")))
            .returning(|_| Ok("[\"CardTrait\"]".to_string()));
        fs.expect_write_file().never();

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        assert_eq!(service.sync_registry(&layout()).unwrap(), ["CardTrait"]);
    }

    #[test]
    fn sync_registry_rewrites_unreadable_registry() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files()
            .returning(|dir| Ok(vec![dir.join("card-trait.php")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(always(), eq("[\n  \"CardTrait\"\n]\n".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TraitService::new(Box::new(trait_store()), Box::new(fs));
        assert_eq!(service.sync_registry(&layout()).unwrap(), ["CardTrait"]);
    }
}
