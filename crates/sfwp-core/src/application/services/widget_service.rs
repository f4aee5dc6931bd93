//! Widget Service - generates a widget's files.
//!
//! Every artifact is rendered in memory before the first write, so a missing
//! stub or an invalid name never leaves a half-generated widget behind.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
        services::TemplateService,
    },
    domain::{Conventions, ProjectLayout, WidgetPlan, WidgetRequest, plan_widget},
    error::SfwpResult,
};

/// Service for widget generation.
pub struct WidgetService {
    templates: TemplateService,
    conventions: Conventions,
}

impl WidgetService {
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

    /// Identifiers, artifact paths and replacements for `request`.
    pub fn plan(&self, request: &WidgetRequest, layout: &ProjectLayout) -> SfwpResult<WidgetPlan> {
        Ok(plan_widget(request, layout, &self.conventions)?)
    }

    /// Planned files that already exist.
    pub fn conflicts(&self, plan: &WidgetPlan) -> Vec<PathBuf> {
        plan.artifacts
            .iter()
            .filter(|a| self.templates.filesystem().exists(&a.path))
            .map(|a| a.path.clone())
            .collect()
    }

    /// Generate every selected artifact.
    ///
    /// Fails with `AlreadyExists` when any planned file exists and
    /// `allow_overwrite` is false; nothing is written in that case.
    #[instrument(skip_all, fields(widget = %request.name, overwrite = allow_overwrite))]
    pub fn create(
        &self,
        request: &WidgetRequest,
        layout: &ProjectLayout,
        allow_overwrite: bool,
    ) -> SfwpResult<WidgetPlan> {
        let plan = self.plan(request, layout)?;

        let existing = self.conflicts(&plan);
        if !existing.is_empty() && !allow_overwrite {
            return Err(ApplicationError::AlreadyExists { paths: existing }.into());
        }

        let rendered = plan
            .artifacts
            .iter()
            .map(|a| {
                self.templates
                    .render(a.kind.template(), &plan.replacements)
                    .map(|content| (a.path.clone(), content))
            })
            .collect::<SfwpResult<Vec<_>>>()?;

        for (path, content) in &rendered {
            self.templates.write(path, content)?;
        }

        info!(
            class = %plan.ids.type_name,
            files = rendered.len(),
            "Widget created"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::{ArtifactKind, Template, TraitReference};
    use crate::error::SfwpError;

    fn echo_store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .returning(|name| Ok(Template::new(name, format!("{name}:{{{{CLASSNAME}}}}"))));
        store.expect_location().returning(|| "memory".to_string());
        store
    }

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/p")
    }

    #[test]
    fn plan_lists_selected_artifacts() {
        let service = WidgetService::new(Box::new(echo_store()), Box::new(MockFilesystem::new()));
        let request = WidgetRequest::new("card box").with_script(false);
        let plan = service.plan(&request, &layout()).unwrap();

        let kinds: Vec<_> = plan.artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            [ArtifactKind::Source, ArtifactKind::Stylesheet, ArtifactKind::Readme]
        );
    }

    #[test]
    fn create_writes_every_artifact() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(4)
            .returning(|path, content| {
                assert!(content.ends_with(":CardBox"), "{}: {content}", path.display());
                Ok(())
            });

        let service = WidgetService::new(Box::new(echo_store()), Box::new(fs));
        let request = WidgetRequest::new("card box")
            .with_traits(TraitReference::parse_list(["card"]).unwrap());
        let plan = service.create(&request, &layout(), false).unwrap();
        assert_eq!(plan.ids.type_name, "CardBox");
    }

    #[test]
    fn existing_files_block_creation_without_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/p/widgets/card.php"));
        fs.expect_write_file().never();

        let service = WidgetService::new(Box::new(echo_store()), Box::new(fs));
        let err = service
            .create(&WidgetRequest::new("card"), &layout(), false)
            .unwrap_err();

        match err {
            SfwpError::Application(ApplicationError::AlreadyExists { paths }) => {
                assert_eq!(paths, [PathBuf::from("/p/widgets/card.php")]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overwrite_allows_existing_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = WidgetService::new(Box::new(echo_store()), Box::new(fs));
        let request = WidgetRequest::new("card")
            .with_stylesheet(false)
            .with_script(false)
            .with_readme(false);
        assert!(service.create(&request, &layout(), true).is_ok());
    }

    #[test]
    fn missing_stub_writes_nothing() {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|name| {
            if name == crate::domain::TemplateName::Readme {
                Err(ApplicationError::TemplateNotFound {
                    name,
                    location: "stubs".into(),
                }
                .into())
            } else {
                Ok(Template::new(name, "x"))
            }
        });
        store.expect_location().returning(|| "stubs".to_string());

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().never();

        let service = WidgetService::new(Box::new(store), Box::new(fs));
        assert!(service.create(&WidgetRequest::new("card"), &layout(), false).is_err());
    }
}
