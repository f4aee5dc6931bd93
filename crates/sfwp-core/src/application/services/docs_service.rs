//! Docs Service - fills a widget's documentation marker.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        Conventions, DocBlock, ProjectLayout, compose_doc_block, insert_doc_block,
        placeholder_count, widget_identifiers,
    },
    error::SfwpResult,
};

/// What `generate` wrote.
#[derive(Debug, Clone)]
pub struct DocsReport {
    pub source: PathBuf,
    pub doc: PathBuf,
    pub block: DocBlock,
    /// Markers still present after the first one was replaced.
    pub remaining_placeholders: usize,
}

pub struct DocsService {
    filesystem: Box<dyn Filesystem>,
    conventions: Conventions,
}

impl DocsService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            conventions: Conventions::default(),
        }
    }

    pub fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Compose the metadata block for `widget_name` and put it in place of
    /// the marker in its documentation file.
    ///
    /// Nothing is written unless every step succeeds.
    #[instrument(skip_all, fields(widget = %widget_name))]
    pub fn generate(&self, layout: &ProjectLayout, widget_name: &str) -> SfwpResult<DocsReport> {
        let ids = widget_identifiers(widget_name, &self.conventions)?;
        let source = layout.widget_source(&ids.file_slug);
        let doc = layout.widget_docs(&ids.file_slug);

        if !self.filesystem.exists(&source) {
            return Err(ApplicationError::SourceMissing { path: source }.into());
        }
        if !self.filesystem.exists(&doc) {
            return Err(ApplicationError::DocMissing { path: doc }.into());
        }

        let code = self.filesystem.read_to_string(&source)?;
        let markdown = self.filesystem.read_to_string(&doc)?;

        let block = compose_doc_block(&code, &self.conventions);
        let updated = insert_doc_block(&markdown, &block)?;
        let remaining_placeholders = placeholder_count(&updated);
        if remaining_placeholders > 0 {
            warn!(
                remaining = remaining_placeholders,
                "Documentation has more than one marker, only the first was replaced"
            );
        }

        self.filesystem.write_file(&doc, &updated)?;
        info!(doc = %doc.display(), "Documentation metadata inserted");

        Ok(DocsReport {
            source,
            doc,
            block,
            remaining_placeholders,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{DOCS_PLACEHOLDER, DomainError};
    use crate::error::SfwpError;

    const SOURCE: &str = "<?php\nclass CardBox {\n    use \\SFWPStudio\\Core\\Helpers\\Traits\\CardTrait;\n    public function get_title() {\n        return __( 'SF Card Box', 'sfwp' );\n    }\n}\n";

    fn fs_with(markdown: String) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .with(eq(PathBuf::from("/p/widgets/card-box.php")))
            .returning(|_| Ok(SOURCE.to_string()));
        fs.expect_read_to_string()
            .with(eq(PathBuf::from("/p/docs/widgets/card-box.md")))
            .returning(move |_| Ok(markdown.clone()));
        fs
    }

    #[test]
    fn generate_replaces_marker() {
        let mut fs = fs_with(format!("# Card Box\n\n{DOCS_PLACEHOLDER}\n"));
        fs.expect_write_file()
            .times(1)
            .returning(|path, content| {
                assert!(path.ends_with("docs/widgets/card-box.md"));
                assert!(content.contains("\"widget_name\": \"Card Box\""));
                assert!(content.contains("\"CardTrait\""));
                Ok(())
            });

        let report = DocsService::new(Box::new(fs))
            .generate(&ProjectLayout::new("/p"), "Card Box")
            .unwrap();
        assert_eq!(report.block.widget_name, "Card Box");
        assert_eq!(report.block.architecture.traits, ["CardTrait"]);
        assert_eq!(report.remaining_placeholders, 0);
    }

    #[test]
    fn missing_marker_fails_without_writing() {
        let mut fs = fs_with("# Card Box\n".to_string());
        fs.expect_write_file().never();

        let err = DocsService::new(Box::new(fs))
            .generate(&ProjectLayout::new("/p"), "card box")
            .unwrap_err();
        assert!(matches!(
            err,
            SfwpError::Domain(DomainError::PlaceholderMissing { .. })
        ));
    }

    #[test]
    fn missing_doc_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.extension().is_some_and(|e| e == "php"));
        fs.expect_write_file().never();

        let err = DocsService::new(Box::new(fs))
            .generate(&ProjectLayout::new("/p"), "card box")
            .unwrap_err();
        assert!(matches!(
            err,
            SfwpError::Application(ApplicationError::DocMissing { .. })
        ));
    }

    #[test]
    fn missing_source_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let err = DocsService::new(Box::new(fs))
            .generate(&ProjectLayout::new("/p"), "card box")
            .unwrap_err();
        assert!(matches!(
            err,
            SfwpError::Application(ApplicationError::SourceMissing { .. })
        ));
    }
}
