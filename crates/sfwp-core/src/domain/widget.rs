//! Generation plans for widgets and traits.
//!
//! A plan is everything needed to write a component: the identifiers, the
//! files to produce and the replacement map for their stubs. Plans are pure;
//! the services decide whether and how to write them.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::conventions::{Conventions, DEFAULT_ICON};
use crate::domain::error::DomainError;
use crate::domain::identifiers::{DeriveOptions, IdentifierSet, derive};
use crate::domain::layout::ProjectLayout;
use crate::domain::patch::TraitReference;
use crate::domain::template::{ReplacementMap, TemplateName};
use crate::domain::validation::DomainValidator;

/// Indentation joining generated calls inside method bodies.
const CALL_SEPARATOR: &str = "\n    ";

/// What the user asked to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRequest {
    pub name: String,
    pub stylesheet: bool,
    pub script: bool,
    pub readme: bool,
    pub icon: String,
    pub traits: Vec<TraitReference>,
}

impl WidgetRequest {
    /// All optional artifacts on, default icon, no traits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stylesheet: true,
            script: true,
            readme: true,
            icon: DEFAULT_ICON.to_string(),
            traits: Vec::new(),
        }
    }

    pub fn with_stylesheet(mut self, yes: bool) -> Self {
        self.stylesheet = yes;
        self
    }

    pub fn with_script(mut self, yes: bool) -> Self {
        self.script = yes;
        self
    }

    pub fn with_readme(mut self, yes: bool) -> Self {
        self.readme = yes;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_traits(mut self, traits: Vec<TraitReference>) -> Self {
        self.traits = traits;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Source,
    Stylesheet,
    Script,
    Readme,
    TraitSource,
}

impl ArtifactKind {
    pub const fn template(&self) -> TemplateName {
        match self {
            Self::Source => TemplateName::ComponentSource,
            Self::Stylesheet => TemplateName::Stylesheet,
            Self::Script => TemplateName::Script,
            Self::Readme => TemplateName::Readme,
            Self::TraitSource => TemplateName::TraitSource,
        }
    }
}

/// One file a plan will produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPlan {
    pub ids: IdentifierSet,
    /// Public widget slug (`sf_card_box`).
    pub slug: String,
    pub artifacts: Vec<PlannedArtifact>,
    pub replacements: ReplacementMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitPlan {
    pub reference: TraitReference,
    pub artifact: PlannedArtifact,
    pub replacements: ReplacementMap,
}

/// Validated identifiers of a widget name.
pub fn widget_identifiers(
    name: &str,
    conventions: &Conventions,
) -> Result<IdentifierSet, DomainError> {
    let options = DeriveOptions::widget().with_prefix(&conventions.brand_prefix);
    let ids = derive(name, &options);
    DomainValidator::validate_identifiers(name, &ids)?;
    Ok(ids)
}

/// Plan a widget: identifiers, artifact paths and stub replacements.
pub fn plan_widget(
    request: &WidgetRequest,
    layout: &ProjectLayout,
    conventions: &Conventions,
) -> Result<WidgetPlan, DomainError> {
    let ids = widget_identifiers(&request.name, conventions)?;
    DomainValidator::validate_icon(&request.icon)?;

    let slug = format!("{}{}", conventions.slug_prefix(), ids.symbol_slug);
    let file = ids.file_slug.as_str();

    let mut artifacts = vec![PlannedArtifact {
        kind: ArtifactKind::Source,
        path: layout.widget_source(file),
    }];
    if request.stylesheet {
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Stylesheet,
            path: layout.stylesheet(file),
        });
    }
    if request.script {
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Script,
            path: layout.script(file),
        });
    }
    if request.readme {
        artifacts.push(PlannedArtifact {
            kind: ArtifactKind::Readme,
            path: layout.widget_docs(file),
        });
    }

    let replacements = widget_replacements(request, &ids, &slug, conventions);
    Ok(WidgetPlan {
        ids,
        slug,
        artifacts,
        replacements,
    })
}

fn widget_replacements(
    request: &WidgetRequest,
    ids: &IdentifierSet,
    slug: &str,
    conventions: &Conventions,
) -> ReplacementMap {
    let depends = |method: &str| {
        format!(
            "public function {method}() {{\n    return [ '{}' ];\n}}",
            ids.file_slug
        )
    };

    let uses = request
        .traits
        .iter()
        .map(|t| t.use_declaration(conventions))
        .collect::<Vec<_>>()
        .join("\n");
    let controls = request
        .traits
        .iter()
        .map(TraitReference::controls_call)
        .collect::<Vec<_>>()
        .join(CALL_SEPARATOR);
    let renders = request
        .traits
        .iter()
        .map(TraitReference::render_call)
        .collect::<Vec<_>>()
        .join(CALL_SEPARATOR);

    ReplacementMap::new()
        .with("CLASSNAME", &ids.type_name)
        .with("FILENAME", &ids.file_slug)
        .with("SLUG", slug)
        .with("ICON", &request.icon)
        .with(
            "STYLE_DEPENDS",
            if request.stylesheet {
                depends("get_style_depends")
            } else {
                String::new()
            },
        )
        .with(
            "SCRIPT_DEPENDS",
            if request.script {
                depends("get_script_depends")
            } else {
                String::new()
            },
        )
        .with("TRAIT_USES", uses.clone())
        .with("TRAIT_IMPORTS", uses)
        .with("TRAIT_CONTROLS", controls)
        .with("TRAIT_RENDER", renders)
        .with("WIDGET_NAME", &ids.display_name)
}

/// Plan a standalone trait source file.
pub fn plan_trait(name: &str, layout: &ProjectLayout) -> Result<TraitPlan, DomainError> {
    let reference = TraitReference::parse(name)?;
    let ids = reference.identifiers();
    let artifact = PlannedArtifact {
        kind: ArtifactKind::TraitSource,
        path: layout.trait_source(&ids.file_slug),
    };
    let replacements = ReplacementMap::new()
        .with("TRAITNAME", &ids.type_name)
        .with("TRAITSLUG", &ids.symbol_slug);
    Ok(TraitPlan {
        reference,
        artifact,
        replacements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        ProjectLayout::new("/p")
    }

    #[test]
    fn full_widget_plan() {
        let request = WidgetRequest::new("card box")
            .with_traits(TraitReference::parse_list(["card", "icon list"]).unwrap());
        let plan = plan_widget(&request, &layout(), &Conventions::default()).unwrap();

        assert_eq!(plan.slug, "sf_card_box");
        assert_eq!(plan.artifacts.len(), 4);

        let r = &plan.replacements;
        assert_eq!(r.get("CLASSNAME"), Some("CardBox"));
        assert_eq!(r.get("FILENAME"), Some("card-box"));
        assert_eq!(r.get("SLUG"), Some("sf_card_box"));
        assert_eq!(r.get("ICON"), Some("eicon-star"));
        assert_eq!(r.get("WIDGET_NAME"), Some("SF Card Box"));
        assert_eq!(
            r.get("STYLE_DEPENDS"),
            Some("public function get_style_depends() {\n    return [ 'card-box' ];\n}")
        );
        assert_eq!(
            r.get("TRAIT_CONTROLS"),
            Some("$this->register_card_controls();\n    $this->register_icon_list_controls();")
        );
        assert_eq!(
            r.get("TRAIT_RENDER"),
            Some("$this->render_card();\n    $this->render_icon_list();")
        );
        assert_eq!(r.get("TRAIT_USES"), r.get("TRAIT_IMPORTS"));
        assert!(r.get("TRAIT_USES").unwrap().contains("\\IconListTrait;"));
    }

    #[test]
    fn skipped_artifacts_blank_their_dependencies() {
        let request = WidgetRequest::new("Card")
            .with_stylesheet(false)
            .with_script(false)
            .with_readme(false);
        let plan = plan_widget(&request, &layout(), &Conventions::default()).unwrap();

        assert_eq!(plan.artifacts.len(), 1);
        assert_eq!(plan.artifacts[0].kind, ArtifactKind::Source);
        assert_eq!(plan.replacements.get("STYLE_DEPENDS"), Some(""));
        assert_eq!(plan.replacements.get("SCRIPT_DEPENDS"), Some(""));
        assert_eq!(plan.replacements.get("TRAIT_USES"), Some(""));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let c = Conventions::default();
        assert!(plan_widget(&WidgetRequest::new("  "), &layout(), &c).is_err());
        assert!(plan_widget(&WidgetRequest::new("x").with_icon("a\"b"), &layout(), &c).is_err());
    }

    #[test]
    fn brand_prefix_comes_from_conventions() {
        let c = Conventions {
            brand_prefix: "AC".into(),
            ..Conventions::default()
        };
        let plan = plan_widget(&WidgetRequest::new("card"), &layout(), &c).unwrap();
        assert_eq!(plan.slug, "ac_card");
        assert_eq!(plan.replacements.get("WIDGET_NAME"), Some("AC Card"));
    }

    #[test]
    fn trait_plan() {
        let plan = plan_trait("IconListTrait", &layout()).unwrap();
        assert_eq!(
            plan.artifact.path,
            PathBuf::from("/p/core/helpers/traits/icon-list-trait.php")
        );
        assert_eq!(plan.replacements.get("TRAITNAME"), Some("IconListTrait"));
        assert_eq!(plan.replacements.get("TRAITSLUG"), Some("icon_list"));
    }
}
