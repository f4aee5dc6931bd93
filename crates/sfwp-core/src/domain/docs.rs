//! Metadata block composition for widget documentation.
//!
//! A widget's Markdown file carries a marker line; [`compose_doc_block`]
//! reads a few facts off the widget source and [`insert_doc_block`] swaps the
//! marker for a fenced JSON record that a human completes afterwards.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::conventions::{Conventions, DOCS_PLACEHOLDER};
use crate::domain::error::DomainError;
use crate::domain::identifiers::strip_brand_prefix;

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"get_title\s*\(\s*\)\s*(?::\s*\??[A-Za-z_\\]+\s*)?\{[^}]*?return\s+(?:esc_html__|__)\(\s*['"](.+?)['"]"#)
        .expect("title pattern is valid")
});

const STYLE_ACCESSOR: &str = "get_style_depends";
const SCRIPT_ACCESSOR: &str = "get_script_depends";

const TYPE_HINT: &str = "Choose Any One: 'custom', 'extended', 'forked', or 'hooked'";
const BASE_HINT: &str = "Choose Any One: 'Elementor' or 'ElementsKit'";
const HOOK_HINT: &str = "Choose Any One: 'elementor' or 'wordpress'";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundMotivation {
    pub limitations: String,
    pub motivation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(rename = "type")]
    pub kind: String,
    pub base: String,
    pub extends: String,
    pub forked_from: String,
    pub traits: Vec<String>,
    #[serde(with = "yes_no")]
    pub is_separate_style_sheet: bool,
    #[serde(rename = "is_JS_Used", with = "yes_no")]
    pub is_js_used: bool,
    pub pro_feature_hook_type: String,
    pub icon_used: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextSteps {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageContext {
    pub used_in: Vec<String>,
    pub compatible_with: Vec<String>,
}

/// The documentation record. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    pub widget_name: String,
    pub summary: String,
    pub free_features: Vec<Feature>,
    pub pro_features: Vec<Feature>,
    pub background_motivation: BackgroundMotivation,
    pub architecture: Architecture,
    pub impact: Vec<String>,
    pub next: NextSteps,
    pub usage_context: UsageContext,
}

impl DocBlock {
    /// A record with every leaf blank or holding its completion hint.
    pub fn skeleton() -> Self {
        Self {
            widget_name: String::new(),
            summary: String::new(),
            free_features: vec![Feature::default(); 2],
            pro_features: vec![Feature::default(); 2],
            background_motivation: BackgroundMotivation::default(),
            architecture: Architecture {
                kind: TYPE_HINT.into(),
                base: BASE_HINT.into(),
                extends: String::new(),
                forked_from: String::new(),
                traits: Vec::new(),
                is_separate_style_sheet: false,
                is_js_used: false,
                pro_feature_hook_type: HOOK_HINT.into(),
                icon_used: String::new(),
            },
            impact: vec![String::new(); 4],
            next: NextSteps {
                features: vec![Feature::default(); 2],
            },
            usage_context: UsageContext {
                used_in: vec![String::new(); 3],
                compatible_with: vec![String::new(); 3],
            },
        }
    }

    /// Fenced JSON block, two-space indented.
    pub fn render(&self) -> String {
        // A struct of strings, vectors and bools always serializes.
        let json = serde_json::to_string_pretty(self).unwrap_or_default();
        format!("```json\n{json}\n```")
    }
}

/// Read the documented facts off a widget source.
pub fn compose_doc_block(source: &str, conventions: &Conventions) -> DocBlock {
    let mut block = DocBlock::skeleton();

    if let Some(title) = TITLE.captures(source).and_then(|c| c.get(1)) {
        block.widget_name = strip_brand_prefix(title.as_str(), &conventions.brand_prefix).to_string();
    }

    block.architecture.traits = referenced_traits(source, conventions);
    block.architecture.is_separate_style_sheet = source.contains(STYLE_ACCESSOR);
    block.architecture.is_js_used = source.contains(SCRIPT_ACCESSOR);
    block
}

/// Every trait type name pulled in with a `use` declaration, in file order,
/// duplicates kept.
pub fn referenced_traits(source: &str, conventions: &Conventions) -> Vec<String> {
    let pattern = format!(
        r"use\s+\\?{}\\([A-Za-z0-9_]+)\s*;",
        regex::escape(&conventions.trait_namespace)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Replace the first docs marker in `markdown` with the rendered block.
pub fn insert_doc_block(markdown: &str, block: &DocBlock) -> Result<String, DomainError> {
    if !markdown.contains(DOCS_PLACEHOLDER) {
        return Err(DomainError::PlaceholderMissing {
            placeholder: DOCS_PLACEHOLDER.to_string(),
        });
    }
    Ok(markdown.replacen(DOCS_PLACEHOLDER, &block.render(), 1))
}

/// Number of docs markers in `markdown`.
pub fn placeholder_count(markdown: &str) -> usize {
    markdown.matches(DOCS_PLACEHOLDER).count()
}

mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.eq_ignore_ascii_case("yes"))
    }
}
