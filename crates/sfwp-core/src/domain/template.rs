//! Stub templates and their rendering.
//!
//! # Stub format
//!
//! Stubs are plain text with two kinds of markers:
//!
//! - `{{NAME}}` placeholders, replaced from a [`ReplacementMap`]. The empty
//!   marker `{{}}` is an explicit "nothing here" and always renders to `""`.
//! - `/*__tag__*/` directive comments. Tags are authoring hints only and are
//!   never evaluated. A line holding nothing but a directive disappears
//!   together with its newline; inline directives are cut out of their line.
//!
//! Rendering is a pure function of the stub text and the map.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DIRECTIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*/\*__[a-z0-9_-]+__\*/[ \t]*(?:\r?\n|$)")
        .expect("directive line pattern is valid")
});

static DIRECTIVE_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/\*__[a-z0-9_-]+__\*/").expect("inline directive pattern is valid")
});

// ── TemplateName ─────────────────────────────────────────────────────────────

/// Logical name of every stub the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    ComponentSource,
    Stylesheet,
    Script,
    Readme,
    TraitSource,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        Self::ComponentSource,
        Self::Stylesheet,
        Self::Script,
        Self::Readme,
        Self::TraitSource,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ComponentSource => "component-source",
            Self::Stylesheet => "stylesheet",
            Self::Script => "script",
            Self::Readme => "readme",
            Self::TraitSource => "trait-source",
        }
    }

    /// File name of the stub inside a stubs directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::ComponentSource => "widget.php.stub",
            Self::Stylesheet => "style.css.stub",
            Self::Script => "script.js.stub",
            Self::Readme => "readme.md.stub",
            Self::TraitSource => "trait.php.stub",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// A loaded stub: its logical name and raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: TemplateName,
    pub content: String,
}

impl Template {
    pub fn new(name: TemplateName, content: impl Into<String>) -> Self {
        Self {
            name,
            content: content.into(),
        }
    }

    /// Render this stub with `replacements`.
    pub fn render(&self, replacements: &ReplacementMap) -> String {
        render_template(&self.content, replacements)
    }
}

// ── ReplacementMap ───────────────────────────────────────────────────────────

/// Placeholder name → value.
///
/// A `BTreeMap` keeps iteration (and therefore debug output) stable; the
/// substitution result does not depend on order because placeholder names
/// never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    values: BTreeMap<String, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self and returning the updated map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Render stub text.
///
/// 1. Every `{{KEY}}` of the map is replaced by its value.
/// 2. Leftover `{{}}` markers are removed.
/// 3. Lines made only of a directive comment are removed with their newline.
/// 4. Remaining inline directives are cut out.
///
/// Unknown placeholders (`{{OTHER}}`) stay as-is.
pub fn render_template(source: &str, replacements: &ReplacementMap) -> String {
    let mut out = source.to_string();

    for (key, value) in replacements.iter() {
        let placeholder = format!("{{{{{key}}}}}");
        out = out.replace(&placeholder, value);
    }

    out = out.replace("{{}}", "");
    out = DIRECTIVE_LINE.replace_all(&out, "").into_owned();
    DIRECTIVE_INLINE.replace_all(&out, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let map = ReplacementMap::new()
            .with("CLASSNAME", "CardBox")
            .with("FILENAME", "card-box");
        let out = render_template("class {{CLASSNAME}} // {{FILENAME}} {{CLASSNAME}}", &map);
        assert_eq!(out, "class CardBox // card-box CardBox");
    }

    #[test]
    fn empty_value_renders_nothing() {
        let map = ReplacementMap::new().with("STYLE_DEPENDS", "");
        assert_eq!(render_template("a{{STYLE_DEPENDS}}b", &map), "ab");
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        let out = render_template("{{ICON}}", &ReplacementMap::new());
        assert_eq!(out, "{{ICON}}");
    }

    #[test]
    fn empty_marker_is_removed() {
        assert_eq!(render_template("a,{{}}\n", &ReplacementMap::new()), "a,\n");
    }

    #[test]
    fn template_without_markers_is_unchanged() {
        let stub = ".card { display: flex; }\n\n/* plain comment */\n";
        assert_eq!(render_template(stub, &ReplacementMap::new()), stub);
    }

    #[test]
    fn directive_lines_vanish_without_blank_scaffolding() {
        let stub = "line one\n    /*__optional-css__*/\nline two\n";
        assert_eq!(
            render_template(stub, &ReplacementMap::new()),
            "line one\nline two\n"
        );
    }

    #[test]
    fn inline_directives_are_cut_from_their_line() {
        let stub = "return [ /*__deps__*/'card' ];\nnext();\n";
        assert_eq!(
            render_template(stub, &ReplacementMap::new()),
            "return [ 'card' ];\nnext();\n"
        );
    }

    #[test]
    fn directive_on_last_line_without_newline() {
        let stub = "keep\n\t/*__END__*/";
        assert_eq!(render_template(stub, &ReplacementMap::new()), "keep\n");
    }

    #[test]
    fn rendering_is_pure() {
        let map = ReplacementMap::new().with("SLUG", "sf_card");
        let stub = "{{SLUG}} /*__x__*/\n";
        assert_eq!(render_template(stub, &map), render_template(stub, &map));
    }

    #[test]
    fn replacement_map_collects_from_pairs() {
        let map: ReplacementMap = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("B"), Some("2"));
    }
}
