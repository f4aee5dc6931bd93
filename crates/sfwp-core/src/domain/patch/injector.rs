use std::fmt;

use serde::Serialize;

use crate::domain::conventions::Conventions;
use crate::domain::patch::fragments::TraitReference;
use crate::domain::patch::locator::{PatternLocator, SectionLocator};

/// Indentation used when none can be detected.
pub const DEFAULT_INDENT: &str = "    ";

/// Method receiving the controls-registration calls.
pub const CONTROLS_METHOD: &str = "register_controls";

/// Accepted render method names; the first one present in the file is used.
pub const RENDER_METHODS: [&str; 2] = ["render", "render_raw"];

/// Which of the three per-trait fragments a report line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    UseDeclaration,
    ControlsCall,
    RenderCall,
}

impl FragmentKind {
    fn target(&self) -> &'static str {
        match self {
            Self::UseDeclaration => "class body",
            Self::ControlsCall => "register_controls()",
            Self::RenderCall => "render()",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentOutcome {
    Inserted,
    AlreadyPresent,
    TargetNotFound,
}

impl fmt::Display for FragmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inserted => "inserted",
            Self::AlreadyPresent => "already present",
            Self::TargetNotFound => "target not found",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentReport {
    pub kind: FragmentKind,
    pub fragment: String,
    pub outcome: FragmentOutcome,
}

impl fmt::Display for FragmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            FragmentOutcome::Inserted => write!(f, "Injected {}", self.fragment),
            FragmentOutcome::AlreadyPresent => {
                write!(f, "Skipped {} (already present)", self.fragment)
            }
            FragmentOutcome::TargetNotFound => write!(
                f,
                "Skipped {} ({} not found)",
                self.fragment,
                self.kind.target()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitReport {
    pub trait_name: String,
    pub fragments: Vec<FragmentReport>,
}

impl TraitReport {
    pub fn outcome_of(&self, kind: FragmentKind) -> Option<FragmentOutcome> {
        self.fragments
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.outcome)
    }

    pub fn inserted(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| f.outcome == FragmentOutcome::Inserted)
            .count()
    }
}

/// Result of one injection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionOutcome {
    pub text: String,
    pub changed: bool,
    pub reports: Vec<TraitReport>,
}

impl InjectionOutcome {
    pub fn inserted(&self) -> usize {
        self.reports.iter().map(TraitReport::inserted).sum()
    }

    pub fn count(&self, outcome: FragmentOutcome) -> usize {
        self.reports
            .iter()
            .flat_map(|r| &r.fragments)
            .filter(|f| f.outcome == outcome)
            .count()
    }
}

/// Lines inserted during the current run, per insertion point.
///
/// Later traits are placed after these so the final order matches the
/// order of the trait list.
#[derive(Default)]
struct Inserted {
    uses: Vec<String>,
    controls: Vec<String>,
    renders: Vec<String>,
}

/// Inserts trait fragments into a widget class.
#[derive(Debug, Clone, Default)]
pub struct TraitInjector<L = PatternLocator> {
    locator: L,
    conventions: Conventions,
}

impl TraitInjector<PatternLocator> {
    pub fn new(conventions: Conventions) -> Self {
        Self::with_locator(PatternLocator, conventions)
    }
}

impl<L: SectionLocator> TraitInjector<L> {
    pub fn with_locator(locator: L, conventions: Conventions) -> Self {
        Self {
            locator,
            conventions,
        }
    }

    /// Apply every trait, in order, to one evolving copy of `source`.
    pub fn inject(&self, source: &str, traits: &[TraitReference]) -> InjectionOutcome {
        let mut text = source.to_string();
        let eol = line_ending(source);
        let mut seen = Inserted::default();
        let mut reports = Vec::with_capacity(traits.len());

        for reference in traits {
            let use_decl = reference.use_declaration(&self.conventions);
            let controls = reference.controls_call();
            let render = reference.render_call();

            let fragments = vec![
                FragmentReport {
                    kind: FragmentKind::UseDeclaration,
                    outcome: self.insert_use(&mut text, &use_decl, eol, &mut seen.uses),
                    fragment: use_decl,
                },
                FragmentReport {
                    kind: FragmentKind::ControlsCall,
                    outcome: self.insert_call(
                        &mut text,
                        &[CONTROLS_METHOD],
                        &controls,
                        eol,
                        &mut seen.controls,
                    ),
                    fragment: controls,
                },
                FragmentReport {
                    kind: FragmentKind::RenderCall,
                    outcome: self.insert_call(
                        &mut text,
                        &RENDER_METHODS,
                        &render,
                        eol,
                        &mut seen.renders,
                    ),
                    fragment: render,
                },
            ];

            reports.push(TraitReport {
                trait_name: reference.type_name().to_string(),
                fragments,
            });
        }

        let changed = text != source;
        InjectionOutcome {
            text,
            changed,
            reports,
        }
    }

    fn insert_use(
        &self,
        text: &mut String,
        declaration: &str,
        eol: &str,
        earlier: &mut Vec<String>,
    ) -> FragmentOutcome {
        if text.contains(declaration) {
            return FragmentOutcome::AlreadyPresent;
        }
        let Some(start) = self.locator.class_body_start(text) else {
            return FragmentOutcome::TargetNotFound;
        };

        let at = skip_inserted(text, start, earlier);
        let line = format!("{DEFAULT_INDENT}{declaration}{eol}");
        text.insert_str(at, &line);
        earlier.push(line);
        FragmentOutcome::Inserted
    }

    fn insert_call(
        &self,
        text: &mut String,
        methods: &[&str],
        call: &str,
        eol: &str,
        earlier: &mut Vec<String>,
    ) -> FragmentOutcome {
        let Some(method) = self.locator.method_body(text, methods) else {
            return FragmentOutcome::TargetNotFound;
        };
        let range = method.body;
        let body = &text[range.clone()];
        if body.contains(call) {
            return FragmentOutcome::AlreadyPresent;
        }

        let indent = detect_indent(body);
        match body.find('\n') {
            // Statements start on the line after the brace.
            Some(nl) if body[..nl].trim().is_empty() => {
                let at = skip_inserted(text, range.start + nl + 1, earlier);
                let line = format!("{indent}{call}{eol}");
                text.insert_str(at, &line);
                earlier.push(line);
            }
            // `{}` or `{   }`.
            None if body.trim().is_empty() => {
                let line = format!("{indent}{call}{eol}");
                text.replace_range(range, &format!("{eol}{line}"));
                earlier.push(line);
            }
            // Code right after the brace: `{ parent::render(); }`. The code
            // moves to its own line so later traits queue up above it.
            _ => {
                let code_start = range.start + (body.len() - body.trim_start().len());
                text.replace_range(range.start..code_start, &format!("{eol}{DEFAULT_INDENT}"));
                let line = format!("{DEFAULT_INDENT}{call}{eol}");
                text.insert_str(range.start + eol.len(), &line);
                earlier.push(line);
            }
        }
        FragmentOutcome::Inserted
    }
}

/// Inject with the default locator and conventions.
pub fn inject_traits(source: &str, traits: &[TraitReference]) -> InjectionOutcome {
    TraitInjector::new(Conventions::default()).inject(source, traits)
}

/// `\r\n` when `source` uses it, `\n` otherwise.
fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Move `at` past any line this run already inserted there.
fn skip_inserted(text: &str, mut at: usize, earlier: &[String]) -> usize {
    while let Some(line) = earlier.iter().find(|l| text[at..].starts_with(l.as_str())) {
        at += line.len();
    }
    at
}

/// Leading whitespace of the first non-blank line of `body`.
fn detect_indent(body: &str) -> String {
    body.lines()
        .find(|l| !l.trim().is_empty())
        .map(|l| {
            l.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect::<String>()
        })
        .filter(|indent| !indent.is_empty())
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patch::locator::MethodBody;

    const MINIMAL: &str = "<?php\nclass Card_Box extends Widget_Base {\n    protected function register_controls() {}\n    protected function render() {}\n}\n";

    const TYPICAL: &str = "<?php\nnamespace SFWPStudio\\Widgets;\n\nclass Card_Box extends Widget_Base {\n\n    public function get_name() {\n        return 'sf_card_box';\n    }\n\n    protected function register_controls() {\n        $this->start_controls_section('content');\n        $this->end_controls_section();\n    }\n\n    protected function render() {\n        echo '<div></div>';\n    }\n}\n";

    fn traits(names: &[&str]) -> Vec<TraitReference> {
        TraitReference::parse_list(names).unwrap()
    }

    #[test]
    fn inserts_in_trait_list_order() {
        let out = inject_traits(MINIMAL, &traits(&["CardTrait", "IconTrait"]));
        assert!(out.changed);
        assert_eq!(
            out.text,
            "<?php\nclass Card_Box extends Widget_Base {\n    use \\SFWPStudio\\Core\\Helpers\\Traits\\CardTrait;\n    use \\SFWPStudio\\Core\\Helpers\\Traits\\IconTrait;\n    protected function register_controls() {\n    $this->register_card_controls();\n    $this->register_icon_controls();\n}\n    protected function render() {\n    $this->render_card();\n    $this->render_icon();\n}\n}\n"
        );
        assert_eq!(out.inserted(), 6);
    }

    #[test]
    fn each_fragment_appears_exactly_once() {
        let out = inject_traits(MINIMAL, &traits(&["CardTrait", "IconTrait"]));
        for fragment in [
            "Traits\\CardTrait;",
            "Traits\\IconTrait;",
            "$this->register_card_controls();",
            "$this->register_icon_controls();",
            "$this->render_card();",
            "$this->render_icon();",
        ] {
            assert_eq!(out.text.matches(fragment).count(), 1, "{fragment}");
        }
    }

    #[test]
    fn second_run_changes_nothing() {
        let list = traits(&["CardTrait", "IconTrait"]);
        let first = inject_traits(TYPICAL, &list);
        let second = inject_traits(&first.text, &list);

        assert!(!second.changed);
        assert_eq!(second.text, first.text);
        assert_eq!(second.count(FragmentOutcome::AlreadyPresent), 6);
        assert_eq!(second.inserted(), 0);
    }

    #[test]
    fn keeps_existing_indentation() {
        let out = inject_traits(TYPICAL, &traits(&["card"]));
        assert!(out.text.contains(
            "register_controls() {\n        $this->register_card_controls();\n        $this->start_controls_section('content');"
        ));
        assert!(
            out.text
                .contains("render() {\n        $this->render_card();\n        echo '<div></div>';")
        );
        assert!(out.text.contains(
            "class Card_Box extends Widget_Base {\n\n    use \\SFWPStudio\\Core\\Helpers\\Traits\\CardTrait;\n    public function get_name()"
        ));
    }

    #[test]
    fn tab_indentation_is_reused() {
        let src = "class A {\n\tfunction register_controls() {\n\t\t$x = 1;\n\t}\n}\n";
        let out = inject_traits(src, &traits(&["card"]));
        assert!(
            out.text
                .contains("{\n\t\t$this->register_card_controls();\n\t\t$x = 1;")
        );
    }

    #[test]
    fn missing_method_is_a_recorded_skip() {
        let src = "class A {\n    protected function register_controls() {\n        $x = 1;\n    }\n}\n";
        let out = inject_traits(src, &traits(&["card"]));
        let report = &out.reports[0];

        assert!(out.changed);
        assert_eq!(
            report.outcome_of(FragmentKind::RenderCall),
            Some(FragmentOutcome::TargetNotFound)
        );
        assert_eq!(
            report.outcome_of(FragmentKind::ControlsCall),
            Some(FragmentOutcome::Inserted)
        );
        assert_eq!(
            report.fragments[2].to_string(),
            "Skipped $this->render_card(); (render() not found)"
        );
    }

    #[test]
    fn render_raw_is_accepted() {
        let src = "class A {\n    protected function render_raw() {\n        echo 1;\n    }\n}\n";
        let out = inject_traits(src, &traits(&["card"]));
        assert!(out.text.contains("render_raw() {\n        $this->render_card();"));
    }

    #[test]
    fn existing_use_elsewhere_counts_as_present() {
        let src = "<?php\nuse \\SFWPStudio\\Core\\Helpers\\Traits\\CardTrait;\nclass A {\n    function render() {}\n}\n";
        let out = inject_traits(src, &traits(&["card"]));
        assert_eq!(
            out.reports[0].outcome_of(FragmentKind::UseDeclaration),
            Some(FragmentOutcome::AlreadyPresent)
        );
    }

    #[test]
    fn no_class_leaves_text_untouched() {
        let src = "<?php\necho 'hello';\n";
        let out = inject_traits(src, &traits(&["card"]));
        assert!(!out.changed);
        assert_eq!(out.text, src);
        assert_eq!(out.count(FragmentOutcome::TargetNotFound), 3);
    }

    #[test]
    fn code_on_brace_line_gets_a_new_first_statement() {
        let src = "class A {\n    function render() { parent::render(); }\n}\n";
        let out = inject_traits(src, &traits(&["card"]));
        assert!(
            out.text
                .contains("function render() {\n    $this->render_card();\n    parent::render(); }")
        );
    }

    #[test]
    fn code_on_brace_line_keeps_trait_list_order() {
        let src = "class A {\n    function render() { parent::render(); }\n}\n";
        let list = traits(&["CardTrait", "IconTrait"]);
        let out = inject_traits(src, &list);

        assert!(out.text.contains(
            "function render() {\n    $this->render_card();\n    $this->render_icon();\n    parent::render(); }"
        ));
        let card = out.text.find("$this->render_card();").unwrap();
        let icon = out.text.find("$this->render_icon();").unwrap();
        assert!(card < icon);

        let again = inject_traits(&out.text, &list);
        assert!(!again.changed);
    }

    #[test]
    fn crlf_sources_stay_crlf() {
        let src = "<?php\r\nclass A extends Widget_Base {\r\n    function register_controls() {\r\n        $x = 1;\r\n    }\r\n    function render() {}\r\n}\r\n";
        let out = inject_traits(src, &traits(&["card", "icon"]));

        assert_eq!(out.inserted(), 6);
        assert!(!out.text.replace("\r\n", "").contains('\n'));
        assert!(out.text.contains(
            "register_controls() {\r\n        $this->register_card_controls();\r\n        $this->register_icon_controls();\r\n        $x = 1;"
        ));
    }

    struct FirstMethodOnly;

    impl SectionLocator for FirstMethodOnly {
        fn class_body_start(&self, _source: &str) -> Option<usize> {
            None
        }

        fn method_body(&self, source: &str, names: &[&str]) -> Option<MethodBody> {
            PatternLocator.method_body(source, names)
        }
    }

    #[test]
    fn locator_decides_where_fragments_go() {
        let injector = TraitInjector::with_locator(FirstMethodOnly, Conventions::default());
        let out = injector.inject(MINIMAL, &traits(&["card"]));

        assert_eq!(
            out.reports[0].outcome_of(FragmentKind::UseDeclaration),
            Some(FragmentOutcome::TargetNotFound)
        );
        assert_eq!(
            out.reports[0].outcome_of(FragmentKind::RenderCall),
            Some(FragmentOutcome::Inserted)
        );
        assert!(!out.text.contains("use \\"));
    }

    #[test]
    fn custom_namespace_from_conventions() {
        let injector = TraitInjector::new(Conventions {
            trait_namespace: r"Acme\Traits".into(),
            ..Conventions::default()
        });
        let out = injector.inject(MINIMAL, &traits(&["card"]));
        assert!(out.text.contains(r"    use \Acme\Traits\CardTrait;"));
    }
}
