//! Finding insertion points in a PHP class without parsing it.
//!
//! Method bodies are bounded non-greedily at the *first* closing brace after
//! the opening one. A body containing a nested `{ ... }` block is therefore
//! cut short at the inner brace. Insertions only happen at the start of a
//! body, so the damage is limited to presence checks seeing less of the body
//! than exists. Swapping in a real parser means implementing
//! [`SectionLocator`]; the injector does not change.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static CLASS_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\bclass\s+[A-Za-z_][A-Za-z0-9_]*.*?\{\s*\n")
        .expect("class opening pattern is valid")
});

/// Where a method's body sits inside the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBody {
    /// Name of the method that matched.
    pub name: String,
    /// Byte range between the opening and the (first) closing brace.
    pub body: Range<usize>,
}

/// Locates the sections the injector writes into.
pub trait SectionLocator {
    /// Byte offset right after the class opening brace and the newline that
    /// follows it, for the first class in `source`.
    fn class_body_start(&self, source: &str) -> Option<usize>;

    /// Body of the earliest method in `source` whose name is one of `names`.
    fn method_body(&self, source: &str, names: &[&str]) -> Option<MethodBody>;
}

/// Regex-based locator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLocator;

impl PatternLocator {
    fn method_pattern(names: &[&str]) -> Option<Regex> {
        if names.is_empty() {
            return None;
        }
        let alternatives = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        // Optional return type: `function render(): void {`.
        let pattern = format!(
            r"(?s)function\s+({alternatives})\s*\(\s*\)\s*(?::\s*\??[A-Za-z_\\]+\s*)?\{{(.*?)\}}"
        );
        Regex::new(&pattern).ok()
    }
}

impl SectionLocator for PatternLocator {
    fn class_body_start(&self, source: &str) -> Option<usize> {
        CLASS_OPEN.find(source).map(|m| m.end())
    }

    fn method_body(&self, source: &str, names: &[&str]) -> Option<MethodBody> {
        let re = Self::method_pattern(names)?;
        let caps = re.captures(source)?;
        let name = caps.get(1)?.as_str().to_string();
        let body = caps.get(2)?.range();
        Some(MethodBody { name, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: &str = "<?php\nnamespace X;\n\nclass Card_Box extends Widget_Base {\n\n    public function get_name() {\n        return 'sf_card_box';\n    }\n\n    protected function register_controls() {\n        $this->start_controls_section('content');\n    }\n\n    protected function render_raw() {\n        echo 'hi';\n    }\n}\n";

    #[test]
    fn class_body_starts_after_brace_line() {
        let at = PatternLocator.class_body_start(WIDGET).unwrap();
        assert!(WIDGET[at..].starts_with("    public function get_name()"));
    }

    #[test]
    fn class_header_may_span_lines() {
        let src = "class Foo\n    extends Bar\n{\n    public $x;\n}\n";
        let at = PatternLocator.class_body_start(src).unwrap();
        assert!(src[at..].starts_with("    public $x;"));
    }

    #[test]
    fn no_class_means_no_start() {
        assert_eq!(PatternLocator.class_body_start("<?php\nfunction x() {}\n"), None);
    }

    #[test]
    fn finds_method_body() {
        let found = PatternLocator
            .method_body(WIDGET, &["register_controls"])
            .unwrap();
        assert_eq!(found.name, "register_controls");
        assert_eq!(
            &WIDGET[found.body],
            "\n        $this->start_controls_section('content');\n    "
        );
    }

    #[test]
    fn render_alternatives_pick_existing_method() {
        let found = PatternLocator
            .method_body(WIDGET, &["render", "render_raw"])
            .unwrap();
        assert_eq!(found.name, "render_raw");
    }

    #[test]
    fn return_type_is_tolerated() {
        let src = "class A {\n    protected function render(): void {\n        echo 1;\n    }\n}\n";
        let found = PatternLocator.method_body(src, &["render"]).unwrap();
        assert_eq!(&src[found.body], "\n        echo 1;\n    ");
    }

    #[test]
    fn nested_braces_cut_the_body_short() {
        let src = "function render() {\n    if ($a) { echo 1; }\n    echo 2;\n}";
        let found = PatternLocator.method_body(src, &["render"]).unwrap();
        assert_eq!(&src[found.body], "\n    if ($a) { echo 1; ");
    }

    #[test]
    fn missing_method_is_none() {
        assert!(PatternLocator.method_body(WIDGET, &["render"]).is_none());
        assert!(PatternLocator.method_body(WIDGET, &[]).is_none());
    }
}
