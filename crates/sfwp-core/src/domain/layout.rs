//! Where generated artifacts live inside a plugin project.

use std::path::{Path, PathBuf};

/// Directory holding trait sources, relative to the project root.
pub const TRAITS_DIR: [&str; 3] = ["core", "helpers", "traits"];

/// File suffix identifying a trait source.
pub const TRAIT_FILE_SUFFIX: &str = "-trait.php";

/// Default registry file name, relative to the project root.
pub const REGISTRY_FILE: &str = "traits.json";

/// Paths of a plugin project rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    registry: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let registry = root.join(REGISTRY_FILE);
        Self { root, registry }
    }

    /// Override the registry location; relative paths are resolved against
    /// the project root.
    pub fn with_registry(mut self, registry: impl AsRef<Path>) -> Self {
        self.registry = self.root.join(registry);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &Path {
        &self.registry
    }

    /// `widgets/<slug>.php`
    pub fn widget_source(&self, file_slug: &str) -> PathBuf {
        self.root.join("widgets").join(format!("{file_slug}.php"))
    }

    /// `assets/css/<slug>.css`
    pub fn stylesheet(&self, file_slug: &str) -> PathBuf {
        self.root
            .join("assets")
            .join("css")
            .join(format!("{file_slug}.css"))
    }

    /// `assets/js/<slug>.js`
    pub fn script(&self, file_slug: &str) -> PathBuf {
        self.root
            .join("assets")
            .join("js")
            .join(format!("{file_slug}.js"))
    }

    /// `docs/widgets/<slug>.md`
    pub fn widget_docs(&self, file_slug: &str) -> PathBuf {
        self.root
            .join("docs")
            .join("widgets")
            .join(format!("{file_slug}.md"))
    }

    pub fn traits_dir(&self) -> PathBuf {
        TRAITS_DIR.iter().fold(self.root.clone(), |p, part| p.join(part))
    }

    /// `core/helpers/traits/<slug>-trait.php`
    pub fn trait_source(&self, file_slug: &str) -> PathBuf {
        self.traits_dir()
            .join(format!("{file_slug}{TRAIT_FILE_SUFFIX}"))
    }
}

/// Trait file stem (`icon-list` for `icon-list-trait.php`), if `file_name`
/// names a trait source.
pub fn trait_file_stem(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TRAIT_FILE_SUFFIX)
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_paths() {
        let layout = ProjectLayout::new("/p");
        assert_eq!(layout.widget_source("card-box"), Path::new("/p/widgets/card-box.php"));
        assert_eq!(layout.stylesheet("card-box"), Path::new("/p/assets/css/card-box.css"));
        assert_eq!(layout.script("card-box"), Path::new("/p/assets/js/card-box.js"));
        assert_eq!(layout.widget_docs("card-box"), Path::new("/p/docs/widgets/card-box.md"));
        assert_eq!(
            layout.trait_source("icon-list"),
            Path::new("/p/core/helpers/traits/icon-list-trait.php")
        );
    }

    #[test]
    fn registry_defaults_to_root_and_can_move() {
        let layout = ProjectLayout::new("/p");
        assert_eq!(layout.registry(), Path::new("/p/traits.json"));

        let moved = layout.with_registry("config/traits.json");
        assert_eq!(moved.registry(), Path::new("/p/config/traits.json"));

        let absolute = ProjectLayout::new("/p").with_registry("/etc/traits.json");
        assert_eq!(absolute.registry(), Path::new("/etc/traits.json"));
    }

    #[test]
    fn trait_stems() {
        assert_eq!(trait_file_stem("icon-list-trait.php"), Some("icon-list"));
        assert_eq!(trait_file_stem("-trait.php"), None);
        assert_eq!(trait_file_stem("card.php"), None);
    }
}
