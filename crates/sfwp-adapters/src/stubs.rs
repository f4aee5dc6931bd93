//! Stub discovery.
//!
//! This module decides where the generator's stubs come from. The stubs that
//! ship with SFWP are compiled into the binary, so a lookup can always fall
//! back to them.
//!
//! # Resolution order
//!
//! The first candidate directory that exists wins:
//!
//! 1. **explicit** - `--stubs <dir>` or `templates.stubs_dir` from config.
//! 2. **`$SFWP_STUBS_DIR`** - environment override, handy in `.env`.
//! 3. **`./stubs`** - relative to the current working directory.
//!
//! If none exists the bundled stubs are used. A directory that exists but
//! lacks a stub is *not* skipped: lookups of that stub fail with
//! `TemplateNotFound`, so a half-customised directory is noticed instead of
//! silently mixed with bundled files.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use sfwp_core::{application::ports::TemplateStore, domain::TemplateName};

use crate::template_store::{DirectoryStore, InMemoryStore};

/// Environment variable naming a stubs directory.
pub const STUBS_DIR_ENV: &str = "SFWP_STUBS_DIR";

/// Working-directory-relative stubs directory.
pub const LOCAL_STUBS_DIR: &str = "stubs";

/// Stub text compiled into the binary.
pub fn bundled(name: TemplateName) -> &'static str {
    match name {
        TemplateName::ComponentSource => include_str!("../stubs/widget.php.stub"),
        TemplateName::Stylesheet => include_str!("../stubs/style.css.stub"),
        TemplateName::Script => include_str!("../stubs/script.js.stub"),
        TemplateName::Readme => include_str!("../stubs/readme.md.stub"),
        TemplateName::TraitSource => include_str!("../stubs/trait.php.stub"),
    }
}

/// Where stubs were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubSource {
    Directory(PathBuf),
    Bundled,
}

impl StubSource {
    /// Resolve using the process environment and working directory.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let env_dir = std::env::var_os(STUBS_DIR_ENV).map(PathBuf::from);
        Self::first_existing(candidate_paths(explicit, env_dir))
    }

    /// First candidate that is a directory, or [`StubSource::Bundled`].
    pub fn first_existing(candidates: Vec<PathBuf>) -> Self {
        for candidate in candidates {
            debug!(path = %candidate.display(), "checking candidate stubs path");
            if candidate.is_dir() {
                info!(path = %candidate.display(), "using stubs directory");
                return Self::Directory(candidate);
            }
            debug!(path = %candidate.display(), "not a directory, skipping");
        }
        debug!("no stubs directory found, using bundled stubs");
        Self::Bundled
    }

    /// Build the template store for this source.
    pub fn into_store(self) -> Box<dyn TemplateStore> {
        match self {
            Self::Directory(dir) => Box::new(DirectoryStore::new(dir)),
            Self::Bundled => Box::new(InMemoryStore::with_builtin()),
        }
    }
}

/// Ordered candidates; absent inputs are omitted.
fn candidate_paths(explicit: Option<&Path>, env_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Some(dir) = explicit {
        paths.push(dir.to_path_buf());
    }
    if let Some(dir) = env_dir {
        debug!(path = %dir.display(), "candidate from ${}", STUBS_DIR_ENV);
        paths.push(dir);
    }
    paths.push(PathBuf::from(LOCAL_STUBS_DIR));

    paths
}
