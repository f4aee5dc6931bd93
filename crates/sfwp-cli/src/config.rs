//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the pieces it needs
//! (`Conventions`, the registry path, the stubs directory).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `SFWP__<SECTION>__<KEY>` (e.g. `SFWP__DEFAULTS__ICON`)
//! 3. Config file: `--config <file>` (must exist), else `./.sfwp.toml`,
//!    else the per-user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sfwp_core::domain::{Conventions, DEFAULT_ICON, layout::REGISTRY_FILE};

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".sfwp.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SFWP";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `sfwp create`.
    pub defaults: Defaults,
    /// Brand prefix and trait namespace.
    pub conventions: Conventions,
    /// Stub settings.
    pub templates: TemplateConfig,
    /// Trait registry settings.
    pub registry: RegistryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub icon: String,
    pub css: bool,
    pub js: bool,
    pub readme: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
            css: true,
            js: true,
            readme: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stubs_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry file, relative to the project root.
    pub path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(REGISTRY_FILE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for this process.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    /// Defaults, then `path` as TOML, then the environment.
    pub fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to prepare default configuration")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// The configuration file in effect when no `--config` is given:
    /// `./.sfwp.toml` if present, otherwise the per-user file.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::user_config_path()
        }
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sfwp.toml` in the current directory.
    pub fn user_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sfwpstudio", "sfwp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Look up a dotted key such as `defaults.icon`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let root = serde_json::to_value(self).ok()?;
        key.split('.')
            .try_fold(root, |value, part| value.get(part).cloned())
    }
}
