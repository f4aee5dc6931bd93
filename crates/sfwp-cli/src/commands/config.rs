//! `sfwp config` - inspect and create configuration files.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Failed to list configuration")?;
            output.header("Current Configuration:")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { local, force } => {
            let path = init_target(local, global.config.as_deref());
            write_defaults(&path, force)?;
            info!(path = %path.display(), "Configuration written");
            output.success(&format!("Wrote {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match config.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Null) | None => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
        Some(other) => Ok(other.to_string()),
    }
}

fn init_target(local: bool, explicit: Option<&Path>) -> PathBuf {
    match (local, explicit) {
        (true, _) => PathBuf::from(LOCAL_CONFIG_FILE),
        (false, Some(path)) => path.to_path_buf(),
        (false, None) => AppConfig::user_config_path(),
    }
}

fn write_defaults(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigError {
            message: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }
    let text = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Failed to render default configuration")?;
    std::fs::write(path, text).with_cli_context(|| format!("writing {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.icon").unwrap(), "eicon-star");
        assert_eq!(get_config_value(&cfg, "defaults.css").unwrap(), "true");
        assert_eq!(
            get_config_value(&cfg, "conventions.brand_prefix").unwrap(),
            "SF"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn init_target_prefers_local_then_explicit() {
        assert_eq!(
            init_target(true, Some(Path::new("x.toml"))),
            PathBuf::from(LOCAL_CONFIG_FILE)
        );
        assert_eq!(
            init_target(false, Some(Path::new("x.toml"))),
            PathBuf::from("x.toml")
        );
    }

    #[test]
    fn init_refuses_to_clobber_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sfwp.toml");

        write_defaults(&path, false).unwrap();
        let written = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(written, AppConfig::default());

        assert!(matches!(
            write_defaults(&path, false),
            Err(CliError::ConfigError { .. })
        ));
        write_defaults(&path, true).unwrap();
    }
}
