//! `WP_DEBUG` switching inside a `wp-config.php` text.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::domain::error::DomainError;

/// Name of the WordPress configuration file.
pub const WP_CONFIG_FILE: &str = "wp-config.php";

/// Guard block enabling the debug log and on-screen errors.
pub const DEBUG_BLOCK: &str = "if ( ! defined( 'WP_DEBUG_LOG' ) ) {\n  define( 'WP_DEBUG_LOG', true );\n}\n\nif ( ! defined( 'WP_DEBUG_DISPLAY' ) ) {\n  define( 'WP_DEBUG_DISPLAY', true );\n}";

static DEBUG_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"define\(\s*['"]WP_DEBUG['"]\s*,\s*(true|false)\s*\);"#)
        .expect("debug flag pattern is valid")
});

static DEBUG_FLAG_ON_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"define\(\s*['"]WP_DEBUG['"]\s*,\s*true\s*\);\s*"#)
        .expect("debug flag line pattern is valid")
});

static GUARD_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"\n?if\s*\(\s*!\s*defined\s*\(\s*['"]WP_DEBUG_LOG['"]\s*\)\s*\)\s*\{[^}]*\}\s*"#,
        r#"\n?if\s*\(\s*!\s*defined\s*\(\s*['"]WP_DEBUG_DISPLAY['"]\s*\)\s*\)\s*\{[^}]*\}"#,
    ))
    .expect("guard block pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugMode {
    On,
    Off,
}

impl DebugMode {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for DebugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_on() { "on" } else { "off" })
    }
}

impl FromStr for DebugMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Ok(Self::On),
            "off" | "false" | "0" => Ok(Self::Off),
            other => Err(DomainError::InvalidName {
                name: other.to_string(),
                reason: "debug mode must be 'on' or 'off'".into(),
            }),
        }
    }
}

/// What happened to the guard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardChange {
    Inserted,
    Removed,
    AlreadyPresent,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugToggle {
    pub text: String,
    pub changed: bool,
    /// Whether a `WP_DEBUG` define was found at all.
    pub flag_found: bool,
    pub guard: GuardChange,
}

/// Switch `WP_DEBUG` in `config` and add or remove the guard block.
///
/// Turning debugging on requires an existing `WP_DEBUG` define to anchor the
/// guard block; without one nothing is returned for writing.
pub fn toggle_debug(config: &str, mode: DebugMode) -> Result<DebugToggle, DomainError> {
    let flag_found = DEBUG_FLAG.is_match(config);
    let replacement = format!("define('WP_DEBUG', {});", mode.is_on());
    let mut text = DEBUG_FLAG
        .replacen(config, 1, NoExpand(&replacement))
        .into_owned();

    let guard = match mode {
        DebugMode::On if text.contains(DEBUG_BLOCK) => GuardChange::AlreadyPresent,
        DebugMode::On => {
            if !DEBUG_FLAG_ON_LINE.is_match(&text) {
                return Err(DomainError::DebugFlagMissing);
            }
            let anchored = format!("define('WP_DEBUG', true);\n\n{DEBUG_BLOCK}\n");
            text = DEBUG_FLAG_ON_LINE
                .replacen(&text, 1, NoExpand(&anchored))
                .into_owned();
            GuardChange::Inserted
        }
        DebugMode::Off if GUARD_BLOCK.is_match(&text) => {
            text = GUARD_BLOCK.replace_all(&text, "").into_owned();
            GuardChange::Removed
        }
        DebugMode::Off => GuardChange::Absent,
    };

    let changed = text != config;
    if changed {
        text = format!("{}\n", text.trim_end());
    }

    Ok(DebugToggle {
        text,
        changed,
        flag_found,
        guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFF: &str = "<?php\ndefine( 'DB_NAME', 'wp' );\ndefine( 'WP_DEBUG', false );\n\n/* That's all, stop editing! */\nrequire_once ABSPATH . 'wp-settings.php';\n";

    #[test]
    fn turning_on_inserts_the_guard_after_the_flag() {
        let out = toggle_debug(OFF, DebugMode::On).unwrap();
        assert!(out.changed);
        assert!(out.flag_found);
        assert_eq!(out.guard, GuardChange::Inserted);
        assert!(out.text.contains(&format!(
            "define('WP_DEBUG', true);\n\n{DEBUG_BLOCK}\n/* That's all"
        )));
        assert!(out.text.ends_with("wp-settings.php';\n"));
    }

    #[test]
    fn turning_on_twice_changes_nothing() {
        let first = toggle_debug(OFF, DebugMode::On).unwrap();
        let second = toggle_debug(&first.text, DebugMode::On).unwrap();
        assert!(!second.changed);
        assert_eq!(second.guard, GuardChange::AlreadyPresent);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn turning_off_removes_the_guard() {
        let on = toggle_debug(OFF, DebugMode::On).unwrap();
        let off = toggle_debug(&on.text, DebugMode::Off).unwrap();
        assert!(off.changed);
        assert_eq!(off.guard, GuardChange::Removed);
        assert!(off.text.contains("define('WP_DEBUG', false);"));
        assert!(!off.text.contains("WP_DEBUG_LOG"));
        assert!(!off.text.contains("WP_DEBUG_DISPLAY"));
    }

    #[test]
    fn off_when_already_off_only_normalizes_the_define() {
        let out = toggle_debug(OFF, DebugMode::Off).unwrap();
        assert_eq!(out.guard, GuardChange::Absent);
        assert!(out.text.contains("define('WP_DEBUG', false);"));

        let again = toggle_debug(&out.text, DebugMode::Off).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn missing_flag_aborts_on() {
        let err = toggle_debug("<?php\n", DebugMode::On).unwrap_err();
        assert_eq!(err, DomainError::DebugFlagMissing);
    }

    #[test]
    fn missing_flag_is_fine_for_off() {
        let out = toggle_debug("<?php\n", DebugMode::Off).unwrap();
        assert!(!out.flag_found);
        assert!(!out.changed);
    }

    #[test]
    fn modes_parse() {
        assert_eq!("ON".parse::<DebugMode>().unwrap(), DebugMode::On);
        assert_eq!("off".parse::<DebugMode>().unwrap(), DebugMode::Off);
        assert!("maybe".parse::<DebugMode>().is_err());
    }
}
