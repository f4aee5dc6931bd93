//! Debug Service - toggles `WP_DEBUG` in the enclosing WordPress install.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DebugMode, DebugToggle, WP_CONFIG_FILE, toggle_debug},
    error::SfwpResult,
};

#[derive(Debug, Clone)]
pub struct DebugReport {
    pub path: PathBuf,
    pub mode: DebugMode,
    pub toggle: DebugToggle,
}

impl DebugReport {
    pub fn written(&self) -> bool {
        self.toggle.changed
    }
}

pub struct DebugService {
    filesystem: Box<dyn Filesystem>,
}

impl DebugService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// First `wp-config.php` found in `start` or one of its ancestors.
    pub fn locate_wp_config(&self, start: &Path) -> SfwpResult<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(WP_CONFIG_FILE))
            .inspect(|candidate| debug!(candidate = %candidate.display(), "Looking for config"))
            .find(|candidate| self.filesystem.exists(candidate))
            .ok_or_else(|| {
                ApplicationError::ConfigFileNotFound {
                    start: start.to_path_buf(),
                }
                .into()
            })
    }

    /// Switch debugging for the install enclosing `start`.
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn toggle(&self, start: &Path, mode: DebugMode) -> SfwpResult<DebugReport> {
        let path = self.locate_wp_config(start)?;
        let content = self.filesystem.read_to_string(&path)?;
        let toggle = toggle_debug(&content, mode)?;

        if toggle.changed {
            self.filesystem.write_file(&path, &toggle.text)?;
            info!(path = %path.display(), guard = ?toggle.guard, "Debug configuration updated");
        } else {
            info!("Debug configuration already up to date");
        }

        Ok(DebugReport { path, mode, toggle })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{DomainError, GuardChange};
    use crate::error::SfwpError;

    const CONFIG: &str = "<?php\ndefine( 'WP_DEBUG', false );\n";

    #[test]
    fn finds_config_in_an_ancestor() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/srv/site/wp-config.php"));

        let service = DebugService::new(Box::new(fs));
        let found = service
            .locate_wp_config(Path::new("/srv/site/wp-content/plugins/sfwp"))
            .unwrap();
        assert_eq!(found, PathBuf::from("/srv/site/wp-config.php"));
    }

    #[test]
    fn missing_config_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let err = DebugService::new(Box::new(fs))
            .locate_wp_config(Path::new("/srv/site"))
            .unwrap_err();
        assert!(matches!(
            err,
            SfwpError::Application(ApplicationError::ConfigFileNotFound { .. })
        ));
    }

    #[test]
    fn toggle_on_writes_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("/srv/wp-config.php"));
        fs.expect_read_to_string()
            .returning(|_| Ok(CONFIG.to_string()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("/srv/wp-config.php")), always())
            .times(1)
            .returning(|_, content| {
                assert!(content.contains("define('WP_DEBUG', true);"));
                assert!(content.contains("WP_DEBUG_LOG"));
                Ok(())
            });

        let report = DebugService::new(Box::new(fs))
            .toggle(Path::new("/srv/plugin"), DebugMode::On)
            .unwrap();
        assert!(report.written());
        assert_eq!(report.toggle.guard, GuardChange::Inserted);
    }

    #[test]
    fn toggle_without_flag_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("<?php\n".to_string()));
        fs.expect_write_file().never();

        let err = DebugService::new(Box::new(fs))
            .toggle(Path::new("/srv"), DebugMode::On)
            .unwrap_err();
        assert!(matches!(err, SfwpError::Domain(DomainError::DebugFlagMissing)));
    }
}
