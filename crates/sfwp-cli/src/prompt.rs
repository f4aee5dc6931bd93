//! Interactive prompts.
//!
//! Real prompts need the `interactive` cargo feature (on by default). Without
//! it every prompt fails with [`CliError::FeatureNotAvailable`], so scripted
//! use keeps working as long as all values come from flags.

use crate::error::{CliError, CliResult};

/// What `sfwp create` should produce when asked interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateKind {
    Widget,
    Trait,
}

impl CreateKind {
    pub const CHOICES: [&'static str; 2] = ["Widget", "Trait"];

    pub fn from_index(index: usize) -> Self {
        if index == 1 { Self::Trait } else { Self::Widget }
    }
}

#[cfg(feature = "interactive")]
mod enabled {
    use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

    use super::CreateKind;
    use crate::error::{CliError, CliResult};

    fn prompt_error(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "prompt failed".into(),
            source: std::io::Error::other(e),
        }
    }

    /// Terminal prompts with the colourful theme.
    pub struct Prompter {
        theme: ColorfulTheme,
    }

    impl std::fmt::Debug for Prompter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Prompter").field("theme", &"ColorfulTheme").finish()
        }
    }

    impl Prompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }

        pub fn create_kind(&self) -> CliResult<CreateKind> {
            let index = Select::with_theme(&self.theme)
                .with_prompt("What do you want to create?")
                .items(&CreateKind::CHOICES)
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            Ok(CreateKind::from_index(index))
        }

        /// Non-empty text.
        pub fn text(&self, prompt: &str, default: Option<&str>) -> CliResult<String> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .validate_with(|value: &String| -> Result<(), &str> {
                    if value.trim().is_empty() {
                        Err("A value is required")
                    } else {
                        Ok(())
                    }
                });
            if let Some(default) = default {
                input = input.default(default.to_string());
            }
            input
                .interact_text()
                .map(|value| value.trim().to_string())
                .map_err(prompt_error)
        }

        pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }

        /// Indices of the chosen items; empty when there is nothing to pick.
        pub fn pick_many(&self, prompt: &str, items: &[String]) -> CliResult<Vec<usize>> {
            if items.is_empty() {
                return Ok(Vec::new());
            }
            MultiSelect::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .interact()
                .map_err(prompt_error)
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod enabled {
    use super::CreateKind;
    use crate::error::{CliError, CliResult};

    fn unavailable<T>() -> CliResult<T> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    #[derive(Debug)]
    pub struct Prompter;

    impl Prompter {
        pub fn new() -> Self {
            Self
        }

        pub fn create_kind(&self) -> CliResult<CreateKind> {
            unavailable()
        }

        pub fn text(&self, _prompt: &str, _default: Option<&str>) -> CliResult<String> {
            unavailable()
        }

        pub fn confirm(&self, _prompt: &str, _default: bool) -> CliResult<bool> {
            unavailable()
        }

        pub fn pick_many(&self, _prompt: &str, _items: &[String]) -> CliResult<Vec<usize>> {
            unavailable()
        }
    }
}

pub use enabled::Prompter;

/// Ask before overwriting, or refuse when prompting is impossible.
///
/// `interactive == false` means no terminal (or `--yes`): conflicts are left
/// to the caller's error path.
pub fn confirm_overwrite(prompter: &Prompter, interactive: bool, count: usize) -> CliResult<bool> {
    if !interactive {
        return Ok(false);
    }
    let answer = prompter.confirm(&format!("Overwrite {count} existing file(s)?"), false)?;
    if answer { Ok(true) } else { Err(CliError::Cancelled) }
}
