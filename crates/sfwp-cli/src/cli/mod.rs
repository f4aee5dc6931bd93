//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use sfwp_core::domain::DebugMode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sfwp",
    bin_name = "sfwp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Widget scaffolding for SFWP Studio plugins",
    long_about = "sfwp generates Elementor widgets and traits from stubs, \
                  injects traits into existing widgets, fills in widget \
                  documentation and toggles WordPress debug mode.",
    after_help = "EXAMPLES:\n\
        \x20 sfwp create Card Box --traits card icon\n\
        \x20 sfwp add:trait hover --to \"Card Box\"\n\
        \x20 sfwp docs Card Box\n\
        \x20 sfwp debug on\n\
        \x20 sfwp zip release",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a widget or a trait.
    #[command(
        visible_alias = "new",
        about = "Create a widget or trait",
        after_help = "EXAMPLES:\n\
            \x20 sfwp create                          # interactive\n\
            \x20 sfwp create Icon Box --no-js\n\
            \x20 sfwp create Card --traits card,icon-list --icon eicon-posts-grid\n\
            \x20 sfwp create hover effect --trait"
    )]
    Create(CreateArgs),

    /// Inject traits into an existing widget.
    #[command(
        name = "add:trait",
        visible_alias = "add-trait",
        about = "Inject traits into an existing widget",
        after_help = "EXAMPLES:\n\
            \x20 sfwp add:trait card icon --to \"Card Box\"\n\
            \x20 sfwp add-trait CardTrait,IconTrait --to card-box"
    )]
    AddTrait(AddTraitArgs),

    /// Fill a widget's documentation metadata block.
    #[command(
        about = "Generate documentation metadata for a widget",
        after_help = "EXAMPLES:\n\
            \x20 sfwp docs Card Box\n\
            \x20 sfwp docs card-box"
    )]
    Docs(DocsArgs),

    /// Archive the current directory.
    #[command(
        about = "Zip the current directory into <FILENAME>.zip",
        after_help = "EXAMPLES:\n\
            \x20 sfwp zip release\n\
            \x20 sfwp zip my-plugin.zip"
    )]
    Zip(ZipArgs),

    /// Toggle WordPress debug mode.
    #[command(
        about = "Toggle WP_DEBUG settings in wp-config.php",
        after_help = "EXAMPLES:\n\
            \x20 sfwp debug on\n\
            \x20 sfwp debug off"
    )]
    Debug(DebugArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sfwp completions bash > ~/.local/share/bash-completion/completions/sfwp\n\
            \x20 sfwp completions zsh  > ~/.zfunc/_sfwp\n\
            \x20 sfwp completions fish > ~/.config/fish/completions/sfwp.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sfwp config list\n\
            \x20 sfwp config get defaults.icon\n\
            \x20 sfwp config init --local"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `sfwp create`.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Name words; joined with spaces. Omit to be prompted.
    #[arg(value_name = "NAME", num_args = 0.., help = "Widget or trait name")]
    pub name: Vec<String>,

    /// Create a trait instead of a widget.
    #[arg(
        long = "trait",
        conflicts_with_all = ["no_css", "no_js", "no_readme", "traits", "icon"],
        help = "Create a trait instead of a widget"
    )]
    pub as_trait: bool,

    #[arg(long = "no-css", help = "Skip CSS file creation")]
    pub no_css: bool,

    #[arg(long = "no-js", help = "Skip JS file creation")]
    pub no_js: bool,

    #[arg(long = "no-readme", help = "Skip documentation file creation")]
    pub no_readme: bool,

    /// Traits to include; space- or comma-separated.
    #[arg(
        long = "traits",
        value_name = "TRAITS",
        num_args = 1..,
        help = "Traits to include (one or more)"
    )]
    pub traits: Vec<String>,

    /// Elementor icon class.
    #[arg(long = "icon", value_name = "ICON", help = "Elementor icon class")]
    pub icon: Option<String>,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Never prompt; fail instead of asking.
    #[arg(short = 'y', long = "yes", help = "Never prompt (fail on conflicts)")]
    pub yes: bool,

    /// Preview the files without writing them.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add:trait ─────────────────────────────────────────────────────────────────

/// Arguments for `sfwp add:trait`.
#[derive(Debug, Args)]
pub struct AddTraitArgs {
    /// Traits to inject; space- or comma-separated.
    #[arg(value_name = "TRAITS", required = true, num_args = 1..)]
    pub traits: Vec<String>,

    /// Widget receiving the traits.
    #[arg(long = "to", value_name = "WIDGET", required = true, help = "Target widget name")]
    pub to: String,
}

// ── docs ──────────────────────────────────────────────────────────────────────

/// Arguments for `sfwp docs`.
#[derive(Debug, Args)]
pub struct DocsArgs {
    /// Widget name words; joined with spaces.
    #[arg(value_name = "WIDGET", required = true, num_args = 1..)]
    pub name: Vec<String>,
}

// ── zip ───────────────────────────────────────────────────────────────────────

/// Arguments for `sfwp zip`.
#[derive(Debug, Args)]
pub struct ZipArgs {
    /// Archive name; `.zip` is appended when missing.
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}

// ── debug ─────────────────────────────────────────────────────────────────────

/// Arguments for `sfwp debug`.
#[derive(Debug, Args)]
pub struct DebugArgs {
    #[arg(value_enum, value_name = "MODE")]
    pub mode: DebugSwitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DebugSwitch {
    On,
    Off,
}

impl From<DebugSwitch> for DebugMode {
    fn from(value: DebugSwitch) -> Self {
        match value {
            DebugSwitch::On => DebugMode::On,
            DebugSwitch::Off => DebugMode::Off,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sfwp completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sfwp config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.icon`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file in use.
    Path,
    /// Write a configuration file holding the defaults.
    Init {
        /// Write `.sfwp.toml` in the current directory.
        #[arg(long = "local", help = "Create .sfwp.toml in the current directory")]
        local: bool,

        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Words of a multi-word positional joined back into one name.
pub fn joined_name(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── tests ─────────────────────────────────────────────────────────────────────
