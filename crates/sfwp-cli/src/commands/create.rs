//! Implementation of the `sfwp create` command.
//!
//! Responsibility: turn arguments (or prompt answers) into a widget request
//! or a trait name, resolve conflicts with the user, call the core services
//! and display results.

use std::path::PathBuf;

use serde_json::json;
use tracing::{debug, info, instrument};

use sfwp_core::{
    domain::{TraitReference, WidgetRequest},
    error::SfwpError,
};

use crate::{
    cli::{CreateArgs, GlobalArgs, joined_name},
    commands::{Workspace, display_path},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{CreateKind, Prompter, confirm_overwrite},
};

/// What the user asked for once prompts (if any) are answered.
#[derive(Debug, Clone, PartialEq)]
enum Creation {
    Widget(WidgetRequest),
    Trait(String),
}

/// Execute the `sfwp create` command.
///
/// 1. Refresh the trait registry so pickers see every trait
/// 2. Build a widget request or trait name from flags, or by prompting
/// 3. Stop after listing the files on `--dry-run`
/// 4. Resolve conflicts: `--force`, a prompt, or an error
/// 5. Generate and report
#[instrument(skip_all, fields(name = %joined_name(&args.name)))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::current(&global, &config)?;
    let traits = workspace.traits();

    let spinner = output.spinner("Refreshing trait registry...");
    let registry = traits.sync_registry(&workspace.layout);
    spinner.finish_and_clear();
    let registry = registry?;
    debug!(traits = registry.len(), "Registry refreshed");

    let interactive = output.is_interactive() && !args.yes;
    let prompter = Prompter::new();

    let creation = if joined_name(&args.name).is_empty() {
        if !interactive {
            return Err(CliError::InvalidInput {
                message: "a name is required when not running interactively".into(),
                source: None,
            });
        }
        prompt_creation(&prompter, &config, &registry)?
    } else {
        creation_from_args(&args, &config)?
    };

    match creation {
        Creation::Widget(request) => {
            create_widget(&workspace, request, &args, interactive, &prompter, &output)
        }
        Creation::Trait(name) => {
            create_trait(&workspace, &name, &args, interactive, &prompter, &output)
        }
    }
}

fn creation_from_args(args: &CreateArgs, config: &AppConfig) -> CliResult<Creation> {
    let name = joined_name(&args.name);
    if args.as_trait {
        return Ok(Creation::Trait(name));
    }

    let traits = TraitReference::parse_list(&args.traits).map_err(SfwpError::from)?;
    let icon = args
        .icon
        .clone()
        .unwrap_or_else(|| config.defaults.icon.clone());

    Ok(Creation::Widget(
        WidgetRequest::new(name)
            .with_stylesheet(config.defaults.css && !args.no_css)
            .with_script(config.defaults.js && !args.no_js)
            .with_readme(config.defaults.readme && !args.no_readme)
            .with_icon(icon)
            .with_traits(traits),
    ))
}

fn prompt_creation(
    prompter: &Prompter,
    config: &AppConfig,
    registry: &[String],
) -> CliResult<Creation> {
    match prompter.create_kind()? {
        CreateKind::Trait => Ok(Creation::Trait(prompter.text("Trait name", None)?)),
        CreateKind::Widget => {
            let defaults = &config.defaults;
            let name = prompter.text("Widget name", None)?;
            let css = prompter.confirm("Create a CSS file?", defaults.css)?;
            let js = prompter.confirm("Create a JS file?", defaults.js)?;
            let readme = prompter.confirm("Create a documentation file?", defaults.readme)?;
            let icon = prompter.text("Elementor icon", Some(&defaults.icon))?;

            let picked: Vec<&String> = if registry.is_empty() {
                Vec::new()
            } else {
                prompter
                    .pick_many("Traits to include", registry)?
                    .into_iter()
                    .filter_map(|i| registry.get(i))
                    .collect()
            };
            let traits = TraitReference::parse_list(picked).map_err(SfwpError::from)?;

            Ok(Creation::Widget(
                WidgetRequest::new(name)
                    .with_stylesheet(css)
                    .with_script(js)
                    .with_readme(readme)
                    .with_icon(icon)
                    .with_traits(traits),
            ))
        }
    }
}

/// Whether existing files may be replaced; errors when the user declines.
fn allow_overwrite(
    existing: &[PathBuf],
    args: &CreateArgs,
    interactive: bool,
    prompter: &Prompter,
    workspace: &Workspace,
    output: &OutputManager,
) -> CliResult<bool> {
    if existing.is_empty() || args.force {
        return Ok(args.force);
    }
    for path in existing {
        output.warning(&format!(
            "{} already exists",
            display_path(&workspace.root, path)
        ))?;
    }
    confirm_overwrite(prompter, interactive, existing.len())
}

fn create_widget(
    workspace: &Workspace,
    request: WidgetRequest,
    args: &CreateArgs,
    interactive: bool,
    prompter: &Prompter,
    output: &OutputManager,
) -> CliResult<()> {
    let widgets = workspace.widgets();
    let plan = widgets.plan(&request, &workspace.layout)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create widget '{}' ({})",
            plan.ids.display_name, plan.ids.type_name
        ))?;
        for artifact in &plan.artifacts {
            output.print(&format!(
                "  {}",
                display_path(&workspace.root, &artifact.path)
            ))?;
        }
        return Ok(());
    }

    let existing = widgets.conflicts(&plan);
    let overwrite = allow_overwrite(&existing, args, interactive, prompter, workspace, output)?;

    let spinner = output.spinner(&format!("Creating {}...", plan.ids.type_name));
    let result = widgets.create(&request, &workspace.layout, overwrite);
    spinner.finish_and_clear();
    let plan = result?;

    info!(class = %plan.ids.type_name, "Widget generated");

    if output.is_json() {
        output.json(&json!({
            "kind": "widget",
            "identifiers": plan.ids,
            "slug": plan.slug,
            "files": plan.artifacts,
        }))?;
        return Ok(());
    }

    output.success(&format!("Widget {} created!", plan.ids.display_name))?;
    for artifact in &plan.artifacts {
        output.print(&format!(
            "  {}",
            display_path(&workspace.root, &artifact.path)
        ))?;
    }
    Ok(())
}

fn create_trait(
    workspace: &Workspace,
    name: &str,
    args: &CreateArgs,
    interactive: bool,
    prompter: &Prompter,
    output: &OutputManager,
) -> CliResult<()> {
    let traits = workspace.traits();
    let plan = traits.plan(name, &workspace.layout)?;

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create trait {}",
            plan.reference.type_name()
        ))?;
        output.print(&format!(
            "  {}",
            display_path(&workspace.root, &plan.artifact.path)
        ))?;
        return Ok(());
    }

    let existing: Vec<PathBuf> = traits.conflict(&plan).into_iter().collect();
    let overwrite = allow_overwrite(&existing, args, interactive, prompter, workspace, output)?;

    let plan = traits.create_trait(name, &workspace.layout, overwrite)?;
    let registry = traits.sync_registry(&workspace.layout)?;

    if output.is_json() {
        output.json(&json!({
            "kind": "trait",
            "trait": plan.reference,
            "file": plan.artifact,
            "registry": registry,
        }))?;
        return Ok(());
    }

    output.success(&format!("Trait {} created!", plan.reference.type_name()))?;
    output.print(&format!(
        "  {}",
        display_path(&workspace.root, &plan.artifact.path)
    ))?;
    Ok(())
}
