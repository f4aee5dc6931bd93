//! `sfwp add:trait` - inject traits into an existing widget.

use serde_json::json;
use tracing::instrument;

use sfwp_core::{
    domain::{FragmentOutcome, FragmentReport, TraitReference},
    error::SfwpError,
};

use crate::{
    cli::{AddTraitArgs, GlobalArgs},
    commands::{Workspace, display_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(widget = %args.to))]
pub fn execute(
    args: AddTraitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let traits = TraitReference::parse_list(&args.traits).map_err(SfwpError::from)?;
    let workspace = Workspace::current(&global, &config)?;

    let report = workspace
        .traits()
        .inject(&workspace.layout, &args.to, &traits)?;

    let shown = display_path(&workspace.root, &report.path);

    if output.is_json() {
        output.json(&json!({
            "widget": shown,
            "changed": report.written(),
            "inserted": report.outcome.inserted(),
            "traits": report.outcome.reports,
        }))?;
        return Ok(());
    }

    for trait_report in &report.outcome.reports {
        for fragment in &trait_report.fragments {
            show_fragment(fragment, &output)?;
        }
    }

    if report.written() {
        output.success(&format!("Updated {shown}"))?;
    } else {
        output.info(&format!("No changes needed in {shown}"))?;
    }
    Ok(())
}

fn show_fragment(fragment: &FragmentReport, output: &OutputManager) -> std::io::Result<()> {
    let line = fragment.to_string();
    match fragment.outcome {
        FragmentOutcome::Inserted => output.success(&line),
        FragmentOutcome::AlreadyPresent => output.info(&line),
        FragmentOutcome::TargetNotFound => output.warning(&line),
    }
}
