//! `sfwp docs` - fill a widget's documentation metadata block.

use serde_json::json;
use tracing::instrument;

use crate::{
    cli::{DocsArgs, GlobalArgs, joined_name},
    commands::{Workspace, display_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: DocsArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = joined_name(&args.name);
    let workspace = Workspace::current(&global, &config)?;
    let report = workspace.docs().generate(&workspace.layout, &name)?;

    let doc = display_path(&workspace.root, &report.doc);

    if output.is_json() {
        output.json(&json!({
            "source": display_path(&workspace.root, &report.source),
            "doc": doc,
            "block": report.block,
            "remaining_placeholders": report.remaining_placeholders,
        }))?;
        return Ok(());
    }

    output.success(&format!("Documentation generated in {doc}"))?;
    if !report.block.architecture.traits.is_empty() {
        output.print(&format!(
            "  Traits: {}",
            report.block.architecture.traits.join(", ")
        ))?;
    }
    if report.remaining_placeholders > 0 {
        output.warning(&format!(
            "{} more placeholder(s) left in {doc}; run docs again to fill them",
            report.remaining_placeholders
        ))?;
    }
    Ok(())
}
