//! `sfwp zip` - archive the current directory.

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, ZipArgs},
    commands::{Workspace, display_path},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.filename))]
pub fn execute(
    args: ZipArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = Workspace::current(&global, &config)?;

    let spinner = output.spinner("Zipping...");
    let result = workspace.archive().archive(&workspace.root, &args.filename);
    spinner.finish_and_clear();
    let summary = result?;

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.success(&format!(
        "Created {} ({} files, {})",
        display_path(&workspace.root, &summary.path),
        summary.files,
        human_size(summary.bytes)
    ))?;
    Ok(())
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
