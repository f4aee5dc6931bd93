//! `sfwp debug on|off` - toggle WordPress debugging in `wp-config.php`.

use serde_json::json;
use tracing::instrument;

use sfwp_core::domain::{DebugMode, GuardChange};

use crate::{
    cli::{DebugArgs, GlobalArgs},
    commands::Workspace,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(mode = ?args.mode))]
pub fn execute(
    args: DebugArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mode = DebugMode::from(args.mode);
    let workspace = Workspace::current(&global, &config)?;
    let report = workspace.debug().toggle(&workspace.root, mode)?;

    if output.is_json() {
        output.json(&json!({
            "config": report.path,
            "mode": report.mode,
            "changed": report.written(),
            "guard": report.toggle.guard,
        }))?;
        return Ok(());
    }

    let path = report.path.display();
    match (mode, report.written()) {
        (_, false) => output.info(&format!("Debug mode already {mode} in {path}"))?,
        (DebugMode::On, true) => output.success(&format!("Debug mode enabled in {path}"))?,
        (DebugMode::Off, true) => output.success(&format!("Debug mode disabled in {path}"))?,
    }

    match report.toggle.guard {
        GuardChange::Inserted => output.print("  Added WP_DEBUG_LOG / WP_DEBUG_DISPLAY guards")?,
        GuardChange::Removed => output.print("  Removed WP_DEBUG_LOG / WP_DEBUG_DISPLAY guards")?,
        GuardChange::AlreadyPresent | GuardChange::Absent => {}
    }
    if !report.toggle.flag_found {
        output.warning("No WP_DEBUG define found; nothing to switch")?;
    }

    if mode.is_on() {
        output.print("")?;
        output.print("Log from PHP with:")?;
        output.print("  error_log( print_r( $value, true ) );")?;
        output.print("Messages are written to wp-content/debug.log")?;
    }
    Ok(())
}
