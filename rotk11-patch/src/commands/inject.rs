//! Apply/disable command implementation

use anyhow::Result;
use console::style;
use iso_inject::{InjectionReport, InjectorConfig, PatchMode, run};
use std::io::{BufRead, Write};

use crate::cli::Cli;
use crate::utils::{create_spinner, format_bytes, format_offset, hidden_spinner, prompt_mode};

/// Pick the mode, then validate and inject the matching payload
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    config: &InjectorConfig,
    input: &mut R,
    output: &mut W,
) -> Result<InjectionReport> {
    let mode = match cli.mode {
        Some(mode) => PatchMode::from(mode),
        None => prompt_mode(input, output)?,
    };
    log::info!(
        "Running in {mode} mode against {}",
        config.container.display()
    );

    let spinner = if cli.quiet {
        hidden_spinner()
    } else {
        create_spinner(&format!("Writing {}...", config.container.display()))
    };
    let result = run(mode, cli.payload.as_deref(), config);
    spinner.finish_and_clear();
    let report = result?;

    if !cli.quiet {
        let action = match mode {
            PatchMode::Apply => "Applied",
            PatchMode::Disable => "Disabled mod, restored",
        };
        let summary = writeln!(
            output,
            "{} {action} {} to {} ({} at {})",
            style("✓").green(),
            style(report.payload.display()).cyan(),
            style(report.container.display()).cyan(),
            format_bytes(report.bytes_written),
            style(format_offset(report.offset)).yellow()
        );
        // The container is already patched, so a closed stdout is not a failure.
        if let Err(e) = summary {
            log::warn!("Could not print summary: {e}");
        }
    }

    Ok(report)
}
