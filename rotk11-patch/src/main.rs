//! Main entry point for the rotk11-patch CLI

mod cli;
mod commands;
mod utils;

use clap::Parser;
use iso_inject::{ErrorLog, InjectorConfig, PatchError};
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still takes precedence over -v/-q
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_filter().as_str()),
    )
    .init();

    let config = cli.config();
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    match commands::inject::execute(&cli, &config, &mut input, &mut output) {
        Ok(_) => {
            if !cli.no_pause
                && let Err(e) = utils::wait_for_exit(&mut input, &mut output)
            {
                log::debug!("Exit prompt failed: {e}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            record_failure(&config, &err);
            ExitCode::FAILURE
        }
    }
}

/// Append `err` to the error record; the exit code is failure either way
fn record_failure(config: &InjectorConfig, err: &anyhow::Error) {
    log::debug!("Run failed: {err:#}");

    let error_log = ErrorLog::new(&config.error_log);
    let written = match err.downcast_ref::<PatchError>() {
        Some(patch_err) => error_log.record(patch_err),
        None => error_log.append(None, &format!("{err:#}"), &[]),
    };
    if let Err(e) = written {
        eprintln!("Failed to write to error log: {e}");
    }
}
