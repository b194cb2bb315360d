//! Root CLI structure for rotk11-patch

use clap::{Parser, ValueEnum};
use iso_inject::config::{
    ERROR_LOG_FILE, ROTK11_FILE, ROTK11_RES_FILE, SAN11RES_FILE_SIZE, SAN11RES_NAME,
    SCENARIO_FILE_OFFSET,
};
use iso_inject::{InjectorConfig, PatchLayout, PatchMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rotk11-patch")]
#[command(
    about = "Apply or disable a SAN11RES.BIN scenario mod inside a ROTK XI PS2 disc image",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Mod file to inject (a modified SAN11RES.BIN), used in apply mode
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<PathBuf>,

    /// Run in this mode instead of asking
    #[arg(short, long, value_enum, ignore_case = true, env = "ROTK11_MODE")]
    pub mode: Option<ModeArg>,

    /// Disc image to patch in place
    #[arg(long, value_name = "FILE", env = "ROTK11_CONTAINER", default_value = ROTK11_FILE)]
    pub container: PathBuf,

    /// Stock scenario archive injected when disabling a mod
    #[arg(long, value_name = "FILE", env = "ROTK11_RESTORE_PAYLOAD", default_value = ROTK11_RES_FILE)]
    pub restore_payload: PathBuf,

    /// File failures are appended to
    #[arg(long, value_name = "FILE", env = "ROTK11_ERROR_LOG", default_value = ERROR_LOG_FILE)]
    pub error_log: PathBuf,

    /// Byte offset of the scenario archive inside the image (decimal or 0x-prefixed hex)
    #[arg(long, value_name = "OFFSET", env = "ROTK11_OFFSET", value_parser = parse_u64, default_value_t = SCENARIO_FILE_OFFSET)]
    pub offset: u64,

    /// Exact size a payload must have, in bytes
    #[arg(long, value_name = "BYTES", env = "ROTK11_PAYLOAD_SIZE", value_parser = parse_u64, default_value_t = SAN11RES_FILE_SIZE)]
    pub payload_size: u64,

    /// Exit without waiting for Enter after a successful run
    #[arg(long)]
    pub no_pause: bool,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Inject the given mod file
    Apply,
    /// Re-inject the stock scenario archive
    Disable,
}

impl From<ModeArg> for PatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Apply => Self::Apply,
            ModeArg::Disable => Self::Disable,
        }
    }
}

impl Cli {
    /// Build the injector configuration from the parsed flags
    pub fn config(&self) -> InjectorConfig {
        InjectorConfig::new()
            .with_container(&self.container)
            .with_restore_payload(&self.restore_payload)
            .with_error_log(&self.error_log)
            .with_layout(PatchLayout::new(
                SAN11RES_NAME,
                self.offset,
                self.payload_size,
            ))
    }

    /// Log level selected by `-v`/`-q`, `warn` when neither is given
    pub fn log_filter(&self) -> log::LevelFilter {
        match (self.verbose, self.quiet) {
            (0, true) => log::LevelFilter::Error,
            (0, false) => log::LevelFilter::Warn,
            (1, _) => log::LevelFilter::Info,
            (2, _) => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal byte count
fn parse_u64(value: &str) -> Result<u64, String> {
    let value = value.trim().replace('_', "");
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid number '{value}': {e}"))
}
