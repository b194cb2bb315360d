//! Apply/disable dispatch

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::config::InjectorConfig;
use crate::error::{PatchError, Result};
use crate::injection::{InjectionReport, Injector};
use crate::validation::validate_payload;

/// What a run does to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchMode {
    /// Inject a user-supplied mod payload
    Apply,
    /// Re-inject the configured restore payload
    Disable,
}

impl PatchMode {
    /// Lowercase name as typed by the user
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for PatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an answer is neither `apply` nor `disable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMode(
    /// The rejected answer
    pub String,
);

impl fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The answer given '{}' was not a valid answer.", self.0)
    }
}

impl std::error::Error for InvalidMode {}

impl FromStr for PatchMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apply" => Ok(Self::Apply),
            "disable" => Ok(Self::Disable),
            _ => Err(InvalidMode(s.trim().to_string())),
        }
    }
}

/// Validate the payload for `mode` and inject it
///
/// In [`PatchMode::Apply`] the payload is `payload_arg`, which must be given.
/// In [`PatchMode::Disable`] it is the configured restore payload and
/// `payload_arg` is ignored.
pub fn run(
    mode: PatchMode,
    payload_arg: Option<&Path>,
    config: &InjectorConfig,
) -> Result<InjectionReport> {
    let payload = match mode {
        PatchMode::Apply => payload_arg.ok_or(PatchError::MissingPayload)?,
        PatchMode::Disable => config.restore_payload.as_path(),
    };
    log::debug!("Mode {mode}: payload {}", payload.display());

    validate_payload(payload, &config.layout)?;
    Injector::new(config).inject(payload)
}
