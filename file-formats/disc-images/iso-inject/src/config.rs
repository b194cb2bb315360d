//! Patch layout and run configuration

use std::path::{Path, PathBuf};

/// Byte offset of `SAN11RES.BIN` inside the ROTK XI PS2 disc image
pub const SCENARIO_FILE_OFFSET: u64 = 0x0069_9800;

/// Exact size of a valid `SAN11RES.BIN` scenario archive
pub const SAN11RES_FILE_SIZE: u64 = 467_015_680;

/// Name of the scenario archive, used in size mismatch messages
pub const SAN11RES_NAME: &str = "SAN11RES.BIN";

/// Default disc image file name
pub const ROTK11_FILE: &str = "ROTKXI.iso";

/// Default restore payload, a stock `SAN11RES.BIN`
pub const ROTK11_RES_FILE: &str = SAN11RES_NAME;

/// Default error record file name
pub const ERROR_LOG_FILE: &str = "ROTK11_Injection_Error.txt";

/// Where the patchable region lives inside a container and how large it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLayout {
    /// Human name of the resource occupying the region
    pub name: &'static str,
    /// Byte offset of the region inside the container
    pub offset: u64,
    /// Exact size a payload must have
    pub payload_size: u64,
}

impl PatchLayout {
    /// Scenario archive region of the ROTK XI PS2 image
    pub const ROTK11_SCENARIO: Self =
        Self::new(SAN11RES_NAME, SCENARIO_FILE_OFFSET, SAN11RES_FILE_SIZE);

    /// Create a layout
    pub const fn new(name: &'static str, offset: u64, payload_size: u64) -> Self {
        Self {
            name,
            offset,
            payload_size,
        }
    }

    /// First byte past the region
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.payload_size)
    }
}

impl Default for PatchLayout {
    fn default() -> Self {
        Self::ROTK11_SCENARIO
    }
}

/// Files and layout used by a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectorConfig {
    /// Container (disc image) to patch in place
    pub container: PathBuf,
    /// Payload re-injected when disabling a mod
    pub restore_payload: PathBuf,
    /// Append-only error record
    pub error_log: PathBuf,
    /// Region being patched
    pub layout: PatchLayout,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            container: PathBuf::from(ROTK11_FILE),
            restore_payload: PathBuf::from(ROTK11_RES_FILE),
            error_log: PathBuf::from(ERROR_LOG_FILE),
            layout: PatchLayout::default(),
        }
    }
}

impl InjectorConfig {
    /// Create a configuration for the reference deployment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container path
    pub fn with_container<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.container = path.as_ref().to_path_buf();
        self
    }

    /// Set the restore payload path
    pub fn with_restore_payload<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.restore_payload = path.as_ref().to_path_buf();
        self
    }

    /// Set the error record path
    pub fn with_error_log<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.error_log = path.as_ref().to_path_buf();
        self
    }

    /// Set the patch layout
    pub fn with_layout(mut self, layout: PatchLayout) -> Self {
        self.layout = layout;
        self
    }
}
