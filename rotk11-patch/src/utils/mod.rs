//! Shared utilities for the rotk11-patch CLI

pub mod format;
pub mod progress;
pub mod prompt;

pub use format::*;
pub use progress::*;
pub use prompt::*;
