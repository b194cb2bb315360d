//! Fixed-region payload injection for disc images.
//!
//! This crate overwrites a fixed-length region at a known byte offset inside
//! a large container file (a disc image) with the contents of a payload file
//! of exactly that length. It is the engine behind the `rotk11-patch` tool,
//! which swaps the `SAN11RES.BIN` scenario archive inside a Romance of the
//! Three Kingdoms XI PS2 image.
//!
//! Every operation returns a [`Result`] tagged with a [`PatchError`]; nothing
//! in here terminates the process or talks to the terminal. Callers record
//! failures with [`ErrorLog`] and decide how to exit.
//!
//! # Examples
//!
//! ```no_run
//! use iso_inject::{InjectorConfig, PatchMode, run};
//! use std::path::Path;
//!
//! let config = InjectorConfig::default();
//! let report = run(PatchMode::Apply, Some(Path::new("MyMod.BIN")), &config)?;
//! println!("wrote {} bytes at {:#x}", report.bytes_written, report.offset);
//! # Ok::<(), iso_inject::PatchError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod error_log;
pub mod injection;
pub mod mode;
pub mod validation;

pub use config::{InjectorConfig, PatchLayout};
pub use error::{ErrorKind, PatchError, Result};
pub use error_log::ErrorLog;
pub use injection::{InjectionReport, Injector};
pub use mode::{InvalidMode, PatchMode, run};
pub use validation::validate_payload;
