//! ROTK11 patch library
//!
//! Command-line front end for the `iso-inject` engine: argument parsing,
//! interactive prompts and console output.

pub mod cli;
pub mod commands;
pub mod utils;
