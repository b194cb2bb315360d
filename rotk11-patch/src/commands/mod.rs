//! Command implementations

pub mod inject;
