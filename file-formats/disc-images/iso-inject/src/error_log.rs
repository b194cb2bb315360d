//! Append-only error record kept next to the tool
//!
//! Each failed run appends a plain-text block describing what went wrong.
//! The file is removed again by the next successful injection, so its mere
//! presence tells the user the last run did not finish.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::PatchError;

/// Human-readable failure record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// Create a handle for the record at `path`; nothing is touched on disk
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the record
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a record currently exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append one failure block
    pub fn append(
        &self,
        function: Option<&str>,
        message: &str,
        context: &[(&str, String)],
    ) -> io::Result<()> {
        let mut block = match function {
            Some(name) => format!("Error in function {name}:\n{message}\n"),
            None => format!("Error: {message}\n"),
        };
        for (key, value) in context {
            block.push_str(&format!("{key}:\n{value}\n"));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;

        log::debug!("Recorded failure in {}", self.path.display());
        Ok(())
    }

    /// Append the block describing `err`
    pub fn record(&self, err: &PatchError) -> io::Result<()> {
        self.append(err.function(), &err.to_string(), &err.context())
    }

    /// Remove the record; returns whether a file was removed
    pub fn clear(&self) -> io::Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
