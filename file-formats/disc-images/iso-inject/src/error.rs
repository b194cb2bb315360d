//! Error types for payload validation and injection

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for injection operations
pub type Result<T> = std::result::Result<T, PatchError>;

/// Coarse classification of a [`PatchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected file is missing
    NotFound,
    /// The payload size differs from the layout's payload size
    SizeMismatch,
    /// The container could not be opened for writing
    PermissionDenied,
    /// Any other I/O fault
    IoError,
    /// Anything else
    UnknownError,
}

/// Errors that can occur while validating or injecting a payload
#[derive(Debug, Error)]
pub enum PatchError {
    /// The payload file is missing or is not a regular file
    #[error(
        "The file {} either does not exist in the {} directory or was renamed by the user.",
        .path.display(),
        .cwd.display()
    )]
    PayloadNotFound {
        /// Payload path as given
        path: PathBuf,
        /// Working directory the path was resolved against
        cwd: PathBuf,
    },

    /// Apply mode was selected without a payload argument
    #[error(
        "No file was injected, did you drag and drop the mod file or correctly use the command prompt?"
    )]
    MissingPayload,

    /// The container or an unvalidated payload vanished before the injector
    /// could open it; `path` names whichever one is missing
    #[error("The file {} does not exist.", .path.display())]
    FileNotFound {
        /// Missing container or payload
        path: PathBuf,
    },

    /// The payload has the wrong size
    #[error(
        "The file {} has a file size that does not match a valid {} file, was it incorrectly modified?",
        .path.display(),
        .resource
    )]
    SizeMismatch {
        /// Payload path
        path: PathBuf,
        /// Name of the resource the payload replaces
        resource: &'static str,
        /// Required size
        expected: u64,
        /// Actual size
        actual: u64,
    },

    /// The container cannot be opened with the required access
    #[error("Permission denied for file {}.", .path.display())]
    PermissionDenied {
        /// Offending path
        path: PathBuf,
    },

    /// I/O failure while copying the payload
    #[error("An I/O error occurred. Details: {source}")]
    Io {
        /// Container being written
        container: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Failure that is not an I/O error
    #[error("Failed to create or write to {}.", .container.display())]
    Unknown {
        /// Container being written
        container: PathBuf,
        /// Description of what went wrong
        error: String,
    },
}

impl PatchError {
    /// Classify an I/O error raised while working on `container`
    ///
    /// `path` is the file the failing call touched, which is the container
    /// for most failures but may be the payload.
    pub fn from_io(err: io::Error, path: &Path, container: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                container: container.to_path_buf(),
                source: err,
            },
        }
    }

    /// Create an Unknown error
    pub fn unknown<S: Into<String>>(container: &Path, error: S) -> Self {
        Self::Unknown {
            container: container.to_path_buf(),
            error: error.into(),
        }
    }

    /// The tagged kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PayloadNotFound { .. } | Self::MissingPayload | Self::FileNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Io { .. } => ErrorKind::IoError,
            Self::Unknown { .. } => ErrorKind::UnknownError,
        }
    }

    /// Name of the operation that raised this error, if any
    pub fn function(&self) -> Option<&'static str> {
        match self {
            Self::MissingPayload => None,
            Self::PayloadNotFound { .. } | Self::SizeMismatch { .. } => Some("validate_payload"),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::Io { .. }
            | Self::Unknown { .. } => Some("inject_payload"),
        }
    }

    /// Extra `key: value` lines worth recording alongside the message
    pub fn context(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Io { container, .. } => vec![("container", container.display().to_string())],
            Self::Unknown { error, .. } => vec![("error", error.clone())],
            _ => Vec::new(),
        }
    }
}
