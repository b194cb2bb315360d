//! Payload validation

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PatchLayout;
use crate::error::{PatchError, Result};

/// Check that `path` is a regular file of exactly `layout.payload_size` bytes
///
/// Only existence and size are checked; the content is never inspected.
/// Returns the verified size.
pub fn validate_payload<P: AsRef<Path>>(path: P, layout: &PatchLayout) -> Result<u64> {
    let path = path.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => {
            return Err(PatchError::PayloadNotFound {
                path: path.to_path_buf(),
                cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            });
        }
    };

    let actual = metadata.len();
    if actual != layout.payload_size {
        return Err(PatchError::SizeMismatch {
            path: path.to_path_buf(),
            resource: layout.name,
            expected: layout.payload_size,
            actual,
        });
    }

    log::debug!("{} is a valid {} ({actual} bytes)", path.display(), layout.name);
    Ok(actual)
}
