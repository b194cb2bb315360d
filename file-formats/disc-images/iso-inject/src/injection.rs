//! In-place payload injection
//!
//! The injector overwrites `payload_len` bytes of the container starting at
//! the layout offset. The container is never truncated or grown: a region
//! that would run past its end is rejected before anything is written, and
//! the payload is read completely before the first container byte changes.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::InjectorConfig;
use crate::error::{PatchError, Result};
use crate::error_log::ErrorLog;

/// Outcome of a successful injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionReport {
    /// Container that was patched
    pub container: PathBuf,
    /// Payload that was written
    pub payload: PathBuf,
    /// Offset the payload was written at
    pub offset: u64,
    /// Number of bytes written
    pub bytes_written: u64,
}

/// Writes payloads into the configured container
#[derive(Debug, Clone, Copy)]
pub struct Injector<'a> {
    config: &'a InjectorConfig,
}

impl<'a> Injector<'a> {
    /// Create an injector for `config`
    pub fn new(config: &'a InjectorConfig) -> Self {
        Self { config }
    }

    /// Overwrite the container region with the full contents of `payload`
    ///
    /// The payload is not size-checked here; callers run
    /// [`validate_payload`](crate::validate_payload) first. On success any
    /// error record left by an earlier run is removed.
    pub fn inject<P: AsRef<Path>>(&self, payload: P) -> Result<InjectionReport> {
        let report = self.inject_payload(payload.as_ref())?;
        log::info!(
            "Injected {} bytes from {} into {} at {:#x}",
            report.bytes_written,
            report.payload.display(),
            report.container.display(),
            report.offset
        );

        let error_log = ErrorLog::new(&self.config.error_log);
        match error_log.clear() {
            Ok(true) => log::info!("Removed stale error record {}", error_log.path().display()),
            Ok(false) => {}
            Err(e) => log::warn!(
                "Could not remove error record {}: {e}",
                error_log.path().display()
            ),
        }

        Ok(report)
    }

    fn inject_payload(&self, payload: &Path) -> Result<InjectionReport> {
        let container_path = self.config.container.as_path();
        let offset = self.config.layout.offset;
        let io_error = |path: &Path, e: io::Error| PatchError::from_io(e, path, container_path);

        let mut container = OpenOptions::new()
            .read(true)
            .write(true)
            .open(container_path)
            .map_err(|e| io_error(container_path, e))?;
        let mut source = File::open(payload).map_err(|e| io_error(payload, e))?;
        log::debug!(
            "Opened {} for writing and {} for reading",
            container_path.display(),
            payload.display()
        );

        let payload_len = source
            .metadata()
            .map_err(|e| io_error(payload, e))?
            .len();
        let container_len = container
            .metadata()
            .map_err(|e| io_error(container_path, e))?
            .len();

        let end = offset.checked_add(payload_len).ok_or_else(|| {
            PatchError::unknown(container_path, "payload region overflows a 64-bit offset")
        })?;
        if end > container_len {
            return Err(PatchError::unknown(
                container_path,
                format!(
                    "region {offset:#x}..{end:#x} extends past the end of the container ({container_len} bytes)"
                ),
            ));
        }

        let buffer_len = usize::try_from(payload_len).map_err(|_| {
            PatchError::unknown(container_path, "payload does not fit in memory")
        })?;
        let mut data = vec![0u8; buffer_len];
        source
            .read_exact(&mut data)
            .map_err(|e| io_error(payload, e))?;

        container
            .seek(SeekFrom::Start(offset))
            .map_err(|e| io_error(container_path, e))?;
        container
            .write_all(&data)
            .map_err(|e| io_error(container_path, e))?;
        container
            .sync_all()
            .map_err(|e| io_error(container_path, e))?;

        Ok(InjectionReport {
            container: container_path.to_path_buf(),
            payload: payload.to_path_buf(),
            offset,
            bytes_written: payload_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatchLayout;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn setup(container_len: usize) -> (TempDir, InjectorConfig) {
        let dir = TempDir::new().unwrap();
        let config = InjectorConfig::new()
            .with_container(dir.path().join("disc.iso"))
            .with_restore_payload(dir.path().join("stock.bin"))
            .with_error_log(dir.path().join("errors.txt"))
            .with_layout(PatchLayout::new("TEST.BIN", 16, 8));
        fs::write(&config.container, vec![0x11; container_len]).unwrap();
        (dir, config)
    }

    #[test]
    fn test_overwrites_only_the_region() {
        let (dir, config) = setup(40);
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();

        let report = Injector::new(&config).inject(&payload).unwrap();
        assert_eq!(report.bytes_written, 8);
        assert_eq!(report.offset, 16);

        let bytes = fs::read(&config.container).unwrap();
        assert_eq!(bytes.len(), 40);
        assert_eq!(&bytes[..16], &[0x11; 16][..]);
        assert_eq!(&bytes[16..24], &[0xEE; 8][..]);
        assert_eq!(&bytes[24..], &[0x11; 16][..]);
    }

    #[test]
    fn test_success_clears_error_record() {
        let (dir, config) = setup(40);
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();
        fs::write(&config.error_log, "Error: stale\n").unwrap();

        Injector::new(&config).inject(&payload).unwrap();
        assert!(!config.error_log.exists());
    }

    #[test]
    fn test_missing_container() {
        let (dir, config) = setup(40);
        fs::remove_file(&config.container).unwrap();
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();

        let err = Injector::new(&config).inject(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            format!("The file {} does not exist.", config.container.display())
        );
        assert!(!config.container.exists());
    }

    #[test]
    fn test_missing_payload_names_payload() {
        let (dir, config) = setup(40);
        let payload = dir.path().join("absent.bin");

        let err = Injector::new(&config).inject(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("absent.bin"));
        assert_eq!(fs::read(&config.container).unwrap(), vec![0x11; 40]);
    }

    #[test]
    fn test_region_past_end_is_rejected() {
        let (dir, config) = setup(20);
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();

        let err = Injector::new(&config).inject(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownError);
        assert_eq!(fs::read(&config.container).unwrap(), vec![0x11; 20]);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_container_is_an_io_error() {
        let (dir, config) = setup(40);
        let config = config.with_container(dir.path().join("image_dir"));
        fs::create_dir(&config.container).unwrap();
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();

        let err = Injector::new(&config).inject(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoError);

        let error_log = ErrorLog::new(&config.error_log);
        error_log.record(&err).unwrap();
        let contents = fs::read_to_string(&config.error_log).unwrap();
        assert!(contents.starts_with(
            "Error in function inject_payload:\nAn I/O error occurred. Details: "
        ));
        assert!(contents.ends_with(&format!("container:\n{}\n", config.container.display())));
        assert!(config.container.is_dir());
    }

    #[test]
    fn test_failure_keeps_error_record() {
        let (dir, config) = setup(20);
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();
        fs::write(&config.error_log, "Error: stale\n").unwrap();

        assert!(Injector::new(&config).inject(&payload).is_err());
        assert!(config.error_log.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_container() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, config) = setup(40);
        let payload = dir.path().join("mod.bin");
        fs::write(&payload, [0xEE; 8]).unwrap();
        fs::set_permissions(&config.container, fs::Permissions::from_mode(0o444)).unwrap();

        // Root ignores file modes, so this branch is only exercised as a normal user.
        if OpenOptions::new().write(true).open(&config.container).is_ok() {
            return;
        }

        let err = Injector::new(&config).inject(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(
            err.to_string(),
            format!("Permission denied for file {}.", config.container.display())
        );
    }
}
