//! # File Lock Implementation
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on Windows).

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;

use super::security::{is_process_running, DEFAULT_LOCK_TIMEOUT, MAX_RETRY_DELAY};

/// Errors from installation locking
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    /// Lock file could not be created
    #[error("Failed to create lock file: {0}")]
    CreateFailed(io::Error),
    /// Installation is already locked by another process
    #[error("Mesh state already in use (holder pid {pid:?}, lock file {path:?})")]
    AlreadyLocked { pid: Option<u32>, path: PathBuf },
    /// Failed to write PID to lock file
    #[error("Failed to write PID to lock file: {0}")]
    WriteFailed(io::Error),
}

/// Exclusive lock on a state data directory.
///
/// Held for the lifetime of the value, released on drop.
///
/// # Example
///
/// ```ignore
/// let lock = InstallationLock::acquire(Path::new("/var/lib/mesh"))?;
/// // Lock is held until `lock` goes out of scope
/// ```
pub struct InstallationLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
    /// PID of this process
    pid: u32,
}

impl InstallationLock {
    /// Lock file name
    const LOCK_FILE: &'static str = "LOCK";

    /// Acquire the lock, waiting up to `DEFAULT_LOCK_TIMEOUT`.
    pub fn acquire(data_dir: &Path) -> Result<Self, LockError> {
        Self::acquire_with_timeout(data_dir, DEFAULT_LOCK_TIMEOUT)
    }

    /// Acquire the lock, retrying with exponential backoff until `timeout`.
    ///
    /// A lock left behind by a dead process is taken over immediately.
    ///
    /// # Errors
    ///
    /// Returns `LockError::AlreadyLocked` if another holder keeps the lock
    /// past the timeout.
    pub fn acquire_with_timeout(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        std::fs::create_dir_all(data_dir).map_err(LockError::CreateFailed)?;

        let deadline = Instant::now() + timeout;
        let lock_path = data_dir.join(Self::LOCK_FILE);
        let mut retry_delay = Duration::from_millis(50);

        loop {
            // Not truncated here: the holder's PID must stay readable.
            let file = OpenOptions::new()
                .create(true)
                .read(true)
                .write(true)
                .truncate(false)
                .open(&lock_path)
                .map_err(LockError::CreateFailed)?;

            match file.try_lock_exclusive() {
                Ok(()) => {
                    let pid = std::process::id();
                    let mut locked_file = file;
                    locked_file.set_len(0).map_err(LockError::WriteFailed)?;
                    writeln!(locked_file, "{}", pid).map_err(LockError::WriteFailed)?;
                    locked_file.sync_all().map_err(LockError::WriteFailed)?;

                    tracing::debug!("[mesh-state] Acquired lock {}", lock_path.display());
                    return Ok(Self {
                        file: locked_file,
                        path: lock_path,
                        pid,
                    });
                }
                Err(_) => {
                    let existing_pid = Self::read_existing_pid(&lock_path);

                    if let Some(pid) = existing_pid {
                        if !is_process_running(pid) {
                            tracing::warn!(
                                "[mesh-state] Removing stale lock held by dead process {}",
                                pid
                            );
                            drop(file);
                            let _ = std::fs::remove_file(&lock_path);
                            continue;
                        }
                    }

                    if Instant::now() >= deadline {
                        return Err(LockError::AlreadyLocked {
                            pid: existing_pid,
                            path: lock_path,
                        });
                    }

                    drop(file);
                    std::thread::sleep(retry_delay);
                    retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
                }
            }
        }
    }

    /// Get the PID of the process holding the lock
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read PID from existing lock file (for error messages)
    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for InstallationLock {
    fn drop(&mut self) {
        #[allow(clippy::incompatible_msrv)]
        let _ = self.file.unlock();
        let _ = std::fs::remove_file(&self.path);
    }
}
