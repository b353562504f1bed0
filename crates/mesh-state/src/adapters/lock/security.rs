//! # Lock Safety
//!
//! - Stale locks are detected via PID check
//! - Acquisition is non-blocking with a bounded retry window

use std::time::Duration;

/// Default time to wait for a held lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for the retry backoff.
pub const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Checks if a process with the given PID is still running.
pub fn is_process_running(pid: u32) -> bool {
    #[cfg(unix)]
    {
        std::path::Path::new(&format!("/proc/{}", pid)).exists()
    }

    #[cfg(not(unix))]
    {
        // Without /proc, assume the holder is alive.
        let _ = pid;
        true
    }
}
