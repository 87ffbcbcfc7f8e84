//! Scoped Ctrl+C handling around blocking child-process waits.
//!
//! While the compiler or the built application runs in the foreground, a
//! Ctrl+C must reach the child (which dies from it) without killing this
//! tool; the child's termination is then reported as a user-initiated stop.
//! [`InterruptGuard`] ignores SIGINT for its lifetime and restores the
//! previous disposition on drop. On non-unix targets both the guard and
//! the classification are no-ops and a child's exit status is taken at
//! face value.

use std::process::ExitStatus;

/// Ignores SIGINT in this process while alive.
///
/// Signal dispositions are process-global, so at most one guard should be
/// live at a time; the strictly sequential action pipeline guarantees that.
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

impl InterruptGuard {
    /// Start ignoring SIGINT until the guard is dropped.
    #[cfg(unix)]
    pub fn new() -> Self {
        // SAFETY: SIG_IGN is a valid disposition for SIGINT; the returned
        // previous handler is restored verbatim in Drop.
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self { previous }
    }

    /// Start ignoring SIGINT until the guard is dropped.
    #[cfg(not(unix))]
    pub fn new() -> Self {
        Self {}
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            // SAFETY: `previous` came from the matching signal() call above.
            unsafe {
                libc::signal(libc::SIGINT, self.previous);
            }
        }
    }
}

/// Whether a child exit status means the user stopped it with Ctrl+C.
#[cfg(unix)]
pub fn stopped_by_user(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;

    status.signal() == Some(libc::SIGINT)
}

/// Whether a child exit status means the user stopped it with Ctrl+C.
#[cfg(not(unix))]
pub fn stopped_by_user(_status: ExitStatus) -> bool {
    false
}
