//! Working-directory guard for tests.
//!
//! The working directory is process-global, so tests that run the generator
//! against `.` must not overlap. [`set_dir`] takes a global lock and returns
//! a guard that restores the previous directory when dropped.
//!
//! ```no_run
//! use partial_test_helpers::cwd;
//!
//! let guard = cwd::set_dir("/tmp/models").expect("enter models dir");
//! // Relative paths now resolve against `/tmp/models`.
//! guard.restore().expect("leave models dir");
//! ```

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use parking_lot::{Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the previous working directory on drop.
#[must_use = "dropping restores the previous working directory"]
pub struct CwdGuard {
    previous: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// Directory that will be restored.
    #[must_use]
    pub fn previous(&self) -> &Utf8PathBuf {
        &self.previous
    }

    /// Restores the previous directory, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be entered.
    pub fn restore(&self) -> Result<()> {
        std::env::set_current_dir(&self.previous)
            .with_context(|| format!("restore working directory {}", self.previous))
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ignored = std::env::set_current_dir(&self.previous);
    }
}

/// Enters `path` and returns a guard holding the global lock.
///
/// The previous directory is read and checked for UTF-8 before moving, so a
/// failure leaves the process where it was.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or is not UTF-8,
/// or if `path` cannot be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_LOCK.lock();
    let current = std::env::current_dir().context("read working directory")?;
    let previous = Utf8PathBuf::from_path_buf(current)
        .map_err(|path| anyhow!("working directory is not UTF-8: {}", path.display()))?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(CwdGuard {
        previous,
        _lock: lock,
    })
}
