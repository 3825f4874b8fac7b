//! Environment variable guards for tests.
//!
//! Mutations take a global lock and return a guard that restores the
//! previous value, or removes the variable, when dropped. Guards for the same
//! key restore in LIFO order.
//!
//! ```
//! use partial_test_helpers::env;
//!
//! let _guard = env::set_var("PARTIALGEN_CRATE_PATH", "crate::partial");
//! assert_eq!(std::env::var("PARTIALGEN_CRATE_PATH").as_deref(), Ok("crate::partial"));
//! ```

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::ReentrantMutex;

static ENV_LOCK: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Restores one environment variable on drop.
#[must_use = "dropping restores the previous value"]
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_previous", &self.previous.is_some())
            .finish()
    }
}

fn mutate(key: impl Into<String>, change: impl FnOnce(&str)) -> EnvVarGuard {
    let key = key.into();
    let _lock = ENV_LOCK.lock();
    let previous = std::env::var_os(&key);
    change(&key);
    EnvVarGuard { key, previous }
}

/// Sets `key` to `value` until the guard is dropped.
pub fn set_var(key: impl Into<String>, value: impl AsRef<OsStr>) -> EnvVarGuard {
    // SAFETY: every mutation made through this module holds `ENV_LOCK`.
    mutate(key, |key| unsafe { std::env::set_var(key, value.as_ref()) })
}

/// Removes `key` until the guard is dropped.
pub fn remove_var(key: impl Into<String>) -> EnvVarGuard {
    // SAFETY: every mutation made through this module holds `ENV_LOCK`.
    mutate(key, |key| unsafe { std::env::remove_var(key) })
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_LOCK.lock();
        match self.previous.take() {
            // SAFETY: `ENV_LOCK` is held.
            Some(value) => unsafe { std::env::set_var(&self.key, value) },
            // SAFETY: `ENV_LOCK` is held.
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}
