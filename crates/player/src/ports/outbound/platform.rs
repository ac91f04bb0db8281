//! Platform abstraction ports
//!
//! Session and adapter code depends on these traits; the implementations
//! live in `infrastructure::platform`.
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use thiserror::Error;

/// Failure reported by a platform service.
///
/// None of these abort the session. Callers log them and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to open {url}: {reason}")]
    Link { url: String, reason: String },

    #[error("not supported on this platform: {0}")]
    Unsupported(&'static str),
}

impl PlatformError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn link(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError>;

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), PlatformError>;
}

/// Opens an external URL in the user's browser.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

/// Storage key constants
pub mod storage_keys {
    /// Dark mode flag, stored as JSON text (`"true"` / `"false"`)
    pub const DARK_MODE: &str = "darkMode";
}
