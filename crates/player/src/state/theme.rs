//! Dark mode preference.
//!
//! Read once at startup and written back on every change. Absent or
//! unreadable stored values mean light mode.

use crate::ports::outbound::{storage_keys, StorageProvider};

/// The persisted dark mode flag.
#[derive(Clone)]
pub struct ThemePreference<S: StorageProvider> {
    storage: S,
    dark_mode: bool,
}

impl<S: StorageProvider> ThemePreference<S> {
    /// Load the stored flag.
    pub fn load(storage: S) -> Self {
        let dark_mode = match storage.load(storage_keys::DARK_MODE) {
            Some(raw) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                tracing::warn!(value = %raw, "Ignoring unreadable dark mode value: {}", e);
                false
            }),
            None => false,
        };
        tracing::debug!(dark_mode, "Theme preference loaded");
        Self { storage, dark_mode }
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Set the flag and persist it. Storage failures are logged; the
    /// in-memory flag changes regardless.
    pub fn set_dark(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        tracing::info!(dark_mode, "Theme changed");
        let encoded = serde_json::Value::Bool(dark_mode).to_string();
        if let Err(e) = self.storage.save(storage_keys::DARK_MODE, &encoded) {
            tracing::warn!("Failed to persist dark mode: {}", e);
        }
    }

    /// Flip the flag. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark_mode);
        self.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockStorageProvider;

    #[test]
    fn absent_value_means_light() {
        let theme = ThemePreference::load(MockStorageProvider::new());
        assert!(!theme.is_dark());
    }

    #[test]
    fn reads_stored_json() {
        let storage = MockStorageProvider::new();
        storage.save(storage_keys::DARK_MODE, "true").unwrap();
        assert!(ThemePreference::load(storage).is_dark());
    }

    #[test]
    fn unreadable_value_means_light() {
        let storage = MockStorageProvider::new();
        storage.save(storage_keys::DARK_MODE, "yes please").unwrap();
        assert!(!ThemePreference::load(storage).is_dark());
    }

    #[test]
    fn toggle_writes_through() {
        let storage = MockStorageProvider::new();
        let mut theme = ThemePreference::load(storage.clone());

        assert!(theme.toggle());
        assert_eq!(storage.load(storage_keys::DARK_MODE).as_deref(), Some("true"));

        assert!(!theme.toggle());
        assert_eq!(storage.load(storage_keys::DARK_MODE).as_deref(), Some("false"));
    }

    #[test]
    fn write_failure_keeps_the_in_memory_flag() {
        let storage = MockStorageProvider::failing();
        let mut theme = ThemePreference::load(storage);
        theme.set_dark(true);
        assert!(theme.is_dark());
    }
}
