//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific service implementations
//! behind port traits, type-erased into `Arc<dyn>` fields.
//!
//! Usage:
//! - Created by `create_platform()` factory in platform/desktop.rs or platform/wasm.rs
//! - Handed to the runner, which builds the theme preference and reference panel from it

use std::sync::Arc;

use crate::ports::outbound::{LinkOpener, PlatformError, StorageProvider};

/// Platform services handed to the runner
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    links: Arc<dyn LinkOpener>,
}

// =============================================================================
// Dynamic trait versions for Arc storage
// =============================================================================

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError>;
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str) -> Result<(), PlatformError>;
}

// =============================================================================
// Blanket impls: any port implementation is object-safe storage
// =============================================================================

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        StorageProvider::remove(self, key)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Wrap concrete providers.
    pub fn new<S, L>(storage: S, links: L) -> Self
    where
        S: StorageProvider + Send + Sync,
        L: LinkOpener + 'static,
    {
        Self {
            storage: Arc::new(storage),
            links: Arc::new(links),
        }
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) -> Result<(), PlatformError> {
        self.storage.remove(key)
    }

    /// Storage as a cloneable `StorageProvider`.
    ///
    /// # Example
    /// ```ignore
    /// let theme = ThemePreference::load(platform.storage_adapter());
    /// ```
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Link operations
    // -------------------------------------------------------------------------

    /// Shared handle to the link opener
    pub fn link_opener(&self) -> Arc<dyn LinkOpener> {
        Arc::clone(&self.links)
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// `StorageProvider` view of the platform's storage, for consumers that
/// are generic over the port (the theme preference).
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        self.platform.storage_remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockStorageProvider;
    use crate::ports::outbound::MockLinkOpener;
    use mockall::predicate::eq;

    #[test]
    fn storage_adapter_shares_the_platform_storage() {
        let storage = MockStorageProvider::new();
        let platform = Platform::new(storage.clone(), MockLinkOpener::new());

        StorageProvider::save(&platform.storage_adapter(), "k", "v").unwrap();
        assert_eq!(StorageProvider::load(&storage, "k").as_deref(), Some("v"));
        assert_eq!(platform.storage_load("k").as_deref(), Some("v"));

        platform.storage_remove("k").unwrap();
        assert_eq!(StorageProvider::load(&platform.storage_adapter(), "k"), None);
    }

    #[test]
    fn link_opener_is_the_wrapped_opener() {
        let mut links = MockLinkOpener::new();
        links
            .expect_open()
            .with(eq("https://example.test/"))
            .times(1)
            .returning(|_| Ok(()));
        let platform = Platform::new(MockStorageProvider::new(), links);

        platform.link_opener().open("https://example.test/").unwrap();
    }
}
