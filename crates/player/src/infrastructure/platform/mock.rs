//! In-memory platform implementations for tests and headless runs

use crate::ports::outbound::platform::{LinkOpener, PlatformError, StorageProvider};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage provider backed by a shared `HashMap`
///
/// Clones share the same map, so a test can keep one handle and inspect
/// what the code under test wrote.
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MockStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn with_values<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R, PlatformError> {
        self.values
            .lock()
            .map(|mut guard| f(&mut guard))
            .map_err(|_| PlatformError::storage("mock storage lock poisoned"))
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        if self.fail_writes {
            return Err(PlatformError::storage("writes disabled"));
        }
        self.with_values(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn load(&self, key: &str) -> Option<String> {
        self.with_values(|values| values.get(key).cloned())
            .ok()
            .flatten()
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        if self.fail_writes {
            return Err(PlatformError::storage("writes disabled"));
        }
        self.with_values(|values| {
            values.remove(key);
        })
    }
}

/// Link opener that records every URL instead of opening it
#[derive(Clone, Default)]
pub struct RecordingLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        self.opened
            .lock()
            .map(|mut guard| guard.push(url.to_string()))
            .map_err(|_| PlatformError::link(url, "recorder lock poisoned"))
    }
}

/// Create an in-memory platform. Returns the handles for inspection.
pub fn create_mock_platform() -> (Platform, MockStorageProvider, RecordingLinkOpener) {
    let storage = MockStorageProvider::new();
    let links = RecordingLinkOpener::new();
    let platform = Platform::new(storage.clone(), links.clone());
    (platform, storage, links)
}
