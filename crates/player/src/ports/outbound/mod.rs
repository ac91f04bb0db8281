//! Outbound ports - what the player needs from the platform it runs on

pub mod platform;

pub use platform::{storage_keys, LinkOpener, PlatformError, StorageProvider};

#[cfg(any(test, feature = "testing"))]
pub use platform::MockLinkOpener;
