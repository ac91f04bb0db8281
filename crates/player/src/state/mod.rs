//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate services and adapters,
//! plus the UI preference that outlives any single character sheet.

mod platform;
mod theme;

pub use platform::{Platform, PlatformStorageAdapter};
pub use theme::ThemePreference;
