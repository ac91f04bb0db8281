//! Portrait image reference and the result of asking the user for one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque image reference: a file URI, a blob URL or a data URL.
///
/// The model never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portrait(String);

impl Portrait {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Portrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an image picker handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortraitPick {
    /// The user chose an image
    Picked(Portrait),
    /// The picker was dismissed
    Cancelled,
    /// The platform refused access to the photo library
    PermissionDenied,
}

impl PortraitPick {
    pub fn picked(reference: impl Into<String>) -> Self {
        Self::Picked(Portrait::new(reference))
    }
}
