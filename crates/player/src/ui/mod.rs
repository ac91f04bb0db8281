//! Presentation boundary: the two form layouts.
//!
//! Each layout has its own widget events and translates them into
//! `SheetSession` operations. Neither re-derives any arithmetic.

use std::fmt;
use std::str::FromStr;

use sheetz_domain::SheetDefaults;

pub mod browser;
pub mod console;
pub mod form;
pub mod mobile;

pub use browser::{BrowserAdapter, BrowserEvent};
pub use console::Command;
pub use form::{AdapterResponse, FormAdapter, FormControl, FormField};
pub use mobile::{MobileAdapter, MobileEvent};

/// Shell variant for layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Browser,
    Mobile,
}

impl ShellKind {
    /// Starting values of a fresh sheet in this layout.
    pub fn sheet_defaults(&self) -> SheetDefaults {
        match self {
            Self::Browser => SheetDefaults::BROWSER,
            Self::Mobile => SheetDefaults::MOBILE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" | "web" | "desktop" => Ok(Self::Browser),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {other}")),
        }
    }
}
