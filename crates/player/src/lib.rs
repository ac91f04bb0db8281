//! Sheetz Player crate.
//!
//! The sheet session, the browser and mobile form adapters, and the
//! platform adapters for preference storage and link opening.
//! Platform support is selected at compile time via `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use application::services::SheetSession;
pub use state::Platform;
pub use ui::ShellKind;
