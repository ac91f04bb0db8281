//! Application services for the player
//!
//! The sheet session owns the live character; the reference service backs
//! the links panel.

mod reference_service;
mod sheet_session;

pub use reference_service::{ClassGuide, ReferenceEntry, ReferenceService, NO_CLASS_HINT};
pub use sheet_session::{
    AmountDialog, DialogKind, NumericField, PortraitPickResult, SheetChange, SheetSession,
    UserNotice,
};
