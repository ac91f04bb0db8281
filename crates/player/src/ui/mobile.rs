//! Mobile layout: touch form with a class picker and a photo library.
//!
//! Core stats (hit points, armor class, proficiency, level) only accept
//! a whole number; counters accept leading digits. Ability text that is
//! not a number leaves the score alone. The portrait cannot be picked or
//! removed while the sheet is locked.

use sheetz_domain::common::ParsePolicy;
use sheetz_domain::PortraitPick;

use super::form::{self, AdapterResponse, FormAdapter, FormControl, FormField};
use crate::application::services::SheetSession;

/// Widget events the mobile screens produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileEvent {
    /// `onChangeText` on a text input
    ChangeText { field: FormField, text: String },
    /// `onSubmitEditing` (return key) on a text input
    SubmitEditing { field: FormField },
    Press(FormControl),
    /// `onValueChange` on a picker
    ValueChange { field: FormField, value: String },
}

impl MobileEvent {
    pub fn change_text(field: FormField, text: impl Into<String>) -> Self {
        Self::ChangeText {
            field,
            text: text.into(),
        }
    }

    pub fn value_change(field: FormField, value: impl Into<String>) -> Self {
        Self::ValueChange {
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileAdapter;

impl MobileAdapter {
    pub fn new() -> Self {
        Self
    }

    /// How text typed into `field` is read.
    pub fn policy_for(field: FormField) -> ParsePolicy {
        match field {
            FormField::HitPoints
            | FormField::MaxHitPoints
            | FormField::ArmorClass
            | FormField::ProficiencyBonus
            | FormField::Level => ParsePolicy::Strict,
            _ => ParsePolicy::Prefix,
        }
    }

    fn change_text(&self, session: &mut SheetSession, field: FormField, text: &str) -> AdapterResponse {
        if let FormField::Ability(ability) = field {
            if !text.is_empty() && ParsePolicy::Prefix.parse(text).is_none() {
                tracing::debug!(ability = %ability.abbreviation(), "Ignoring non-numeric ability text");
                return AdapterResponse::Ignored;
            }
        }
        form::apply_text(session, field, text, Self::policy_for(field))
    }

    fn portrait_control(&self, session: &mut SheetSession, control: FormControl) -> AdapterResponse {
        if let Err(e) = session.sheet().ensure_unlocked("portrait") {
            tracing::debug!(error = %e, "Portrait control pressed while locked");
            return AdapterResponse::Ignored;
        }
        form::press(session, control)
    }
}

impl FormAdapter for MobileAdapter {
    type Event = MobileEvent;

    fn handle(&self, session: &mut SheetSession, event: MobileEvent) -> AdapterResponse {
        match event {
            MobileEvent::ChangeText { field, text } => self.change_text(session, field, &text),
            MobileEvent::SubmitEditing { field } => form::submit(session, field),
            MobileEvent::Press(
                control @ (FormControl::PickPortrait | FormControl::RemovePortrait),
            ) => self.portrait_control(session, control),
            MobileEvent::Press(control) => form::press(session, control),
            MobileEvent::ValueChange {
                field: FormField::Class,
                value,
            } => form::apply_text(session, FormField::Class, &value, ParsePolicy::Prefix),
            MobileEvent::ValueChange { .. } => AdapterResponse::Ignored,
        }
    }

    fn portrait_picked(&self, session: &mut SheetSession, pick: PortraitPick) -> AdapterResponse {
        form::picked(session, pick)
    }
}
