//! Widget identifiers and the contract both layouts implement.

use sheetz_domain::common::ParsePolicy;
use sheetz_domain::{Ability, Coin, DomainError, ItemId, PortraitPick};

use crate::application::services::{
    DialogKind, NumericField, PortraitPickResult, SheetChange, SheetSession, UserNotice,
};

/// Text inputs and pickers on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Race,
    Class,
    Level,
    Ability(Ability),
    HitPoints,
    MaxHitPoints,
    ArmorClass,
    ProficiencyBonus,
    Coins(Coin),
    DamageAmount,
    HealAmount,
    NewItemName,
    ItemName(ItemId),
    ItemQuantity(ItemId),
}

impl FormField {
    /// The numeric session field behind this input, if any.
    pub fn numeric(&self) -> Option<NumericField> {
        match self {
            Self::Level => Some(NumericField::Level),
            Self::Ability(ability) => Some(NumericField::Ability(*ability)),
            Self::HitPoints => Some(NumericField::HitPoints),
            Self::MaxHitPoints => Some(NumericField::MaxHitPoints),
            Self::ArmorClass => Some(NumericField::ArmorClass),
            Self::ProficiencyBonus => Some(NumericField::ProficiencyBonus),
            Self::Coins(coin) => Some(NumericField::Coins(*coin)),
            _ => None,
        }
    }
}

/// Buttons and other tap targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControl {
    ToggleLock,
    OpenDialog(DialogKind),
    ConfirmDialog(DialogKind),
    CancelDialog(DialogKind),
    AddItem,
    RemoveItem(ItemId),
    ConvertToGold,
    PickPortrait,
    RemovePortrait,
    RequestClear,
    ConfirmClear,
    CancelClear,
}

/// What the layout should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterResponse {
    /// The session changed (or reported a refused edit)
    Changed(SheetChange),
    /// Pending input was stored; nothing else to do
    Updated,
    /// The event means nothing in this layout or state
    Ignored,
    /// Launch the image picker and report back via `portrait_picked`
    RequestPortraitPick,
    /// Show a message to the user
    Notice(UserNotice),
    /// Input the domain could not represent
    Rejected(DomainError),
}

/// A layout that translates its widget events into session operations.
pub trait FormAdapter {
    type Event;

    /// Translate one widget event.
    fn handle(&self, session: &mut SheetSession, event: Self::Event) -> AdapterResponse;

    /// Hand over the result of an image pick this adapter asked for.
    fn portrait_picked(&self, session: &mut SheetSession, pick: PortraitPick) -> AdapterResponse;
}

/// Store text typed into a field, coercing numbers under `policy`.
pub(crate) fn apply_text(
    session: &mut SheetSession,
    field: FormField,
    text: &str,
    policy: ParsePolicy,
) -> AdapterResponse {
    if let Some(numeric) = field.numeric() {
        return AdapterResponse::Changed(session.edit_number(numeric, text, policy));
    }
    match field {
        FormField::Name => AdapterResponse::Changed(session.set_name(text)),
        FormField::Race => AdapterResponse::Changed(session.set_race(text)),
        FormField::Class => match session.select_class(text) {
            Ok(change) => AdapterResponse::Changed(change),
            Err(e) => AdapterResponse::Rejected(e),
        },
        FormField::DamageAmount => {
            session.set_dialog_input(DialogKind::Damage, text);
            AdapterResponse::Updated
        }
        FormField::HealAmount => {
            session.set_dialog_input(DialogKind::Heal, text);
            AdapterResponse::Updated
        }
        FormField::NewItemName => {
            session.set_new_item_name(text);
            AdapterResponse::Updated
        }
        FormField::ItemName(id) => AdapterResponse::Changed(session.rename_item(id, text)),
        FormField::ItemQuantity(id) => {
            AdapterResponse::Changed(session.edit_item_quantity(id, text, policy))
        }
        _ => AdapterResponse::Ignored,
    }
}

/// The single-key submit shortcut: confirms amount dialogs and adds the
/// pending item.
pub(crate) fn submit(session: &mut SheetSession, field: FormField) -> AdapterResponse {
    let changed = |change: Option<SheetChange>| {
        change.map_or(AdapterResponse::Ignored, AdapterResponse::Changed)
    };
    match field {
        FormField::DamageAmount => changed(session.confirm_dialog(DialogKind::Damage)),
        FormField::HealAmount => changed(session.confirm_dialog(DialogKind::Heal)),
        FormField::NewItemName => AdapterResponse::Changed(session.add_pending_item()),
        _ => AdapterResponse::Ignored,
    }
}

/// Button handling shared by both layouts. `PickPortrait` is left to
/// the caller since the layouts gate it differently.
pub(crate) fn press(session: &mut SheetSession, control: FormControl) -> AdapterResponse {
    match control {
        FormControl::ToggleLock => AdapterResponse::Changed(session.toggle_lock()),
        FormControl::OpenDialog(kind) => AdapterResponse::Changed(session.open_dialog(kind)),
        FormControl::ConfirmDialog(kind) => session
            .confirm_dialog(kind)
            .map_or(AdapterResponse::Ignored, AdapterResponse::Changed),
        FormControl::CancelDialog(kind) => AdapterResponse::Changed(session.cancel_dialog(kind)),
        FormControl::AddItem => AdapterResponse::Changed(session.add_pending_item()),
        FormControl::RemoveItem(id) => AdapterResponse::Changed(session.remove_item(id)),
        FormControl::ConvertToGold => AdapterResponse::Changed(session.convert_all_to_gold()),
        FormControl::PickPortrait => AdapterResponse::RequestPortraitPick,
        FormControl::RemovePortrait => AdapterResponse::Changed(session.clear_portrait()),
        FormControl::RequestClear => AdapterResponse::Changed(session.request_reset()),
        FormControl::ConfirmClear => session
            .confirm_reset()
            .map_or(AdapterResponse::Ignored, AdapterResponse::Changed),
        FormControl::CancelClear => AdapterResponse::Changed(session.cancel_reset()),
    }
}

/// Turn a picker result into a response.
pub(crate) fn picked(session: &mut SheetSession, pick: PortraitPick) -> AdapterResponse {
    match session.apply_portrait_pick(pick) {
        PortraitPickResult::Updated(change) => {
            AdapterResponse::Changed(SheetChange::Portrait(change))
        }
        PortraitPickResult::Cancelled => AdapterResponse::Ignored,
        PortraitPickResult::Denied(notice) => AdapterResponse::Notice(notice),
    }
}
