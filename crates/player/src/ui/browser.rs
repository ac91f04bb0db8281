//! Browser layout: single-page form with keyboard shortcuts.
//!
//! Every numeric input is read leniently (leading digits win) and the
//! portrait can be changed regardless of the identity lock.

use sheetz_domain::common::ParsePolicy;
use sheetz_domain::PortraitPick;

use super::form::{self, AdapterResponse, FormAdapter, FormControl, FormField};
use crate::application::services::SheetSession;

const SUBMIT_KEY: &str = "Enter";

/// Widget events the browser page produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// `input`/`change` on a text box or select
    Input { field: FormField, value: String },
    /// `keydown` inside a text box
    KeyDown { field: FormField, key: String },
    Click(FormControl),
}

impl BrowserEvent {
    pub fn input(field: FormField, value: impl Into<String>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }

    pub fn key_down(field: FormField, key: impl Into<String>) -> Self {
        Self::KeyDown {
            field,
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAdapter;

impl BrowserAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormAdapter for BrowserAdapter {
    type Event = BrowserEvent;

    fn handle(&self, session: &mut SheetSession, event: BrowserEvent) -> AdapterResponse {
        match event {
            BrowserEvent::Input { field, value } => {
                form::apply_text(session, field, &value, ParsePolicy::Prefix)
            }
            BrowserEvent::KeyDown { field, key } if key == SUBMIT_KEY => {
                form::submit(session, field)
            }
            BrowserEvent::KeyDown { .. } => AdapterResponse::Ignored,
            BrowserEvent::Click(control) => form::press(session, control),
        }
    }

    fn portrait_picked(&self, session: &mut SheetSession, pick: PortraitPick) -> AdapterResponse {
        form::picked(session, pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{DialogKind, SheetChange};
    use sheetz_domain::{
        Ability, CharacterClass, Coin, DamageOutcome, DomainError, IdentityUpdate,
        InventoryUpdate, Portrait, SheetDefaults,
    };

    fn session() -> SheetSession {
        SheetSession::new(SheetDefaults::BROWSER)
    }

    mod numeric_inputs {
        use super::*;

        #[test]
        fn leading_digits_are_kept() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(
                &mut session,
                BrowserEvent::input(FormField::Ability(Ability::Strength), "15abc"),
            );
            adapter.handle(&mut session, BrowserEvent::input(FormField::ArmorClass, "16 "));
            assert_eq!(session.sheet().abilities().get(Ability::Strength), 15);
            assert_eq!(session.sheet().armor_class(), 16);
        }

        #[test]
        fn garbage_takes_the_fallback() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::input(FormField::ArmorClass, "x"));
            adapter.handle(&mut session, BrowserEvent::input(FormField::Level, ""));
            adapter.handle(
                &mut session,
                BrowserEvent::input(FormField::Coins(Coin::Gold), "lots"),
            );
            assert_eq!(session.sheet().armor_class(), 10);
            assert_eq!(session.sheet().level().value(), 1);
            assert_eq!(session.sheet().wealth().get(Coin::Gold), 0);
        }
    }

    mod identity {
        use super::*;

        #[test]
        fn class_select_accepts_blank_and_rejects_unknown() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::input(FormField::Class, "Wizard"));
            assert_eq!(session.sheet().class(), Some(CharacterClass::Wizard));

            let response =
                adapter.handle(&mut session, BrowserEvent::input(FormField::Class, "Pirate"));
            assert!(matches!(
                response,
                AdapterResponse::Rejected(DomainError::Parse(_))
            ));

            adapter.handle(&mut session, BrowserEvent::input(FormField::Class, ""));
            assert_eq!(session.sheet().class(), None);
        }

        #[test]
        fn locked_name_edit_is_reported() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::Click(FormControl::ToggleLock));
            let response = adapter.handle(&mut session, BrowserEvent::input(FormField::Name, "Vex"));
            assert_eq!(
                response,
                AdapterResponse::Changed(SheetChange::Identity(IdentityUpdate::Locked {
                    field: "name"
                }))
            );
            assert_eq!(session.sheet().name(), "");
        }
    }

    mod shortcuts {
        use super::*;

        #[test]
        fn enter_confirms_the_damage_dialog() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(
                &mut session,
                BrowserEvent::Click(FormControl::OpenDialog(DialogKind::Damage)),
            );
            adapter.handle(&mut session, BrowserEvent::input(FormField::DamageAmount, "3"));
            let response =
                adapter.handle(&mut session, BrowserEvent::key_down(FormField::DamageAmount, "Enter"));
            assert_eq!(
                response,
                AdapterResponse::Changed(SheetChange::Damage(DamageOutcome::Wounded {
                    damage_dealt: 3,
                    remaining_hp: 5
                }))
            );
            assert!(!session.dialog(DialogKind::Damage).is_open());
        }

        #[test]
        fn other_keys_do_nothing() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::input(FormField::NewItemName, "Rope"));
            let response =
                adapter.handle(&mut session, BrowserEvent::key_down(FormField::NewItemName, "a"));
            assert_eq!(response, AdapterResponse::Ignored);
            assert!(session.sheet().items().is_empty());
        }

        #[test]
        fn enter_adds_the_pending_item() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::input(FormField::NewItemName, "Rope"));
            let response =
                adapter.handle(&mut session, BrowserEvent::key_down(FormField::NewItemName, "Enter"));
            assert!(matches!(
                response,
                AdapterResponse::Changed(SheetChange::Inventory(InventoryUpdate::Added { .. }))
            ));
            assert_eq!(session.sheet().items().len(), 1);
            assert_eq!(session.new_item_name(), "");
        }

        #[test]
        fn enter_on_closed_dialog_is_ignored() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            let response =
                adapter.handle(&mut session, BrowserEvent::key_down(FormField::HealAmount, "Enter"));
            assert_eq!(response, AdapterResponse::Ignored);
        }
    }

    mod portrait {
        use super::*;

        #[test]
        fn portrait_changes_while_locked() {
            let adapter = BrowserAdapter::new();
            let mut session = session();
            adapter.handle(&mut session, BrowserEvent::Click(FormControl::ToggleLock));
            let response =
                adapter.handle(&mut session, BrowserEvent::Click(FormControl::PickPortrait));
            assert_eq!(response, AdapterResponse::RequestPortraitPick);

            adapter.portrait_picked(
                &mut session,
                PortraitPick::Picked(Portrait::new("data:image/png;base64,AAAA")),
            );
            assert!(session.sheet().portrait().is_some());

            adapter.handle(&mut session, BrowserEvent::Click(FormControl::RemovePortrait));
            assert!(session.sheet().portrait().is_none());
        }
    }
}
