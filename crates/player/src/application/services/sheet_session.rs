//! Sheet Session - the one live character of a running app
//!
//! Owns the `CharacterSheet`, the two amount dialogs (damage, heal), the
//! pending new-item name and the clear-confirmation flag. Both form
//! adapters drive the sheet through this type and never touch the
//! aggregate directly.
//!
//! Every state transition is reported to subscribed observers as a
//! `SheetChange`, including refused identity edits and no-op inventory
//! operations, so a view can show why nothing happened.

use sheetz_domain::common::{saturate_i32, saturate_u32, ParsePolicy};
use sheetz_domain::{
    Ability, CharacterClass, CharacterSheet, Coin, DamageOutcome, DomainError, HealOutcome,
    IdentityUpdate, InventoryUpdate, ItemId, Level, PortraitChange, PortraitPick, Quantity,
    SheetDefaults, StatUpdate, SubscriptionId, WealthUpdate,
};

/// Value an empty or zero ability input becomes
const ABILITY_FALLBACK: i64 = 0;
/// Value an empty or zero hit point, coin or amount input becomes
const COUNTER_FALLBACK: i64 = 0;
const ARMOR_CLASS_FALLBACK: i64 = 10;
const PROFICIENCY_FALLBACK: i64 = 2;
const LEVEL_FALLBACK: i64 = 1;

/// Which amount dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Damage,
    Heal,
}

/// Open/closed flag plus the text typed into the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountDialog {
    open: bool,
    pending: String,
}

impl AmountDialog {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    fn close(&mut self) {
        self.open = false;
        self.pending.clear();
    }
}

/// Numeric form inputs that share the coerce-with-fallback rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Level,
    Ability(Ability),
    HitPoints,
    MaxHitPoints,
    ArmorClass,
    ProficiencyBonus,
    Coins(Coin),
}

/// A message the user should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub title: &'static str,
    pub message: &'static str,
}

impl UserNotice {
    pub const PHOTO_PERMISSION: UserNotice = UserNotice {
        title: "Permission required",
        message: "Please allow access to your photos.",
    };
}

/// What happened to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetChange {
    Identity(IdentityUpdate),
    Stat(StatUpdate),
    Damage(DamageOutcome),
    Heal(HealOutcome),
    Inventory(InventoryUpdate),
    Wealth(WealthUpdate),
    Portrait(PortraitChange),
    LockToggled { locked: bool },
    DialogOpened(DialogKind),
    DialogClosed(DialogKind),
    ClearRequested,
    ClearCancelled,
    Reset,
}

/// Result of handing the session a portrait picker result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortraitPickResult {
    Updated(PortraitChange),
    Cancelled,
    Denied(UserNotice),
}

type Observer = Box<dyn FnMut(&SheetChange)>;

/// The session that owns the live character sheet.
pub struct SheetSession {
    sheet: CharacterSheet,
    damage_dialog: AmountDialog,
    heal_dialog: AmountDialog,
    new_item_name: String,
    clear_requested: bool,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl std::fmt::Debug for SheetSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSession")
            .field("sheet", &self.sheet)
            .field("damage_dialog", &self.damage_dialog)
            .field("heal_dialog", &self.heal_dialog)
            .field("new_item_name", &self.new_item_name)
            .field("clear_requested", &self.clear_requested)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SheetSession {
    pub fn new(defaults: SheetDefaults) -> Self {
        Self {
            sheet: CharacterSheet::new(defaults),
            damage_dialog: AmountDialog::default(),
            heal_dialog: AmountDialog::default(),
            new_item_name: String::new(),
            clear_requested: false,
            observers: Vec::new(),
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    #[inline]
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn dialog(&self, kind: DialogKind) -> &AmountDialog {
        match kind {
            DialogKind::Damage => &self.damage_dialog,
            DialogKind::Heal => &self.heal_dialog,
        }
    }

    #[inline]
    pub fn new_item_name(&self) -> &str {
        &self.new_item_name
    }

    #[inline]
    pub fn is_clear_requested(&self) -> bool {
        self.clear_requested
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback run after every state transition.
    pub fn subscribe(&mut self, observer: impl FnMut(&SheetChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    #[cfg(test)]
    pub(crate) fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn emit(&mut self, change: SheetChange) -> SheetChange {
        tracing::debug!(?change, "Sheet changed");
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
        change
    }

    // =========================================================================
    // Identity
    // =========================================================================

    fn identity(&mut self, update: IdentityUpdate) -> SheetChange {
        if let IdentityUpdate::Locked { field } = &update {
            tracing::debug!(field, "Identity edit refused while locked");
        }
        self.emit(SheetChange::Identity(update))
    }

    pub fn set_name(&mut self, name: &str) -> SheetChange {
        let update = self.sheet.set_name(name);
        self.identity(update)
    }

    pub fn set_race(&mut self, race: &str) -> SheetChange {
        let update = self.sheet.set_race(race);
        self.identity(update)
    }

    pub fn set_class(&mut self, class: Option<CharacterClass>) -> SheetChange {
        let update = self.sheet.set_class(class);
        self.identity(update)
    }

    /// Class picker text; empty means "no class".
    pub fn select_class(&mut self, selection: &str) -> Result<SheetChange, DomainError> {
        let class = CharacterClass::parse_selection(selection)?;
        Ok(self.set_class(class))
    }

    pub fn toggle_lock(&mut self) -> SheetChange {
        let locked = self.sheet.toggle_lock();
        tracing::debug!(locked, "Identity lock toggled");
        self.emit(SheetChange::LockToggled { locked })
    }

    // =========================================================================
    // Numeric fields
    // =========================================================================

    /// Coerce raw widget text and store it.
    ///
    /// Unparsable text and zero both take the field's fallback: 0 for
    /// abilities, hit points and coins, 10 for armor class, 2 for
    /// proficiency and 1 for level. Counters never go below 0 and level
    /// is clamped to 1..=20.
    pub fn edit_number(&mut self, field: NumericField, raw: &str, policy: ParsePolicy) -> SheetChange {
        let change = match field {
            NumericField::Level => {
                let level = Level::clamped(policy.int_or(raw, LEVEL_FALLBACK));
                SheetChange::Identity(self.sheet.set_level(level))
            }
            NumericField::Ability(ability) => {
                let score = saturate_i32(policy.int_or(raw, ABILITY_FALLBACK));
                SheetChange::Stat(self.sheet.set_ability(ability, score))
            }
            NumericField::HitPoints => {
                let value = saturate_u32(policy.int_or(raw, COUNTER_FALLBACK));
                SheetChange::Stat(self.sheet.set_hit_points(value))
            }
            NumericField::MaxHitPoints => {
                let value = saturate_u32(policy.int_or(raw, COUNTER_FALLBACK));
                SheetChange::Stat(self.sheet.set_max_hit_points(value))
            }
            NumericField::ArmorClass => {
                let value = saturate_i32(policy.int_or(raw, ARMOR_CLASS_FALLBACK));
                SheetChange::Stat(self.sheet.set_armor_class(value))
            }
            NumericField::ProficiencyBonus => {
                let value = saturate_i32(policy.int_or(raw, PROFICIENCY_FALLBACK));
                SheetChange::Stat(self.sheet.set_proficiency_bonus(value))
            }
            NumericField::Coins(coin) => {
                let value = saturate_u32(policy.int_or(raw, COUNTER_FALLBACK));
                SheetChange::Wealth(self.sheet.set_coins(coin, value))
            }
        };
        match change {
            SheetChange::Identity(update) => self.identity(update),
            other => self.emit(other),
        }
    }

    // =========================================================================
    // Damage / heal dialogs
    // =========================================================================

    fn dialog_mut(&mut self, kind: DialogKind) -> &mut AmountDialog {
        match kind {
            DialogKind::Damage => &mut self.damage_dialog,
            DialogKind::Heal => &mut self.heal_dialog,
        }
    }

    pub fn open_dialog(&mut self, kind: DialogKind) -> SheetChange {
        self.dialog_mut(kind).open = true;
        self.emit(SheetChange::DialogOpened(kind))
    }

    /// Close without applying. The typed amount is discarded.
    pub fn cancel_dialog(&mut self, kind: DialogKind) -> SheetChange {
        self.dialog_mut(kind).close();
        self.emit(SheetChange::DialogClosed(kind))
    }

    /// Text typed into a dialog. Ignored while the dialog is closed.
    pub fn set_dialog_input(&mut self, kind: DialogKind, text: &str) {
        let dialog = self.dialog_mut(kind);
        if dialog.open {
            dialog.pending = text.to_string();
        }
    }

    /// Apply the typed amount, then clear the input and close the dialog.
    ///
    /// The amount is read leniently: empty, unparsable and negative text
    /// count as 0. Returns `None` when the dialog was not open.
    pub fn confirm_dialog(&mut self, kind: DialogKind) -> Option<SheetChange> {
        let dialog = self.dialog_mut(kind);
        if !dialog.open {
            return None;
        }
        let amount = saturate_u32(ParsePolicy::Prefix.int_or(&dialog.pending, COUNTER_FALLBACK));
        dialog.close();

        let change = match kind {
            DialogKind::Damage => SheetChange::Damage(self.sheet.apply_damage(amount)),
            DialogKind::Heal => SheetChange::Heal(self.sheet.heal(amount)),
        };
        let change = self.emit(change);
        self.emit(SheetChange::DialogClosed(kind));
        Some(change)
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn set_new_item_name(&mut self, text: &str) {
        self.new_item_name = text.to_string();
    }

    /// Add the pending item name. The pending name is cleared on success
    /// and kept when the add is refused.
    pub fn add_pending_item(&mut self) -> SheetChange {
        let update = self.sheet.add_item(self.new_item_name.clone());
        if update.is_change() {
            self.new_item_name.clear();
        }
        self.emit(SheetChange::Inventory(update))
    }

    pub fn rename_item(&mut self, id: ItemId, name: &str) -> SheetChange {
        let update = self.sheet.rename_item(id, name);
        self.emit(SheetChange::Inventory(update))
    }

    /// Unparsable text and values below 1 store 1.
    pub fn edit_item_quantity(&mut self, id: ItemId, raw: &str, policy: ParsePolicy) -> SheetChange {
        let quantity = Quantity::from_parsed(policy.parse(raw));
        let update = self.sheet.set_item_quantity(id, quantity);
        self.emit(SheetChange::Inventory(update))
    }

    pub fn remove_item(&mut self, id: ItemId) -> SheetChange {
        let update = self.sheet.remove_item(id);
        self.emit(SheetChange::Inventory(update))
    }

    // =========================================================================
    // Wealth
    // =========================================================================

    pub fn convert_all_to_gold(&mut self) -> SheetChange {
        let update = self.sheet.convert_all_to_gold();
        if let WealthUpdate::ConvertedToGold(conversion) = &update {
            if conversion.discarded_copper > 0 {
                tracing::info!(
                    gold = conversion.gold,
                    discarded_copper = conversion.discarded_copper,
                    "Converted purse to gold; sub-gold change discarded"
                );
            }
        }
        self.emit(SheetChange::Wealth(update))
    }

    // =========================================================================
    // Portrait
    // =========================================================================

    /// Store what the image picker returned. A cancelled or denied pick
    /// leaves the portrait untouched.
    pub fn apply_portrait_pick(&mut self, pick: PortraitPick) -> PortraitPickResult {
        match pick {
            PortraitPick::Picked(portrait) => {
                let change = self.sheet.set_portrait(Some(portrait));
                self.emit(SheetChange::Portrait(change.clone()));
                PortraitPickResult::Updated(change)
            }
            PortraitPick::Cancelled => PortraitPickResult::Cancelled,
            PortraitPick::PermissionDenied => {
                tracing::warn!("Photo library permission denied");
                PortraitPickResult::Denied(UserNotice::PHOTO_PERMISSION)
            }
        }
    }

    pub fn clear_portrait(&mut self) -> SheetChange {
        let change = self.sheet.set_portrait(None);
        self.emit(SheetChange::Portrait(change))
    }

    // =========================================================================
    // Clear character
    // =========================================================================

    /// Ask for confirmation before clearing.
    pub fn request_reset(&mut self) -> SheetChange {
        self.clear_requested = true;
        self.emit(SheetChange::ClearRequested)
    }

    pub fn cancel_reset(&mut self) -> SheetChange {
        self.clear_requested = false;
        self.emit(SheetChange::ClearCancelled)
    }

    /// Confirm a requested clear. Returns `None` when no clear was requested.
    pub fn confirm_reset(&mut self) -> Option<SheetChange> {
        if !self.clear_requested {
            return None;
        }
        Some(self.reset())
    }

    /// Restore every sheet field to its default, the lock included.
    pub fn reset(&mut self) -> SheetChange {
        self.clear_requested = false;
        self.sheet.reset();
        tracing::info!("Character cleared");
        self.emit(SheetChange::Reset)
    }
}
