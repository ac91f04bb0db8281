//! Line-oriented console front end.
//!
//! Parses typed commands and renders the sheet and adapter responses as
//! plain text. The runner feeds parsed commands through whichever form
//! adapter the shell selected.

use std::fmt::Write as _;
use std::str::FromStr;

use sheetz_domain::{
    Ability, Coin, DamageOutcome, DomainError, HealOutcome, IdentityUpdate, InventoryUpdate,
    PortraitChange, PortraitPick, ReferenceLink, WealthUpdate,
};

use super::form::{AdapterResponse, FormField};
use crate::application::dto::SheetView;
use crate::application::services::{
    ClassGuide, DialogKind, ReferenceEntry, SheetChange, NO_CLASS_HINT,
};

pub const CLEAR_CONFIRMATION: &str = "This will reset all character data. Are you sure?";

pub const HELP: &str = "\
Commands:
  show | json                      print the sheet
  set <field> <value>              name, race, level, hp, maxhp, ac, prof,
                                   str..cha, cp/sp/ep/gp/pp
  class [name]                     pick a class (blank clears)
  lock                             toggle the identity lock
  damage [n] | heal [n]            open the dialog, or apply n at once
  cancel damage|heal               close a dialog
  add <item>                       add an inventory item
  rename <#> <name> | qty <#> <n>  edit an item
  rm <#>                           remove an item
  convert                          convert all coins to gold
  portrait <uri>|cancel|denied     pick a portrait
  unportrait                       remove the portrait
  clear, then yes | no             clear the character
  theme                            toggle dark mode
  links | open guide|spell <#>|general <#>
  help | quit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Json,
    Quit,
    Set { field: FormField, text: String },
    Class(String),
    ToggleLock,
    OpenDialog(DialogKind),
    /// Open the dialog if needed, type `text` and submit it
    Amount { kind: DialogKind, text: String },
    CancelDialog(DialogKind),
    Add(String),
    /// Item positions are 1-based as printed by `show`
    Rename { position: usize, name: String },
    Quantity { position: usize, text: String },
    Remove { position: usize },
    Convert,
    Portrait(PortraitPick),
    RemovePortrait,
    Clear,
    ConfirmClear,
    CancelClear,
    Theme,
    Links,
    Open(ReferenceEntry),
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (s, ""),
    }
}

fn dialog_kind(word: &str) -> Result<DialogKind, DomainError> {
    match word.to_ascii_lowercase().as_str() {
        "damage" | "dmg" => Ok(DialogKind::Damage),
        "heal" => Ok(DialogKind::Heal),
        other => Err(DomainError::validation(format!(
            "expected damage or heal, got '{other}'"
        ))),
    }
}

fn position(word: &str) -> Result<usize, DomainError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DomainError::validation(format!(
            "expected an item number, got '{word}'"
        ))),
    }
}

/// Parse a `set` target.
pub fn parse_field(word: &str) -> Result<FormField, DomainError> {
    let field = match word.to_ascii_lowercase().as_str() {
        "name" => FormField::Name,
        "race" => FormField::Race,
        "level" | "lvl" => FormField::Level,
        "hp" => FormField::HitPoints,
        "maxhp" | "max" => FormField::MaxHitPoints,
        "ac" => FormField::ArmorClass,
        "prof" | "proficiency" => FormField::ProficiencyBonus,
        other => {
            if let Ok(ability) = other.parse::<Ability>() {
                FormField::Ability(ability)
            } else if let Ok(coin) = other.parse::<Coin>() {
                FormField::Coins(coin)
            } else {
                return Err(DomainError::validation(format!("unknown field '{word}'")));
            }
        }
    };
    Ok(field)
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        let command = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "show" | "" => Self::Show,
            "json" => Self::Json,
            "quit" | "exit" => Self::Quit,
            "set" => {
                let (field, text) = split_word(rest);
                Self::Set {
                    field: parse_field(field)?,
                    text: text.to_string(),
                }
            }
            "class" => Self::Class(rest.to_string()),
            "lock" | "unlock" => Self::ToggleLock,
            kind @ ("damage" | "dmg" | "heal") => {
                let kind = dialog_kind(kind)?;
                if rest.is_empty() {
                    Self::OpenDialog(kind)
                } else {
                    Self::Amount {
                        kind,
                        text: rest.to_string(),
                    }
                }
            }
            "cancel" => Self::CancelDialog(dialog_kind(rest)?),
            "add" => Self::Add(rest.to_string()),
            "rename" => {
                let (pos, name) = split_word(rest);
                Self::Rename {
                    position: position(pos)?,
                    name: name.to_string(),
                }
            }
            "qty" | "quantity" => {
                let (pos, text) = split_word(rest);
                Self::Quantity {
                    position: position(pos)?,
                    text: text.to_string(),
                }
            }
            "rm" | "remove" => Self::Remove {
                position: position(rest)?,
            },
            "convert" => Self::Convert,
            "portrait" => match rest {
                "" => return Err(DomainError::validation("portrait needs a uri")),
                "cancel" => Self::Portrait(PortraitPick::Cancelled),
                "denied" => Self::Portrait(PortraitPick::PermissionDenied),
                uri => Self::Portrait(PortraitPick::picked(uri)),
            },
            "unportrait" => Self::RemovePortrait,
            "clear" => Self::Clear,
            "yes" | "y" => Self::ConfirmClear,
            "no" | "n" => Self::CancelClear,
            "theme" => Self::Theme,
            "links" => Self::Links,
            "open" => {
                let (what, index) = split_word(rest);
                match what {
                    "guide" => Self::Open(ReferenceEntry::ClassGuide),
                    "spell" => Self::Open(ReferenceEntry::Spell(position(index)? - 1)),
                    "general" => Self::Open(ReferenceEntry::General(position(index)? - 1)),
                    other => {
                        return Err(DomainError::validation(format!(
                            "expected guide, spell or general, got '{other}'"
                        )))
                    }
                }
            }
            other => {
                return Err(DomainError::validation(format!(
                    "unknown command '{other}' (try help)"
                )))
            }
        };
        Ok(command)
    }
}

/// Plain-text rendering of the sheet.
pub fn render_sheet(view: &SheetView, dark_mode: bool) -> String {
    let mut out = String::new();
    let name = if view.name.is_empty() {
        "(unnamed)"
    } else {
        view.name.as_str()
    };
    let _ = writeln!(
        out,
        "{} | {} | {} | Level {}{}",
        name,
        view.class_name.as_deref().unwrap_or("no class"),
        if view.race.is_empty() { "no race" } else { view.race.as_str() },
        view.level,
        if view.locked { " [locked]" } else { "" }
    );
    let abilities: Vec<String> = view
        .abilities
        .iter()
        .map(|a| format!("{} {} ({})", a.label, a.score, a.modifier))
        .collect();
    let _ = writeln!(out, "{}", abilities.join("  "));
    let _ = writeln!(
        out,
        "HP {}/{}  AC {}  Proficiency {}",
        view.hit_points, view.max_hit_points, view.armor_class, view.proficiency_bonus
    );
    if view.items.is_empty() {
        let _ = writeln!(out, "Inventory: empty");
    } else {
        let _ = writeln!(out, "Inventory:");
        for (index, item) in view.items.iter().enumerate() {
            let _ = writeln!(out, "  {}. {} x{}", index + 1, item.name, item.quantity);
        }
    }
    let coins: Vec<String> = view
        .coins
        .iter()
        .map(|c| format!("{} {}", c.label, c.count))
        .collect();
    let _ = writeln!(out, "{}", coins.join("  "));
    let _ = writeln!(out, "Total: {} gp ({})", view.total_gold, view.conversion_reference.join(", "));
    let _ = writeln!(
        out,
        "Portrait: {}",
        view.portrait.as_deref().unwrap_or("none")
    );
    let _ = write!(out, "Theme: {}", if dark_mode { "dark" } else { "light" });
    out
}

/// The links panel.
pub fn render_links(
    guide: Option<&ClassGuide>,
    spells: &[ReferenceLink],
    general: &[ReferenceLink],
) -> String {
    let mut out = String::new();
    match guide {
        Some(guide) => {
            let _ = writeln!(out, "{}", guide.title);
            let _ = writeln!(out, "  {} <{}>", guide.label, guide.url);
        }
        None => {
            let _ = writeln!(out, "{NO_CLASS_HINT}");
        }
    }
    let _ = writeln!(out, "Spell Resources");
    for (index, link) in spells.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, link.title);
    }
    let _ = writeln!(out, "General Resources");
    for (index, link) in general.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, link.title);
    }
    out.truncate(out.trim_end().len());
    out
}

fn describe_change(change: &SheetChange) -> Option<String> {
    let text = match change {
        SheetChange::Identity(IdentityUpdate::Locked { field }) => {
            format!("{field} is locked")
        }
        SheetChange::Damage(DamageOutcome::Wounded {
            damage_dealt,
            remaining_hp,
        }) => format!("Took {damage_dealt} damage, {remaining_hp} HP left"),
        SheetChange::Damage(DamageOutcome::Downed { damage_dealt }) => {
            format!("Took {damage_dealt} damage, down to 0 HP")
        }
        SheetChange::Damage(DamageOutcome::NoEffect) => "No damage taken".to_string(),
        SheetChange::Heal(HealOutcome::Healed {
            amount_healed,
            new_hp,
        }) => format!("Healed {amount_healed}, now {new_hp} HP"),
        SheetChange::Heal(HealOutcome::Capped { new_hp }) => format!("HP capped at {new_hp}"),
        SheetChange::Heal(HealOutcome::AlreadyFull) => "Already at full HP".to_string(),
        SheetChange::Inventory(InventoryUpdate::Added { .. }) => "Item added".to_string(),
        SheetChange::Inventory(InventoryUpdate::Removed { name, .. }) => {
            format!("Removed {name}")
        }
        SheetChange::Inventory(InventoryUpdate::EmptyName) => {
            "Item name cannot be empty".to_string()
        }
        SheetChange::Inventory(InventoryUpdate::UnknownItem { .. }) => "No such item".to_string(),
        SheetChange::Wealth(WealthUpdate::ConvertedToGold(conversion)) => {
            if conversion.discarded_copper > 0 {
                format!(
                    "Converted to {} gp ({} cp of change discarded)",
                    conversion.gold, conversion.discarded_copper
                )
            } else {
                format!("Converted to {} gp", conversion.gold)
            }
        }
        SheetChange::Portrait(PortraitChange { to: Some(_), .. }) => {
            "Portrait updated".to_string()
        }
        SheetChange::Portrait(PortraitChange { to: None, .. }) => "Portrait removed".to_string(),
        SheetChange::LockToggled { locked: true } => "Identity locked".to_string(),
        SheetChange::LockToggled { locked: false } => "Identity unlocked".to_string(),
        SheetChange::DialogOpened(kind) => format!("{kind:?} amount?"),
        SheetChange::ClearRequested => format!("{CLEAR_CONFIRMATION} (yes/no)"),
        SheetChange::Reset => "Character cleared".to_string(),
        _ => return None,
    };
    Some(text)
}

/// One-line feedback for an adapter response, if it warrants any.
pub fn describe_response(response: &AdapterResponse) -> Option<String> {
    match response {
        AdapterResponse::Changed(change) => describe_change(change),
        AdapterResponse::Notice(notice) => Some(format!("{}: {}", notice.title, notice.message)),
        AdapterResponse::Rejected(e) => Some(format!("Error: {e}")),
        AdapterResponse::Updated
        | AdapterResponse::Ignored
        | AdapterResponse::RequestPortraitPick => None,
    }
}
