//! Reference Service - the links panel beside the sheet
//!
//! The class guide follows the selected class; spell and general resources
//! are fixed. Opening a link goes through the platform link opener, and a
//! failure is logged and handed back rather than propagated.

use std::sync::Arc;

use sheetz_domain::reference::{
    class_guide_label, class_guide_title, class_guide_url, GENERAL_RESOURCES, SPELL_RESOURCES,
};
use sheetz_domain::{CharacterClass, ReferenceLink};

use crate::ports::outbound::{LinkOpener, PlatformError};

/// Shown when no class is selected
pub const NO_CLASS_HINT: &str = "Select a class above to see the class guide";

/// Guide link for the selected class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGuide {
    pub class: CharacterClass,
    pub title: String,
    pub label: String,
    pub url: String,
}

impl ClassGuide {
    pub fn for_class(class: CharacterClass) -> Self {
        Self {
            class,
            title: class_guide_title(class),
            label: class_guide_label(class),
            url: class_guide_url(class),
        }
    }
}

/// Addressable entries of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceEntry {
    ClassGuide,
    Spell(usize),
    General(usize),
}

/// Reference links panel service
#[derive(Clone)]
pub struct ReferenceService {
    links: Arc<dyn LinkOpener>,
}

impl ReferenceService {
    pub fn new(links: Arc<dyn LinkOpener>) -> Self {
        Self { links }
    }

    pub fn class_guide(&self, class: Option<CharacterClass>) -> Option<ClassGuide> {
        class.map(ClassGuide::for_class)
    }

    pub fn spell_resources(&self) -> &'static [ReferenceLink] {
        &SPELL_RESOURCES
    }

    pub fn general_resources(&self) -> &'static [ReferenceLink] {
        &GENERAL_RESOURCES
    }

    /// URL behind an entry. `None` for a class guide with no class
    /// selected or an index past the end of a list.
    pub fn url_for(&self, entry: ReferenceEntry, class: Option<CharacterClass>) -> Option<String> {
        match entry {
            ReferenceEntry::ClassGuide => class.map(class_guide_url),
            ReferenceEntry::Spell(index) => SPELL_RESOURCES.get(index).map(|l| l.url.to_string()),
            ReferenceEntry::General(index) => {
                GENERAL_RESOURCES.get(index).map(|l| l.url.to_string())
            }
        }
    }

    /// Open an entry in the browser. Returns `Ok(None)` when the entry
    /// has no URL.
    pub fn open(
        &self,
        entry: ReferenceEntry,
        class: Option<CharacterClass>,
    ) -> Result<Option<String>, PlatformError> {
        let Some(url) = self.url_for(entry, class) else {
            return Ok(None);
        };
        match self.links.open(&url) {
            Ok(()) => {
                tracing::info!(url = %url, "Opened reference link");
                Ok(Some(url))
            }
            Err(e) => {
                tracing::warn!("Failed to open reference link: {}", e);
                Err(e)
            }
        }
    }
}
