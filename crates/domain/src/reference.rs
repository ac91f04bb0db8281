//! Static reference links shown beside the sheet.

use serde::Serialize;

use crate::value_objects::CharacterClass;

/// A titled external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceLink {
    pub title: &'static str,
    pub url: &'static str,
}

const CLASS_GUIDE_BASE: &str = "https://www.dndbeyond.com/classes/";

/// Spell lookup resources, independent of class.
pub const SPELL_RESOURCES: [ReferenceLink; 4] = [
    ReferenceLink {
        title: "All Spells List",
        url: "https://www.dndbeyond.com/spells",
    },
    ReferenceLink {
        title: "Spells by Class",
        url: "https://www.dndbeyond.com/spells/class",
    },
    ReferenceLink {
        title: "Spells by Level",
        url: "https://www.dndbeyond.com/spells?filter-level=0&filter-level=1&filter-level=2&filter-level=3&filter-level=4&filter-level=5&filter-level=6&filter-level=7&filter-level=8&filter-level=9",
    },
    ReferenceLink {
        title: "Cantrips",
        url: "https://www.dndbeyond.com/spells?filter-level=0",
    },
];

/// General rules and character-building resources.
pub const GENERAL_RESOURCES: [ReferenceLink; 4] = [
    ReferenceLink {
        title: "Basic Rules (Free)",
        url: "https://www.dndbeyond.com/sources/basic-rules",
    },
    ReferenceLink {
        title: "Character Creation Guide",
        url: "https://www.dndbeyond.com/posts/1368-how-to-create-your-first-dungeons-dragons",
    },
    ReferenceLink {
        title: "Equipment & Gear",
        url: "https://www.dndbeyond.com/equipment",
    },
    ReferenceLink {
        title: "Races Guide",
        url: "https://www.dndbeyond.com/races",
    },
];

/// Guide page for a class, e.g. `https://www.dndbeyond.com/classes/wizard`.
pub fn class_guide_url(class: CharacterClass) -> String {
    format!("{}{}", CLASS_GUIDE_BASE, class.slug())
}

/// Link title for a class guide, e.g. `"Wizard Class Guide"`.
pub fn class_guide_title(class: CharacterClass) -> String {
    format!("{} Class Guide", class)
}

/// Button text for a class guide link.
pub fn class_guide_label(class: CharacterClass) -> String {
    format!("View {} Guide on D&D Beyond", class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_guides_use_lowercase_slugs() {
        assert_eq!(
            class_guide_url(CharacterClass::Artificer),
            "https://www.dndbeyond.com/classes/artificer"
        );
        assert_eq!(class_guide_title(CharacterClass::Monk), "Monk Class Guide");
    }

    #[test]
    fn every_class_has_a_distinct_guide() {
        let urls: std::collections::HashSet<_> =
            CharacterClass::ALL.into_iter().map(class_guide_url).collect();
        assert_eq!(urls.len(), 13);
    }

    #[test]
    fn resource_lists() {
        assert_eq!(SPELL_RESOURCES[0].url, "https://www.dndbeyond.com/spells");
        assert_eq!(
            SPELL_RESOURCES[3].url,
            "https://www.dndbeyond.com/spells?filter-level=0"
        );
        assert!(SPELL_RESOURCES[2].url.ends_with("filter-level=9"));
        assert_eq!(GENERAL_RESOURCES[2].title, "Equipment & Gear");
        assert!(GENERAL_RESOURCES
            .iter()
            .chain(SPELL_RESOURCES.iter())
            .all(|link| link.url.starts_with("https://www.dndbeyond.com/")));
    }
}
