use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{Platform, UNKNOWN};

lazy_static! {
    /// Windows language IDs (LCIDs) modeled by the tool.
    ///
    /// https://learn.microsoft.com/en-us/typography/opentype/spec/name#windows-language-ids
    pub static ref WINDOWS_LANGUAGES: HashMap<u16, &'static str> = {
        let mut table = HashMap::new();
        table.insert(1028, "CHINESE_TAIWAN");
        table.insert(1031, "GERMAN_GERMANY");
        table.insert(1033, "ENGLISH_UNITED_STATES");
        table.insert(1036, "FRENCH_FRANCE");
        table.insert(1040, "ITALIAN_ITALY");
        table.insert(1041, "JAPANESE");
        table.insert(1042, "KOREAN");
        table.insert(2052, "CHINESE_PRC");
        table.insert(2057, "ENGLISH_UNITED_KINGDOM");
        table.insert(3082, "SPANISH_SPAIN_MODERN_SORT");
        table
    };

    /// Macintosh language IDs modeled by the tool.
    ///
    /// https://learn.microsoft.com/en-us/typography/opentype/spec/name#macintosh-language-ids
    pub static ref MAC_LANGUAGES: HashMap<u16, &'static str> = {
        let mut table = HashMap::new();
        table.insert(0, "ENGLISH");
        table.insert(1, "FRENCH");
        table.insert(2, "GERMAN");
        table.insert(3, "ITALIAN");
        table.insert(6, "SPANISH");
        table.insert(11, "JAPANESE");
        table.insert(19, "CHINESE_TRADITIONAL");
        table.insert(23, "KOREAN");
        table.insert(33, "CHINESE_SIMPLIFIED");
        table
    };
}

/// A naming-table record's language, keyed by the platform that produced it.
///
/// Windows and Macintosh language IDs occupy disjoint numeric spaces, so the
/// record's platform alone decides which registry resolves the ID. Records
/// from any other platform stay unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Windows(u16),
    Mac(u16),
    Unresolved,
}

impl Language {
    /// Select the language variant for a record's raw platform and language IDs
    pub fn classify(platform_id: u16, language_id: u16) -> Language {
        match Platform::from_id(platform_id) {
            Some(Platform::Windows) => Language::Windows(language_id),
            Some(Platform::Mac) => Language::Mac(language_id),
            _ => Language::Unresolved,
        }
    }

    /// Symbolic name of this language, "Unknown" for unregistered IDs and
    /// for records whose platform has no modeled language registry
    pub fn symbol(&self) -> &'static str {
        match self {
            Language::Windows(id) => WINDOWS_LANGUAGES.get(id).copied().unwrap_or(UNKNOWN),
            Language::Mac(id) => MAC_LANGUAGES.get(id).copied().unwrap_or(UNKNOWN),
            Language::Unresolved => UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_platform_selects_windows_registry() {
        assert_eq!(Language::classify(3, 1033), Language::Windows(1033));
        assert_eq!(Language::classify(3, 1033).symbol(), "ENGLISH_UNITED_STATES");
        assert_eq!(Language::classify(3, 1041).symbol(), "JAPANESE");
    }

    #[test]
    fn mac_platform_selects_mac_registry() {
        assert_eq!(Language::classify(1, 11), Language::Mac(11));
        assert_eq!(Language::classify(1, 11).symbol(), "JAPANESE");
        assert_eq!(Language::classify(1, 0).symbol(), "ENGLISH");
    }

    #[test]
    fn other_platforms_stay_unresolved() {
        assert_eq!(Language::classify(0, 0), Language::Unresolved);
        assert_eq!(Language::classify(2, 1033), Language::Unresolved);
        assert_eq!(Language::classify(9, 1033), Language::Unresolved);
        assert_eq!(Language::Unresolved.symbol(), "Unknown");
    }

    #[test]
    fn unregistered_language_ids_resolve_to_unknown() {
        assert_eq!(Language::Windows(9999).symbol(), "Unknown");
        assert_eq!(Language::Mac(200).symbol(), "Unknown");
    }

    #[test]
    fn registries_do_not_share_a_numeric_space() {
        // Mac's JAPANESE(11) means nothing to the Windows registry
        assert_eq!(Language::Windows(11).symbol(), "Unknown");
        // Windows' JAPANESE(1041) means nothing to the Mac registry
        assert_eq!(Language::Mac(1041).symbol(), "Unknown");
    }
}
