use crate::models::{NormalizedProperty, RawNameRecord};
use crate::registry::{Language, NameField, Platform};

/// Normalize a matched record by resolving its three raw IDs.
///
/// The language registry is selected by the record's platform: Windows and
/// Mac records get their registry, anything else stays `Unresolved` and the
/// caller reports the unsupported platform. The record is normalized either
/// way, never dropped.
pub fn format(record: &RawNameRecord) -> NormalizedProperty {
    NormalizedProperty {
        name: NameField::resolve(record.name_id),
        platform: Platform::resolve(record.platform_id),
        lang: Language::classify(record.platform_id, record.language_id),
        value: record.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_record_resolves_through_windows_registry() {
        let record = RawNameRecord::new(3, 1033, 1, "Bowli Rough");
        let property = format(&record);
        assert_eq!(property.name, "FONT_FAMILY_NAME");
        assert_eq!(property.platform, "WINDOWS");
        assert_eq!(property.lang, Language::Windows(1033));
        assert_eq!(property.lang.symbol(), "ENGLISH_UNITED_STATES");
        assert_eq!(property.value, "Bowli Rough");
    }

    #[test]
    fn mac_record_resolves_through_mac_registry() {
        let record = RawNameRecord::new(1, 11, 13, "SIL OFL 1.1");
        let property = format(&record);
        assert_eq!(property.name, "LICENSE_DESCRIPTION");
        assert_eq!(property.platform, "MAC");
        assert_eq!(property.lang.symbol(), "JAPANESE");
    }

    #[test]
    fn unicode_platform_has_no_language_resolution() {
        let record = RawNameRecord::new(0, 0, 1, "Family");
        let property = format(&record);
        assert_eq!(property.platform, "UNICODE");
        assert_eq!(property.lang, Language::Unresolved);
        assert_eq!(property.lang.symbol(), "Unknown");
    }

    #[test]
    fn unrecognized_ids_resolve_to_unknown() {
        let record = RawNameRecord::new(9, 5, 300, "???");
        let property = format(&record);
        assert_eq!(property.name, "Unknown");
        assert_eq!(property.platform, "Unknown");
        assert_eq!(property.lang, Language::Unresolved);
    }

    #[test]
    fn formatting_does_not_mutate_input() {
        let record = RawNameRecord::new(3, 1033, 1, "Family");
        let before = record.clone();
        let _ = format(&record);
        assert_eq!(record, before);
    }
}
