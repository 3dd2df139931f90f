use log::debug;

use crate::models::{NameFilter, RawNameRecord};

/// Scan naming-table records against a filter.
///
/// A record is collected when its name ID matches the filter's name field;
/// the platform and language constraints do not affect collection. The scan
/// stops after the first record matching the full (name, platform, language)
/// triple, which requires both optional constraints to be set. With either
/// left as match-any the scan always covers the whole sequence.
///
/// Matches are returned in source order.
pub fn scan<'a>(records: &'a [RawNameRecord], filter: &NameFilter) -> Vec<&'a RawNameRecord> {
    let mut matched = Vec::new();

    for record in records {
        debug!(
            "PlatformID: {}, LangID: {}, NameID: {}, value: {}",
            record.platform_id, record.language_id, record.name_id, record.value
        );

        if record.name_id == filter.name.id() {
            matched.push(record);
        }

        // The collected record is kept even when it also ends the scan.
        if is_matching_record(record, filter) {
            break;
        }
    }

    matched
}

/// Whether a record satisfies the full filter triple
fn is_matching_record(record: &RawNameRecord, filter: &NameFilter) -> bool {
    filter.platform.map_or(false, |p| p.id() == record.platform_id)
        && filter.language.map_or(false, |l| l == record.language_id)
        && record.name_id == filter.name.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NameField, Platform};

    fn sample_records() -> Vec<RawNameRecord> {
        vec![
            RawNameRecord::new(1, 0, 1, "Mac family"),
            RawNameRecord::new(3, 1033, 0, "Copyright"),
            RawNameRecord::new(3, 1033, 1, "Windows family"),
            RawNameRecord::new(3, 1041, 1, "Windows family ja"),
        ]
    }

    #[test]
    fn collects_by_name_field_only() {
        let records = sample_records();
        let filter = NameFilter::new(NameField::FontFamilyName);
        let matched = scan(&records, &filter);

        let values: Vec<&str> = matched.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["Mac family", "Windows family", "Windows family ja"]);
    }

    #[test]
    fn preserves_source_order() {
        let records = sample_records();
        let filter = NameFilter::new(NameField::FontFamilyName);
        let matched = scan(&records, &filter);

        let positions: Vec<usize> = matched
            .iter()
            .map(|m| records.iter().position(|r| r == *m).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn fully_concrete_filter_terminates_early() {
        let records = sample_records();
        let filter = NameFilter::new(NameField::FontFamilyName)
            .with_platform(Platform::Windows)
            .with_language(1033);
        let matched = scan(&records, &filter);

        // The triple match at index 2 is collected, the tail is not.
        let values: Vec<&str> = matched.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["Mac family", "Windows family"]);
    }

    #[test]
    fn partial_filter_never_terminates_early() {
        let records = sample_records();
        let filter =
            NameFilter::new(NameField::FontFamilyName).with_platform(Platform::Windows);
        let matched = scan(&records, &filter);
        assert_eq!(matched.len(), 3);

        let filter = NameFilter::new(NameField::FontFamilyName).with_language(1033);
        let matched = scan(&records, &filter);
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn no_match_returns_empty() {
        let records = sample_records();
        let filter = NameFilter::new(NameField::LicenseDescription);
        assert!(scan(&records, &filter).is_empty());
    }

    #[test]
    fn duplicate_records_are_all_collected() {
        let records = vec![
            RawNameRecord::new(3, 1033, 13, "License A"),
            RawNameRecord::new(3, 1041, 13, "License A"),
            RawNameRecord::new(1, 0, 13, "License A"),
        ];
        let filter = NameFilter::new(NameField::LicenseDescription);
        assert_eq!(scan(&records, &filter).len(), 3);
    }

    #[test]
    fn empty_input_returns_empty() {
        let filter = NameFilter::new(NameField::FontFamilyName);
        assert!(scan(&[], &filter).is_empty());
    }
}
