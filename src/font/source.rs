use ttf_parser::{Face, PlatformId};

use crate::models::RawNameRecord;

/// A logical font exposing its naming-table records.
///
/// The seam between the pipeline and the container parser; tests substitute
/// an in-memory source here.
pub trait NameSource {
    /// The font's naming-table records in table order
    fn name_records(&self) -> Vec<RawNameRecord>;
}

impl NameSource for Face<'_> {
    fn name_records(&self) -> Vec<RawNameRecord> {
        self.names()
            .into_iter()
            .map(|name| {
                RawNameRecord::new(
                    platform_id_to_raw(name.platform_id),
                    name.language_id,
                    name.name_id,
                    decode_name_value(&name),
                )
            })
            .collect()
    }
}

fn platform_id_to_raw(platform_id: PlatformId) -> u16 {
    match platform_id {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

/// Decode a record's string payload.
///
/// ttf-parser only decodes Unicode-encoded names (UTF-16BE). Other payloads,
/// in practice Mac Roman, fall back to a byte-per-char decode which is exact
/// for the ASCII range.
fn decode_name_value(name: &ttf_parser::name::Name<'_>) -> String {
    if let Some(value) = name.to_string() {
        return value;
    }
    name.name.iter().map(|&byte| byte as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ids_map_to_reserved_values() {
        assert_eq!(platform_id_to_raw(PlatformId::Unicode), 0);
        assert_eq!(platform_id_to_raw(PlatformId::Macintosh), 1);
        assert_eq!(platform_id_to_raw(PlatformId::Iso), 2);
        assert_eq!(platform_id_to_raw(PlatformId::Windows), 3);
        assert_eq!(platform_id_to_raw(PlatformId::Custom), 4);
    }
}
