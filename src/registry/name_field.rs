use std::collections::HashMap;

use lazy_static::lazy_static;

use super::UNKNOWN;

/// Name IDs reserved by the OpenType naming table.
///
/// Each variant is one semantic kind of human-readable string a font can
/// carry; the discriminant is the reserved ID. ID 15 is reserved by the
/// spec and intentionally absent.
///
/// https://learn.microsoft.com/en-us/typography/opentype/spec/name#name-ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NameField {
    Copyright = 0,
    FontFamilyName = 1,
    FontSubfamilyName = 2,
    UniqueFontIdentifier = 3,
    FullFontName = 4,
    VersionString = 5,
    PostscriptName = 6,
    Trademark = 7,
    ManufacturerName = 8,
    Designer = 9,
    Description = 10,
    UrlVendor = 11,
    UrlDesigner = 12,
    LicenseDescription = 13,
    LicenseInfoUrl = 14,
    TypographicFamilyName = 16,
    TypographicSubfamilyName = 17,
    CompatibleFull = 18,
    SampleText = 19,
    PostscriptCidFindfontName = 20,
    WwsFamilyName = 21,
    WwsSubfamilyName = 22,
    LightBackgroundPalette = 23,
    DarkBackgroundPalette = 24,
    VariationsPostscriptNamePrefix = 25,
}

/// Every modeled name field with its symbolic name
const NAME_FIELDS: &[(NameField, &str)] = &[
    (NameField::Copyright, "COPYRIGHT"),
    (NameField::FontFamilyName, "FONT_FAMILY_NAME"),
    (NameField::FontSubfamilyName, "FONT_SUBFAMILY_NAME"),
    (NameField::UniqueFontIdentifier, "UNIQUE_FONT_IDENTIFIER"),
    (NameField::FullFontName, "FULL_FONT_NAME"),
    (NameField::VersionString, "VERSION_STRING"),
    (NameField::PostscriptName, "POSTSCRIPT_NAME"),
    (NameField::Trademark, "TRADEMARK"),
    (NameField::ManufacturerName, "MANUFACTURER_NAME"),
    (NameField::Designer, "DESIGNER"),
    (NameField::Description, "DESCRIPTION"),
    (NameField::UrlVendor, "URL_VENDOR"),
    (NameField::UrlDesigner, "URL_DESIGNER"),
    (NameField::LicenseDescription, "LICENSE_DESCRIPTION"),
    (NameField::LicenseInfoUrl, "LICENSE_INFO_URL"),
    (NameField::TypographicFamilyName, "TYPOGRAPHIC_FAMILY_NAME"),
    (NameField::TypographicSubfamilyName, "TYPOGRAPHIC_SUBFAMILY_NAME"),
    (NameField::CompatibleFull, "COMPATIBLE_FULL"),
    (NameField::SampleText, "SAMPLE_TEXT"),
    (NameField::PostscriptCidFindfontName, "POSTSCRIPT_CID_FINDFONT_NAME"),
    (NameField::WwsFamilyName, "WWS_FAMILY_NAME"),
    (NameField::WwsSubfamilyName, "WWS_SUBFAMILY_NAME"),
    (NameField::LightBackgroundPalette, "LIGHT_BACKGROUND_PALETTE"),
    (NameField::DarkBackgroundPalette, "DARK_BACKGROUND_PALETTE"),
    (NameField::VariationsPostscriptNamePrefix, "VARIATIONS_POSTSCRIPT_NAME_PREFIX"),
];

lazy_static! {
    static ref BY_ID: HashMap<u16, NameField> =
        NAME_FIELDS.iter().map(|(field, _)| (field.id(), *field)).collect();
    static ref SYMBOLS: HashMap<NameField, &'static str> =
        NAME_FIELDS.iter().copied().collect();
}

impl NameField {
    /// Look up a name field by its raw naming-table ID
    pub fn from_id(id: u16) -> Option<NameField> {
        BY_ID.get(&id).copied()
    }

    /// Look up a name field by its symbolic name, e.g. for CLI arguments
    pub fn from_symbol(symbol: &str) -> Option<NameField> {
        NAME_FIELDS
            .iter()
            .find(|(_, sym)| sym.eq_ignore_ascii_case(symbol))
            .map(|(field, _)| *field)
    }

    /// The raw naming-table ID of this name field
    pub fn id(&self) -> u16 {
        *self as u16
    }

    /// Symbolic name of this name field
    pub fn symbol(&self) -> &'static str {
        SYMBOLS.get(self).copied().unwrap_or(UNKNOWN)
    }

    /// Resolve a raw ID to its symbolic name, "Unknown" if unrecognized
    pub fn resolve(id: u16) -> &'static str {
        NameField::from_id(id).map_or(UNKNOWN, |f| f.symbol())
    }
}
