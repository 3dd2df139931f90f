use super::UNKNOWN;

/// Platform IDs reserved by the OpenType naming table.
///
/// https://learn.microsoft.com/en-us/typography/opentype/spec/name#platform-ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Unicode,
    Mac,
    Iso,
    Windows,
    Custom,
}

impl Platform {
    /// Look up a platform by its raw naming-table ID
    pub fn from_id(id: u16) -> Option<Platform> {
        match id {
            0 => Some(Platform::Unicode),
            1 => Some(Platform::Mac),
            2 => Some(Platform::Iso),
            3 => Some(Platform::Windows),
            4 => Some(Platform::Custom),
            _ => None,
        }
    }

    /// The raw naming-table ID of this platform
    pub fn id(&self) -> u16 {
        match self {
            Platform::Unicode => 0,
            Platform::Mac => 1,
            Platform::Iso => 2,
            Platform::Windows => 3,
            Platform::Custom => 4,
        }
    }

    /// Symbolic name of this platform
    pub fn symbol(&self) -> &'static str {
        match self {
            Platform::Unicode => "UNICODE",
            Platform::Mac => "MAC",
            Platform::Iso => "ISO",
            Platform::Windows => "WINDOWS",
            Platform::Custom => "CUSTOM",
        }
    }

    /// Resolve a raw ID to its symbolic name, "Unknown" if unrecognized
    pub fn resolve(id: u16) -> &'static str {
        Platform::from_id(id).map_or(UNKNOWN, |p| p.symbol())
    }

    /// Whether records from this platform carry a language ID the tool can
    /// resolve. Only the Mac and Windows language registries are modeled.
    pub fn has_language_registry(&self) -> bool {
        matches!(self, Platform::Mac | Platform::Windows)
    }
}
