use crate::registry::{NameField, Platform};

/// Filter applied while scanning a naming table.
///
/// The name field is mandatory; platform and language default to match-any.
/// Records are collected by name field alone. When both optional fields are
/// set, the scan stops early at the first record matching the full triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameFilter {
    /// Which kind of string to collect
    pub name: NameField,
    /// Platform the early-termination triple must match, None for any
    pub platform: Option<Platform>,
    /// Raw language ID the early-termination triple must match, None for any
    pub language: Option<u16>,
}

impl NameFilter {
    /// Filter on a name field with no platform or language constraint
    pub fn new(name: NameField) -> Self {
        NameFilter {
            name,
            platform: None,
            language: None,
        }
    }

    /// Constrain the early-termination triple to a platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Constrain the early-termination triple to a raw language ID
    pub fn with_language(mut self, language_id: u16) -> Self {
        self.language = Some(language_id);
        self
    }
}
