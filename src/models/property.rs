use std::fmt;

use crate::registry::Language;

/// A matched naming-table record after registry resolution.
///
/// Has no identity beyond its contents; one is produced per match and handed
/// to the reporting sink in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProperty {
    /// Resolved name-field symbol, "Unknown" for unrecognized IDs
    pub name: &'static str,
    /// Resolved platform symbol, "Unknown" for unrecognized IDs
    pub platform: &'static str,
    /// The record's language, keyed by its platform
    pub lang: Language,
    /// Decoded string payload
    pub value: String,
}

impl fmt::Display for NormalizedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): {}",
            self.name,
            self.platform,
            self.lang.symbol(),
            self.value
        )
    }
}
