//! Identifier registries for naming-table record classification
//!
//! Each registry maps the raw numeric IDs found in a font's naming table to
//! symbolic names. Lookups never fail: an ID outside the modeled set
//! resolves to the literal symbol "Unknown".

pub mod language;
pub mod name_field;
pub mod platform;

pub use language::{Language, MAC_LANGUAGES, WINDOWS_LANGUAGES};
pub use name_field::NameField;
pub use platform::Platform;

/// Symbol returned by every registry for an unrecognized ID
pub const UNKNOWN: &str = "Unknown";
