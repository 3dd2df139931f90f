//! fontprop - inspect human-readable properties in font naming tables
//!
//! Opens a font container (a single .ttf/.otf font or a .ttc collection),
//! walks its naming-table records, classifies each by platform, name field
//! and language, and reports the matches in a normalized shape. Useful for
//! checking a font's provenance or licensing without rendering it.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};
pub use font::{
    extract, extract_with, family_name, license_description, ContainerKind, LogSink, NameSource,
    PropertySink,
};
pub use models::{ExtractReport, NameFilter, NormalizedProperty, RawNameRecord};
pub use registry::{Language, NameField, Platform};
