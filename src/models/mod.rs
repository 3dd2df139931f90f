//! Plain data types flowing through the extraction pipeline

pub mod filter;
pub mod property;
pub mod record;
pub mod report;

pub use filter::NameFilter;
pub use property::NormalizedProperty;
pub use record::RawNameRecord;
pub use report::ExtractReport;
