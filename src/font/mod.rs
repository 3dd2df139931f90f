//! Naming-table extraction pipeline

pub mod formatter;
pub mod matcher;
pub mod reader;
pub mod sink;
pub mod source;

pub use formatter::format;
pub use matcher::scan;
pub use reader::{extract, extract_with, family_name, license_description, ContainerKind};
pub use sink::{LogSink, PropertySink};
pub use source::NameSource;
