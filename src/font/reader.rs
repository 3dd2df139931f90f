use std::fs;
use std::io;
use std::path::Path;

use ttf_parser::Face;

use crate::error::Error;
use crate::font::formatter::format;
use crate::font::matcher::scan;
use crate::font::sink::{LogSink, PropertySink};
use crate::font::source::NameSource;
use crate::models::{ExtractReport, NameFilter};
use crate::registry::{Language, NameField};

/// Container type of a font file, determined by its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerKind {
    /// A .ttc file holding one or more logical fonts
    Collection,
    /// A .ttf or .otf file holding exactly one logical font
    SingleFont,
    /// Anything else; the file is never opened
    Unsupported(String),
}

impl ContainerKind {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> ContainerKind {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "ttc" => ContainerKind::Collection,
            "ttf" | "otf" => ContainerKind::SingleFont,
            _ => ContainerKind::Unsupported(extension),
        }
    }
}

/// Extract naming-table properties from a font file, reporting each match
/// through the logger.
///
/// Failures never propagate: every condition is logged, recorded in the
/// report's issues, and extraction keeps whatever partial results exist.
pub fn extract(path: &Path, filter: &NameFilter) -> ExtractReport {
    let mut sink = LogSink;
    extract_with(path, filter, &mut sink)
}

/// Extract naming-table properties, streaming each match to a caller-provided
/// sink in scan order. Matches are also collected in the returned report.
pub fn extract_with(
    path: &Path,
    filter: &NameFilter,
    sink: &mut dyn PropertySink,
) -> ExtractReport {
    let mut report = ExtractReport::new();

    let kind = match ContainerKind::from_path(path) {
        ContainerKind::Unsupported(ext) => {
            report.record(Error::UnsupportedContainer(ext));
            return report;
        }
        kind => kind,
    };

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            report.record(Error::NotFound(path.to_path_buf()));
            return report;
        }
        Err(err) => {
            report.record(Error::Io(err));
            return report;
        }
    };

    match kind {
        ContainerKind::Collection => match ttf_parser::fonts_in_collection(&data) {
            // The declared count must fit the file: the header is 12 bytes
            // plus a 4-byte directory offset per logical font. A forged
            // header must not drive the loop beyond what the data can hold.
            Some(count) if 12 + 4 * u64::from(count) > data.len() as u64 => {
                report.record(Error::CollectionParse(format!(
                    "{} declares {} fonts but holds only {} bytes",
                    path.display(),
                    count,
                    data.len()
                )));
            }
            Some(count) => {
                for index in 0..count {
                    match Face::parse(&data, index) {
                        Ok(face) => process_font(&face, filter, sink, &mut report),
                        Err(err) => report.record(Error::FontParse(format!(
                            "font {} of {}: {}",
                            index,
                            path.display(),
                            err
                        ))),
                    }
                }
            }
            None => report.record(Error::CollectionParse(format!(
                "{} is not a font collection",
                path.display()
            ))),
        },
        _ => match Face::parse(&data, 0) {
            Ok(face) => process_font(&face, filter, sink, &mut report),
            Err(err) => {
                report.record(Error::FontParse(format!("{}: {}", path.display(), err)))
            }
        },
    }

    report
}

/// Run one logical font through the scan/format/emit pipeline
pub fn process_font(
    source: &impl NameSource,
    filter: &NameFilter,
    sink: &mut dyn PropertySink,
    report: &mut ExtractReport,
) {
    let records = source.name_records();
    let matched = scan(&records, filter);

    if matched.is_empty() {
        report.record(Error::PropertyNotFound(filter.name.symbol()));
        return;
    }

    for record in matched {
        let property = format(record);
        if property.lang == Language::Unresolved {
            report.record(Error::UnsupportedPlatform(record.platform_id));
        }
        sink.emit(&property);
        report.properties.push(property);
    }
}

/// The font's family name records, any platform and language
pub fn family_name(path: &Path) -> ExtractReport {
    extract(path, &NameFilter::new(NameField::FontFamilyName))
}

/// The font's license description records, any platform and language
pub fn license_description(path: &Path) -> ExtractReport {
    extract(path, &NameFilter::new(NameField::LicenseDescription))
}
