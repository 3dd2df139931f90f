use log::info;

use crate::models::NormalizedProperty;

/// Consumer of normalized properties.
///
/// The reader calls `emit` once per matched record, in scan order.
pub trait PropertySink {
    fn emit(&mut self, property: &NormalizedProperty);
}

/// Sink that reports each property through the logger at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl PropertySink for LogSink {
    fn emit(&mut self, property: &NormalizedProperty) {
        info!("{}", property);
    }
}

/// Collecting sink, mainly for callers that want the raw sequence
impl PropertySink for Vec<NormalizedProperty> {
    fn emit(&mut self, property: &NormalizedProperty) {
        self.push(property.clone());
    }
}
