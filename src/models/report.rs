use log::{error, warn};

use crate::error::Error;
use crate::models::NormalizedProperty;

/// Outcome of one extraction call.
///
/// An empty property list is ambiguous on its own: it may mean the font has
/// no matching record or that opening the file failed. `issues` carries every
/// condition encountered, so callers do not have to inspect logs.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Matched records in scan order, across all logical fonts
    pub properties: Vec<NormalizedProperty>,
    /// Every warning- and error-level condition encountered
    pub issues: Vec<Error>,
}

impl ExtractReport {
    pub fn new() -> Self {
        ExtractReport::default()
    }

    /// Log an issue at its level and record it in the report
    pub fn record(&mut self, issue: Error) {
        if issue.is_warning() {
            warn!("{}", issue);
        } else {
            error!("{}", issue);
        }
        self.issues.push(issue);
    }

    /// Whether any error-level condition was recorded
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| !issue.is_warning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn distinguishes_errors_from_warnings() {
        let mut report = ExtractReport::new();
        assert!(!report.has_errors());

        report.record(Error::PropertyNotFound("FONT_FAMILY_NAME"));
        assert!(!report.has_errors());

        report.record(Error::NotFound(PathBuf::from("/missing.ttf")));
        assert!(report.has_errors());
        assert_eq!(report.issues.len(), 2);
    }
}
