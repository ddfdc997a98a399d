//! Human-readable record report
//!
//! Presentation layer over the record store: renders a committed record as a
//! labeled multi-line report, or a single "no data" line when nothing was
//! committed. Never touches persistent state.

use core::fmt;

use super::layout::VersionRecord;

/// Formats a read result for humans
///
/// Wraps the outcome of [`VersionStore::read`](super::VersionStore::read)
/// and implements [`core::fmt::Display`], so it works with any `fmt` sink:
/// `defmt`/serial loggers, `write!` into a heapless string, or `println!` on
/// a host.
///
/// # Example
///
/// ```
/// use core::fmt::Write;
/// use eeprom_provenance::record::{RecordReport, VersionRecord};
///
/// let record = VersionRecord::new();
/// let mut text = heapless::String::<128>::new();
/// write!(text, "{}", RecordReport::new(Some(&record))).unwrap();
/// assert!(text.starts_with("Project Name: "));
/// ```
pub struct RecordReport<'a> {
    record: Option<&'a VersionRecord>,
}

impl<'a> RecordReport<'a> {
    /// Create a report for a read outcome
    ///
    /// Pass `None` when no record was found.
    pub fn new(record: Option<&'a VersionRecord>) -> Self {
        Self { record }
    }
}

impl fmt::Display for RecordReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(record) => {
                writeln!(f, "Project Name: {}", record.project_name())?;
                writeln!(f, "Vendor: {}", record.vendor())?;
                writeln!(f, "Project Version: {}", record.project_version())?;
                writeln!(f, "Software Version: {}", record.software_version())?;
                write!(f, "Software Date: {}", record.release_date())
            }
            None => write!(f, "Version data does not exist."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    fn render(report: &RecordReport<'_>) -> String<256> {
        let mut out = String::new();
        write!(out, "{}", report).unwrap();
        out
    }

    #[test]
    fn test_report_lists_all_fields() {
        let record = VersionRecord::new();
        let text = render(&RecordReport::new(Some(&record)));

        assert_eq!(
            text.as_str(),
            "Project Name: Sand Garden\n\
             Vendor: M\n\
             Project Version: 1\n\
             Software Version: 1.0.0.0\n\
             Software Date: January 15, 2025"
        );
    }

    #[test]
    fn test_report_without_record() {
        let text = render(&RecordReport::new(None));
        assert_eq!(text.as_str(), "Version data does not exist.");
    }
}
