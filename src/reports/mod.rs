//! Report generation for scored vectors and corpus checks.
//!
//! Two output formats are provided:
//! - Text: aligned terminal output, optionally colored by severity
//! - JSON: the CVSS v2.0 JSON representation of each vector

mod json;
mod text;
mod types;

pub use json::{cvss2_to_json, JsonReporter};
pub use text::TextReporter;
pub use types::{ReportConfig, ReportFormat, VectorReport};

use crate::corpus::CorpusReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for vectors given on the command line
    fn generate_vector_report(
        &self,
        reports: &[VectorReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for one or more verified corpus files
    fn generate_check_report(
        &self,
        reports: &[CorpusReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a vector report to a writer
    fn write_vector_report(
        &self,
        reports: &[VectorReport],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_vector_report(reports, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => {
            if use_color {
                Box::new(TextReporter::new())
            } else {
                Box::new(TextReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cvss2;

    #[test]
    fn test_create_reporter_format() {
        assert_eq!(create_reporter(ReportFormat::Text).format(), ReportFormat::Text);
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_vector_report() {
        let vector = "AV:N/AC:L/Au:N/C:P/I:P/A:P";
        let reports = vec![VectorReport::new(vector, Cvss2::new(vector))];
        let reporter = create_reporter_with_options(ReportFormat::Text, false);

        let mut buffer = Vec::new();
        reporter
            .write_vector_report(&reports, &ReportConfig::default(), &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains(vector));
        assert!(!output.contains("\x1b["));
    }
}
