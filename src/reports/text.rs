//! Text report generator for terminal output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, VectorReport};
use crate::corpus::{CorpusReport, FailureKind};
use crate::scoring::Severity;
use crate::Cvss2;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "green",
    }
}

/// Text reporter for shell output
pub struct TextReporter {
    /// Use colored output
    colored: bool,
}

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_line(&self, label: &str, score: Option<Decimal>) -> String {
        let value = score.map_or_else(
            || self.color("-", "dim"),
            |score| {
                let severity = Severity::from_score(score);
                self.color(
                    &format!("{score:>4.1} ({severity})"),
                    severity_color(severity),
                )
            },
        );
        format!("  {:<15}{value}", format!("{label}:"))
    }

    fn write_vector(&self, out: &mut String, cvss: &Cvss2) -> std::fmt::Result {
        let scores = cvss.score_result();
        writeln!(out, "{}", self.color(&cvss.clean_vector(), "bold"))?;
        writeln!(out, "{}", self.score_line("Base", Some(scores.base)))?;
        writeln!(out, "{}", self.score_line("Temporal", scores.temporal))?;
        writeln!(
            out,
            "{}",
            self.score_line("Environmental", scores.environmental)
        )
    }

    fn write_corpus(
        &self,
        out: &mut String,
        report: &CorpusReport,
        limit: usize,
    ) -> std::fmt::Result {
        let status = if report.is_success() {
            self.color("OK", "green")
        } else {
            self.color("FAILED", "red")
        };
        writeln!(
            out,
            "{} {}: {}/{} vectors verified",
            status,
            self.color(&report.source, "cyan"),
            report.passed(),
            report.checked
        )?;

        if report.is_success() {
            return Ok(());
        }
        writeln!(
            out,
            "  {} mismatched, {} rejected",
            report.mismatches(),
            report.rejected()
        )?;

        let limit = if limit == 0 { usize::MAX } else { limit };
        for failure in report.failures.iter().take(limit) {
            match &failure.kind {
                FailureKind::Mismatch { expected, actual } => writeln!(
                    out,
                    "  line {}: {} expected {:?}, got {:?}",
                    failure.line,
                    failure.vector,
                    expected.as_tuple(),
                    actual.as_tuple()
                )?,
                FailureKind::Rejected(err) => writeln!(
                    out,
                    "  line {}: {}",
                    failure.line,
                    self.color(&err.detailed_message(), "red")
                )?,
            }
        }

        let hidden = report.failures.len().saturating_sub(limit);
        if hidden > 0 {
            writeln!(out, "  {}", self.color(&format!("... {hidden} more"), "dim"))?;
        }
        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate_vector_report(
        &self,
        reports: &[VectorReport],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            match &report.outcome {
                Ok(cvss) => self.write_vector(&mut out, cvss)?,
                Err(err) => writeln!(
                    out,
                    "{} {}",
                    self.color("error:", "red"),
                    err.detailed_message()
                )?,
            }
        }
        Ok(out)
    }

    fn generate_check_report(
        &self,
        reports: &[CorpusReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for report in reports {
            self.write_corpus(&mut out, report, config.max_reported_failures)?;
        }

        let checked: usize = reports.iter().map(|r| r.checked).sum();
        let failed: usize = reports.iter().map(|r| r.failures.len()).sum();
        writeln!(
            out,
            "{}",
            self.color(
                &format!(
                    "{} files, {checked} vectors, {failed} failures",
                    reports.len()
                ),
                "bold"
            )
        )?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
