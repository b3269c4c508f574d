//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, VectorReport};
use crate::corpus::{CorpusReport, FailureKind};
use crate::metrics::{Metric, MetricGroup};
use crate::Cvss2;
use crate::scoring::score_to_f64;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

/// Version string of the CVSS v2.0 JSON schema
const CVSS_VERSION: &str = "2.0";

/// Build the CVSS v2.0 JSON object for a vector.
///
/// Keys follow the schema order: base metrics and score, then temporal,
/// then environmental. With `minimal`, metrics at their default and
/// absent scores are left out; otherwise absent scores are `null`.
#[must_use]
pub fn cvss2_to_json(cvss: &Cvss2, minimal: bool) -> Value {
    let mut object = Map::new();
    object.insert("version".into(), CVSS_VERSION.into());
    object.insert("vectorString".into(), cvss.clean_vector().into());

    let scores = cvss.score_result();
    let groups = [
        (MetricGroup::Base, "baseScore", Some(scores.base)),
        (MetricGroup::Temporal, "temporalScore", scores.temporal),
        (
            MetricGroup::Environmental,
            "environmentalScore",
            scores.environmental,
        ),
    ];

    for (group, score_key, score) in groups {
        for metric in Metric::in_group(group) {
            if minimal && cvss.metrics().is_default(metric) {
                continue;
            }
            let definition = metric.definition();
            let value = cvss.metrics().get(metric);
            object.insert(definition.json_key.into(), value.json_name.into());
        }
        match score {
            Some(score) => {
                object.insert(score_key.into(), score_value(score));
            }
            None if !minimal => {
                object.insert(score_key.into(), Value::Null);
            }
            None => {}
        }
    }

    Value::Object(object)
}

fn score_value(score: Decimal) -> Value {
    Value::from(score_to_f64(score))
}

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_vector_report(
        &self,
        reports: &[VectorReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let entries: Vec<Value> = reports
            .iter()
            .map(|report| match &report.outcome {
                Ok(cvss) => cvss2_to_json(cvss, config.minimal_json),
                Err(err) => serde_json::json!({
                    "input": report.input,
                    "error": {
                        "kind": format!("{:?}", err.kind()),
                        "message": err.detailed_message(),
                    }
                }),
            })
            .collect();
        self.render(&entries)
    }

    fn generate_check_report(
        &self,
        reports: &[CorpusReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let files: Vec<JsonCheckReport<'_>> = reports
            .iter()
            .map(|report| JsonCheckReport::new(report, config.max_reported_failures))
            .collect();
        self.render(&files)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON structures
// ============================================================================

#[derive(Serialize)]
struct JsonCheckReport<'a> {
    source: &'a str,
    checked: usize,
    passed: usize,
    mismatches: usize,
    rejected: usize,
    failures: Vec<JsonFailure<'a>>,
}

impl<'a> JsonCheckReport<'a> {
    fn new(report: &'a CorpusReport, limit: usize) -> Self {
        let limit = if limit == 0 { usize::MAX } else { limit };
        Self {
            source: &report.source,
            checked: report.checked,
            passed: report.passed(),
            mismatches: report.mismatches(),
            rejected: report.rejected(),
            failures: report
                .failures
                .iter()
                .take(limit)
                .map(|failure| {
                    let (expected, actual, error) = match &failure.kind {
                        FailureKind::Mismatch { expected, actual } => {
                            (Some(expected.as_tuple()), Some(actual.as_tuple()), None)
                        }
                        FailureKind::Rejected(err) => (None, None, Some(err.to_string())),
                    };
                    JsonFailure {
                        line: failure.line,
                        vector: &failure.vector,
                        expected,
                        actual,
                        error,
                    }
                })
                .collect(),
        }
    }
}

type ScoreTuple = (f64, Option<f64>, Option<f64>);

#[derive(Serialize)]
struct JsonFailure<'a> {
    line: usize,
    vector: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<ScoreTuple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<ScoreTuple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}
