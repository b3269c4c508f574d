//! Report type definitions.

use crate::error::Cvss2Error;
use crate::Cvss2;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// CVSS v2.0 JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Options shared by all reporters
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Omit default metrics and absent scores from JSON
    pub minimal_json: bool,
    /// Maximum number of corpus failures listed per file (0 = all)
    pub max_reported_failures: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            minimal_json: false,
            max_reported_failures: 20,
        }
    }
}

/// Result of processing one command-line vector.
#[derive(Debug, Clone)]
pub struct VectorReport {
    /// The text as given by the user
    pub input: String,
    pub outcome: Result<Cvss2, Cvss2Error>,
}

impl VectorReport {
    #[must_use]
    pub fn new(input: impl Into<String>, outcome: Result<Cvss2, Cvss2Error>) -> Self {
        Self {
            input: input.into(),
            outcome,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}
