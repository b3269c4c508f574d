//! Configuration types for cvss2-tools.

use crate::reports::{ReportConfig, ReportFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of corpus failures listed per file
pub const DEFAULT_MAX_REPORTED_FAILURES: usize = 20;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Corpus verification configuration
    pub check: CheckConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter options derived from this configuration
    #[must_use]
    pub const fn report_config(&self) -> ReportConfig {
        ReportConfig {
            minimal_json: self.output.minimal_json,
            max_reported_failures: self.check.max_reported_failures,
        }
    }
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Omit default metrics and absent scores from JSON output
    pub minimal_json: bool,
}

/// Corpus verification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CheckConfig {
    /// Stop after the first corpus file with failures
    pub fail_fast: bool,
    /// Maximum failures listed per corpus file (0 = all)
    pub max_reported_failures: usize,
    /// Worker threads for parallel verification (0 = one per CPU)
    pub threads: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_reported_failures: DEFAULT_MAX_REPORTED_FAILURES,
            threads: 0,
        }
    }
}
