//! CVSS2 metric registry.
//!
//! Every metric of CVSS v2 is described once, in a
//! statically initialized table. The order of [`Metric`] variants is the
//! canonical output order: Base metrics first, then Temporal, then
//! Environmental.

mod table;

pub use table::{MetricDefinition, MetricValue, METRICS, NOT_DEFINED};

use serde::{Deserialize, Serialize};

/// A CVSS2 metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    AccessVector,
    AccessComplexity,
    Authentication,
    ConfidentialityImpact,
    IntegrityImpact,
    AvailabilityImpact,
    Exploitability,
    RemediationLevel,
    ReportConfidence,
    CollateralDamagePotential,
    TargetDistribution,
    ConfidentialityRequirement,
    IntegrityRequirement,
    AvailabilityRequirement,
}

/// Scoring layer a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricGroup {
    Base,
    Temporal,
    Environmental,
}

impl Metric {
    /// Number of CVSS2 metrics
    pub const COUNT: usize = 14;

    /// All metrics in canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::AccessVector,
        Self::AccessComplexity,
        Self::Authentication,
        Self::ConfidentialityImpact,
        Self::IntegrityImpact,
        Self::AvailabilityImpact,
        Self::Exploitability,
        Self::RemediationLevel,
        Self::ReportConfidence,
        Self::CollateralDamagePotential,
        Self::TargetDistribution,
        Self::ConfidentialityRequirement,
        Self::IntegrityRequirement,
        Self::AvailabilityRequirement,
    ];

    /// Resolve a vector abbreviation (case-sensitive).
    #[must_use]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.abbreviation() == abbreviation)
    }

    /// Static definition of this metric
    #[must_use]
    pub fn definition(self) -> &'static MetricDefinition {
        &METRICS[self.index()]
    }

    /// Position in canonical output order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        self.definition().abbreviation
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    #[must_use]
    pub fn group(self) -> MetricGroup {
        self.definition().group
    }

    #[must_use]
    pub fn is_mandatory(self) -> bool {
        self.definition().mandatory
    }

    /// Mandatory metrics, in canonical order
    pub fn mandatory() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|metric| metric.is_mandatory())
    }

    /// Metrics of one scoring layer, in canonical order
    pub fn in_group(group: MetricGroup) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |metric| metric.group() == group)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl std::fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Temporal => write!(f, "Temporal"),
            Self::Environmental => write!(f, "Environmental"),
        }
    }
}
