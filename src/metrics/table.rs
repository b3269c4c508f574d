//! CVSS v2 metric constants.
//!
//! Reference: <https://www.first.org/cvss/v2/guide> section 3.2.
//! Weights are kept at their shortest decimal form.

use super::{Metric, MetricGroup};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Token used by every optional metric for "Not Defined"
pub const NOT_DEFINED: &str = "ND";

/// One allowed value of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricValue {
    /// Vector token, e.g. `"POC"`
    pub token: &'static str,
    /// Numeric weight used by the scoring equations
    pub weight: Decimal,
    /// Name in the CVSS v2.0 JSON schema, e.g. `"PROOF_OF_CONCEPT"`
    pub json_name: &'static str,
}

impl MetricValue {
    const fn new(token: &'static str, weight: Decimal, json_name: &'static str) -> Self {
        Self {
            token,
            weight,
            json_name,
        }
    }
}

/// Static description of one metric.
#[derive(Debug)]
pub struct MetricDefinition {
    pub metric: Metric,
    /// Vector abbreviation, e.g. `"AV"`
    pub abbreviation: &'static str,
    /// Human readable name
    pub name: &'static str,
    /// Property name in the CVSS v2.0 JSON schema
    pub json_key: &'static str,
    pub group: MetricGroup,
    pub mandatory: bool,
    /// Allowed values
    pub values: &'static [MetricValue],
    /// Token materialized when an optional metric is absent
    pub default: Option<&'static str>,
}

impl MetricDefinition {
    /// Look up an allowed value by token (case-sensitive).
    #[must_use]
    pub fn value(&self, token: &str) -> Option<&'static MetricValue> {
        self.values.iter().find(|value| value.token == token)
    }

    /// The "Not Defined" value of an optional metric.
    #[must_use]
    pub fn default_value(&self) -> Option<&'static MetricValue> {
        self.default.and_then(|token| self.value(token))
    }

    /// Whether `token` is this metric's default.
    #[must_use]
    pub fn is_default(&self, token: &str) -> bool {
        self.default == Some(token)
    }

    /// Allowed tokens, in table order
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        self.values.iter().map(|value| value.token)
    }
}

const ACCESS_VECTOR: &[MetricValue] = &[
    MetricValue::new("L", dec!(0.395), "LOCAL"),
    MetricValue::new("A", dec!(0.646), "ADJACENT_NETWORK"),
    MetricValue::new("N", dec!(1), "NETWORK"),
];

const ACCESS_COMPLEXITY: &[MetricValue] = &[
    MetricValue::new("H", dec!(0.35), "HIGH"),
    MetricValue::new("M", dec!(0.61), "MEDIUM"),
    MetricValue::new("L", dec!(0.71), "LOW"),
];

const AUTHENTICATION: &[MetricValue] = &[
    MetricValue::new("M", dec!(0.45), "MULTIPLE"),
    MetricValue::new("S", dec!(0.56), "SINGLE"),
    MetricValue::new("N", dec!(0.704), "NONE"),
];

const IMPACT: &[MetricValue] = &[
    MetricValue::new("N", dec!(0), "NONE"),
    MetricValue::new("P", dec!(0.275), "PARTIAL"),
    MetricValue::new("C", dec!(0.66), "COMPLETE"),
];

const EXPLOITABILITY: &[MetricValue] = &[
    MetricValue::new("U", dec!(0.85), "UNPROVEN"),
    MetricValue::new("POC", dec!(0.9), "PROOF_OF_CONCEPT"),
    MetricValue::new("F", dec!(0.95), "FUNCTIONAL"),
    MetricValue::new("H", dec!(1), "HIGH"),
    MetricValue::new(NOT_DEFINED, dec!(1), "NOT_DEFINED"),
];

const REMEDIATION_LEVEL: &[MetricValue] = &[
    MetricValue::new("OF", dec!(0.87), "OFFICIAL_FIX"),
    MetricValue::new("TF", dec!(0.9), "TEMPORARY_FIX"),
    MetricValue::new("W", dec!(0.95), "WORKAROUND"),
    MetricValue::new("U", dec!(1), "UNAVAILABLE"),
    MetricValue::new(NOT_DEFINED, dec!(1), "NOT_DEFINED"),
];

const REPORT_CONFIDENCE: &[MetricValue] = &[
    MetricValue::new("UC", dec!(0.9), "UNCONFIRMED"),
    MetricValue::new("UR", dec!(0.95), "UNCORROBORATED"),
    MetricValue::new("C", dec!(1), "CONFIRMED"),
    MetricValue::new(NOT_DEFINED, dec!(1), "NOT_DEFINED"),
];

// ND is neutral at 0 here: CDP is an additive term, not a multiplier.
const COLLATERAL_DAMAGE_POTENTIAL: &[MetricValue] = &[
    MetricValue::new("N", dec!(0), "NONE"),
    MetricValue::new("L", dec!(0.1), "LOW"),
    MetricValue::new("LM", dec!(0.3), "LOW_MEDIUM"),
    MetricValue::new("MH", dec!(0.4), "MEDIUM_HIGH"),
    MetricValue::new("H", dec!(0.5), "HIGH"),
    MetricValue::new(NOT_DEFINED, dec!(0), "NOT_DEFINED"),
];

const TARGET_DISTRIBUTION: &[MetricValue] = &[
    MetricValue::new("N", dec!(0), "NONE"),
    MetricValue::new("L", dec!(0.25), "LOW"),
    MetricValue::new("M", dec!(0.75), "MEDIUM"),
    MetricValue::new("H", dec!(1), "HIGH"),
    MetricValue::new(NOT_DEFINED, dec!(1), "NOT_DEFINED"),
];

const SECURITY_REQUIREMENT: &[MetricValue] = &[
    MetricValue::new("L", dec!(0.5), "LOW"),
    MetricValue::new("M", dec!(1), "MEDIUM"),
    MetricValue::new("H", dec!(1.51), "HIGH"),
    MetricValue::new(NOT_DEFINED, dec!(1), "NOT_DEFINED"),
];

const fn base(
    metric: Metric,
    abbreviation: &'static str,
    name: &'static str,
    json_key: &'static str,
    values: &'static [MetricValue],
) -> MetricDefinition {
    MetricDefinition {
        metric,
        abbreviation,
        name,
        json_key,
        group: MetricGroup::Base,
        mandatory: true,
        values,
        default: None,
    }
}

const fn optional(
    metric: Metric,
    group: MetricGroup,
    abbreviation: &'static str,
    name: &'static str,
    json_key: &'static str,
    values: &'static [MetricValue],
) -> MetricDefinition {
    MetricDefinition {
        metric,
        abbreviation,
        name,
        json_key,
        group,
        mandatory: false,
        values,
        default: Some(NOT_DEFINED),
    }
}

/// The CVSS2 metric table, indexed by [`Metric::index`].
pub static METRICS: [MetricDefinition; Metric::COUNT] = [
    base(
        Metric::AccessVector,
        "AV",
        "Access Vector",
        "accessVector",
        ACCESS_VECTOR,
    ),
    base(
        Metric::AccessComplexity,
        "AC",
        "Access Complexity",
        "accessComplexity",
        ACCESS_COMPLEXITY,
    ),
    base(
        Metric::Authentication,
        "Au",
        "Authentication",
        "authentication",
        AUTHENTICATION,
    ),
    base(
        Metric::ConfidentialityImpact,
        "C",
        "Confidentiality Impact",
        "confidentialityImpact",
        IMPACT,
    ),
    base(
        Metric::IntegrityImpact,
        "I",
        "Integrity Impact",
        "integrityImpact",
        IMPACT,
    ),
    base(
        Metric::AvailabilityImpact,
        "A",
        "Availability Impact",
        "availabilityImpact",
        IMPACT,
    ),
    optional(
        Metric::Exploitability,
        MetricGroup::Temporal,
        "E",
        "Exploitability",
        "exploitability",
        EXPLOITABILITY,
    ),
    optional(
        Metric::RemediationLevel,
        MetricGroup::Temporal,
        "RL",
        "Remediation Level",
        "remediationLevel",
        REMEDIATION_LEVEL,
    ),
    optional(
        Metric::ReportConfidence,
        MetricGroup::Temporal,
        "RC",
        "Report Confidence",
        "reportConfidence",
        REPORT_CONFIDENCE,
    ),
    optional(
        Metric::CollateralDamagePotential,
        MetricGroup::Environmental,
        "CDP",
        "Collateral Damage Potential",
        "collateralDamagePotential",
        COLLATERAL_DAMAGE_POTENTIAL,
    ),
    optional(
        Metric::TargetDistribution,
        MetricGroup::Environmental,
        "TD",
        "Target Distribution",
        "targetDistribution",
        TARGET_DISTRIBUTION,
    ),
    optional(
        Metric::ConfidentialityRequirement,
        MetricGroup::Environmental,
        "CR",
        "Confidentiality Requirement",
        "confidentialityRequirement",
        SECURITY_REQUIREMENT,
    ),
    optional(
        Metric::IntegrityRequirement,
        MetricGroup::Environmental,
        "IR",
        "Integrity Requirement",
        "integrityRequirement",
        SECURITY_REQUIREMENT,
    ),
    optional(
        Metric::AvailabilityRequirement,
        MetricGroup::Environmental,
        "AR",
        "Availability Requirement",
        "availabilityRequirement",
        SECURITY_REQUIREMENT,
    ),
];
