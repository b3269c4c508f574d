//! CVSS v2 scoring equations.
//!
//! Reference: <https://www.first.org/cvss/v2/guide> section 3.2.
//!
//! All terms are exact decimals. Rounding happens in three places only: the
//! Base score, the temporal equation (used for both the Temporal score and
//! the adjusted temporal term of the Environmental score) and the
//! Environmental score.

use super::rounding::round_to_1_decimal;
use super::ScoreResult;
use crate::metrics::{Metric, MetricGroup};
use crate::vector::MetricSet;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const IMPACT_FACTOR: Decimal = dec!(10.41);
const EXPLOITABILITY_FACTOR: Decimal = dec!(20);
const IMPACT_WEIGHT: Decimal = dec!(0.6);
const EXPLOITABILITY_WEIGHT: Decimal = dec!(0.4);
const BASE_OFFSET: Decimal = dec!(1.5);
const IMPACT_MULTIPLIER: Decimal = dec!(1.176);
const MAX_SCORE: Decimal = dec!(10);

/// Compute Base, Temporal and Environmental scores.
///
/// Temporal is `None` when E, RL and RC are all "Not Defined";
/// Environmental is `None` when CDP, TD, CR, IR and AR are.
#[must_use]
pub fn compute(metrics: &MetricSet) -> ScoreResult {
    let exploitability = exploitability(metrics);
    let base = base_equation(base_impact(metrics), exploitability);

    let temporal = metrics
        .is_group_defined(MetricGroup::Temporal)
        .then(|| temporal_equation(base, metrics));

    let environmental = metrics
        .is_group_defined(MetricGroup::Environmental)
        .then(|| environmental_equation(exploitability, metrics));

    let result = ScoreResult {
        base: round_to_1_decimal(base),
        temporal,
        environmental,
    };
    tracing::trace!(
        base = %result.base,
        temporal = ?result.temporal,
        environmental = ?result.environmental,
        "computed CVSS2 scores"
    );
    result
}

/// Impact = 10.41 × (1 − (1−C)(1−I)(1−A))
fn impact(confidentiality: Decimal, integrity: Decimal, availability: Decimal) -> Decimal {
    IMPACT_FACTOR
        * (Decimal::ONE
            - (Decimal::ONE - confidentiality)
                * (Decimal::ONE - integrity)
                * (Decimal::ONE - availability))
}

fn base_impact(metrics: &MetricSet) -> Decimal {
    impact(
        metrics.weight(Metric::ConfidentialityImpact),
        metrics.weight(Metric::IntegrityImpact),
        metrics.weight(Metric::AvailabilityImpact),
    )
}

/// AdjustedImpact = min(10, Impact over requirement-weighted C, I and A)
fn adjusted_impact(metrics: &MetricSet) -> Decimal {
    impact(
        metrics.weight(Metric::ConfidentialityImpact)
            * metrics.weight(Metric::ConfidentialityRequirement),
        metrics.weight(Metric::IntegrityImpact) * metrics.weight(Metric::IntegrityRequirement),
        metrics.weight(Metric::AvailabilityImpact)
            * metrics.weight(Metric::AvailabilityRequirement),
    )
    .min(MAX_SCORE)
}

/// Exploitability = 20 × AV × AC × Au
fn exploitability(metrics: &MetricSet) -> Decimal {
    EXPLOITABILITY_FACTOR
        * metrics.weight(Metric::AccessVector)
        * metrics.weight(Metric::AccessComplexity)
        * metrics.weight(Metric::Authentication)
}

/// Unrounded base equation, shared by the Base and Environmental scores.
fn base_equation(impact: Decimal, exploitability: Decimal) -> Decimal {
    let f_impact = if impact.is_zero() {
        Decimal::ZERO
    } else {
        IMPACT_MULTIPLIER
    };
    (IMPACT_WEIGHT * impact + EXPLOITABILITY_WEIGHT * exploitability - BASE_OFFSET) * f_impact
}

/// round(base × E × RL × RC), with `base` unrounded.
fn temporal_equation(base: Decimal, metrics: &MetricSet) -> Decimal {
    round_to_1_decimal(
        base * metrics.weight(Metric::Exploitability)
            * metrics.weight(Metric::RemediationLevel)
            * metrics.weight(Metric::ReportConfidence),
    )
}

fn environmental_equation(exploitability: Decimal, metrics: &MetricSet) -> Decimal {
    let adjusted_base = base_equation(adjusted_impact(metrics), exploitability);
    let adjusted_temporal = temporal_equation(adjusted_base, metrics);
    round_to_1_decimal(
        (adjusted_temporal
            + (MAX_SCORE - adjusted_temporal) * metrics.weight(Metric::CollateralDamagePotential))
            * metrics.weight(Metric::TargetDistribution),
    )
}
