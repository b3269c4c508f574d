//! The [`Cvss2`] vector type.

use crate::error::Result;
use crate::scoring::{compute, ScoreResult, Severity};
use crate::vector::{clean_vector, parse_vector, rh, MetricSet};
use rust_decimal::Decimal;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed and scored CVSS2 vector.
///
/// Two vectors are equal when their clean forms are equal, so field order
/// and explicit `ND` values do not matter.
#[derive(Debug, Clone)]
pub struct Cvss2 {
    vector: String,
    metrics: MetricSet,
    scores: ScoreResult,
}

impl Cvss2 {
    /// Parse and score a vector such as `AV:N/AC:L/Au:N/C:P/I:P/A:P`.
    pub fn new(vector: impl Into<String>) -> Result<Self> {
        let vector = vector.into();
        let metrics = parse_vector(&vector)?;
        let scores = compute(&metrics);
        Ok(Self {
            vector,
            metrics,
            scores,
        })
    }

    /// Parse a Red Hat style `<score>/<vector>` string.
    ///
    /// The declared score must match the computed base score.
    pub fn from_rh_vector(rh_vector: &str) -> Result<Self> {
        let (declared, vector) = rh::split_rh_vector(rh_vector)?;
        let cvss = Self::new(vector)?;
        rh::verify_declared_score(rh_vector, declared, &cvss.scores)?;
        Ok(cvss)
    }

    /// The vector exactly as supplied
    #[must_use]
    pub fn vector(&self) -> &str {
        &self.vector
    }

    #[must_use]
    pub const fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    #[must_use]
    pub const fn score_result(&self) -> ScoreResult {
        self.scores
    }

    #[must_use]
    pub const fn base_score(&self) -> Decimal {
        self.scores.base
    }

    #[must_use]
    pub const fn temporal_score(&self) -> Option<Decimal> {
        self.scores.temporal
    }

    #[must_use]
    pub const fn environmental_score(&self) -> Option<Decimal> {
        self.scores.environmental
    }

    /// `(base, temporal, environmental)`; absent layers are `None`.
    #[must_use]
    pub fn scores(&self) -> (f64, Option<f64>, Option<f64>) {
        self.scores.as_tuple()
    }

    #[must_use]
    pub fn severities(&self) -> (Severity, Option<Severity>, Option<Severity>) {
        self.scores.severities()
    }

    /// Canonical vector without "Not Defined" metrics.
    #[must_use]
    pub fn clean_vector(&self) -> String {
        clean_vector(&self.metrics)
    }

    /// Red Hat style `<base score>/<clean vector>`.
    #[must_use]
    pub fn rh_vector(&self) -> String {
        format!("{:.1}/{}", self.scores.base, self.clean_vector())
    }

    /// CVSS v2.0 JSON representation.
    ///
    /// With `minimal`, metrics at their default and absent scores are omitted.
    #[must_use]
    pub fn to_json(&self, minimal: bool) -> serde_json::Value {
        crate::reports::cvss2_to_json(self, minimal)
    }
}

impl FromStr for Cvss2 {
    type Err = crate::error::Cvss2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for Cvss2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.clean_vector())
    }
}

impl PartialEq for Cvss2 {
    fn eq(&self, other: &Self) -> bool {
        self.metrics == other.metrics
    }
}

impl Eq for Cvss2 {}

impl Hash for Cvss2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.metrics.hash(state);
    }
}
