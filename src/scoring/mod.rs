//! CVSS2 score calculation.

mod calculator;
mod rounding;
mod severity;

pub use calculator::compute;
pub use rounding::round_to_1_decimal;
pub use severity::Severity;

use rust_decimal::Decimal;

/// Base, Temporal and Environmental scores of one vector.
///
/// Every present score is rounded to one decimal place. Temporal and
/// Environmental are `None` when all of their metrics are "Not Defined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    pub base: Decimal,
    pub temporal: Option<Decimal>,
    pub environmental: Option<Decimal>,
}

impl ScoreResult {
    /// Scores as floating point values.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, Option<f64>, Option<f64>) {
        (
            score_to_f64(self.base),
            self.temporal.map(score_to_f64),
            self.environmental.map(score_to_f64),
        )
    }

    /// Qualitative rating of each present score
    #[must_use]
    pub fn severities(&self) -> (Severity, Option<Severity>, Option<Severity>) {
        (
            Severity::from_score(self.base),
            self.temporal.map(Severity::from_score),
            self.environmental.map(Severity::from_score),
        )
    }
}

/// Nearest `f64` to a one-decimal score.
pub(crate) fn score_to_f64(mut score: Decimal) -> f64 {
    score.rescale(1);
    score.mantissa() as f64 / 10.0
}
