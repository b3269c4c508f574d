//! Red Hat style vectors: `<base score>/<vector>`.
//!
//! Red Hat security data publishes CVSS2 vectors prefixed with the base
//! score, e.g. `4.3/AV:N/AC:M/Au:N/C:N/I:P/A:N`. The declared score is
//! checked against the locally computed one.

use super::{parse_vector, MetricSet};
use crate::error::{Cvss2Error, Result, RhMalformedReason};
use crate::scoring::{compute, ScoreResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Largest accepted distance between the declared and computed base score.
pub const RH_SCORE_TOLERANCE: Decimal = dec!(0.01);

/// Split a Red Hat style vector into its declared score and vector part.
pub fn split_rh_vector(rh_vector: &str) -> Result<(Decimal, &str)> {
    let (score, vector) = rh_vector
        .split_once('/')
        .ok_or_else(|| Cvss2Error::rh_malformed(rh_vector, RhMalformedReason::MissingScore))?;

    let declared = parse_declared_score(score).ok_or_else(|| {
        Cvss2Error::rh_malformed(
            rh_vector,
            RhMalformedReason::InvalidScore {
                score: score.to_string(),
            },
        )
    })?;

    Ok((declared, vector))
}

/// Parse the leading score of a Red Hat style vector.
///
/// Any number `f64` accepts is a score. Values beyond the `Decimal` range,
/// including infinities, saturate to `Decimal::MAX` or `Decimal::MIN`; no
/// CVSS2 base score lies near either, so they can only mismatch. `NaN` is
/// not a score.
fn parse_declared_score(score: &str) -> Option<Decimal> {
    if let Ok(declared) = Decimal::from_str(score) {
        return Some(declared);
    }
    let value = score.parse::<f64>().ok().filter(|value| !value.is_nan())?;
    Some(Decimal::try_from(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }))
}

/// Check a declared base score against the computed one.
pub fn verify_declared_score(
    rh_vector: &str,
    declared: Decimal,
    scores: &ScoreResult,
) -> Result<()> {
    let mismatch = declared
        .checked_sub(scores.base)
        .map_or(true, |difference| difference.abs() > RH_SCORE_TOLERANCE);
    if mismatch {
        tracing::debug!(
            rh_vector,
            %declared,
            computed = %scores.base,
            "declared CVSS2 score does not match"
        );
        return Err(Cvss2Error::RhScoreMismatch {
            vector: rh_vector.to_string(),
            declared,
            computed: scores.base,
        });
    }
    Ok(())
}

/// Parse and score a Red Hat style vector.
///
/// Errors from the vector part propagate unchanged; a well-formed vector
/// whose score disagrees with the prefix yields
/// [`Cvss2Error::RhScoreMismatch`].
pub fn from_rh_vector(rh_vector: &str) -> Result<(MetricSet, ScoreResult)> {
    let (declared, vector) = split_rh_vector(rh_vector)?;
    let metrics = parse_vector(vector)?;
    let scores = compute(&metrics);
    verify_declared_score(rh_vector, declared, &scores)?;
    Ok((metrics, scores))
}
