//! Unified error types for cvss2-tools.
//!
//! Vector handling fails in exactly four ways, and callers are expected to
//! branch on them: a structurally malformed vector, a vector missing a
//! mandatory metric, a Red Hat style vector that cannot be split into a
//! score and a vector, and a Red Hat style vector whose declared score
//! disagrees with the computed one. [`Cvss2Error::kind`] exposes the
//! discriminant without the payload.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for CVSS2 vector operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Cvss2Error {
    /// Structurally invalid vector text
    #[error("Malformed CVSS2 vector \"{vector}\"")]
    Malformed {
        vector: String,
        #[source]
        reason: MalformedReason,
    },

    /// Every token is valid but a mandatory metric never appeared
    #[error("Missing mandatory CVSS2 metrics {} in \"{vector}\"", .missing.join(", "))]
    Mandatory {
        vector: String,
        missing: Vec<&'static str>,
    },

    /// The `<score>/<vector>` form cannot be split or the score is not a number
    #[error("Malformed CVSS2 vector in RH format \"{vector}\"")]
    RhMalformed {
        vector: String,
        #[source]
        reason: RhMalformedReason,
    },

    /// The `<score>/<vector>` form parsed but the declared score is wrong
    #[error(
        "Declared score {declared} does not match computed base score {computed} for \"{vector}\""
    )]
    RhScoreMismatch {
        vector: String,
        declared: Decimal,
        computed: Decimal,
    },
}

/// Specific reasons for a malformed vector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedReason {
    #[error("vector is empty")]
    Empty,

    #[error("field \"{field}\" is not in METRIC:VALUE form")]
    InvalidField { field: String },

    #[error("unknown metric \"{metric}\"")]
    UnknownMetric { metric: String },

    #[error("unknown value \"{value}\" for metric {metric}")]
    UnknownValue { metric: &'static str, value: String },

    #[error("metric {metric} appears more than once")]
    DuplicateMetric { metric: &'static str },
}

/// Specific reasons for a malformed Red Hat style vector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RhMalformedReason {
    #[error("expected <score>/<vector>")]
    MissingScore,

    #[error("score \"{score}\" is not a decimal number")]
    InvalidScore { score: String },
}

/// Error kind without payload, for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Malformed,
    Mandatory,
    RhMalformed,
    RhScoreMismatch,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cvss2-tools operations
pub type Result<T> = std::result::Result<T, Cvss2Error>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl Cvss2Error {
    /// Create a malformed-vector error
    pub fn malformed(vector: impl Into<String>, reason: MalformedReason) -> Self {
        Self::Malformed {
            vector: vector.into(),
            reason,
        }
    }

    /// Create a missing-mandatory-metric error
    pub fn mandatory(vector: impl Into<String>, missing: Vec<&'static str>) -> Self {
        Self::Mandatory {
            vector: vector.into(),
            missing,
        }
    }

    /// Create a malformed RH vector error
    pub fn rh_malformed(vector: impl Into<String>, reason: RhMalformedReason) -> Self {
        Self::RhMalformed {
            vector: vector.into(),
            reason,
        }
    }

    /// The payload-free kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Mandatory { .. } => ErrorKind::Mandatory,
            Self::RhMalformed { .. } => ErrorKind::RhMalformed,
            Self::RhScoreMismatch { .. } => ErrorKind::RhScoreMismatch,
        }
    }

    /// Display text followed by the underlying reason, if any
    #[must_use]
    pub fn detailed_message(&self) -> String {
        match std::error::Error::source(self) {
            Some(reason) => format!("{self}: {reason}"),
            None => self.to_string(),
        }
    }

    /// The input text the error refers to
    #[must_use]
    pub fn vector(&self) -> &str {
        match self {
            Self::Malformed { vector, .. }
            | Self::Mandatory { vector, .. }
            | Self::RhMalformed { vector, .. }
            | Self::RhScoreMismatch { vector, .. } => vector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Cvss2Error::malformed("AV:X", MalformedReason::Empty);
        assert_eq!(err.to_string(), "Malformed CVSS2 vector \"AV:X\"");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("vector is empty")
        );

        let err = Cvss2Error::mandatory("AV:L", vec!["AC", "Au"]);
        let display = err.to_string();
        assert!(display.contains("AC, Au"), "missing list: {display}");
    }

    #[test]
    fn test_detailed_message() {
        let err = Cvss2Error::malformed(
            "AX:A",
            MalformedReason::UnknownMetric {
                metric: "AX".to_string(),
            },
        );
        assert_eq!(
            err.detailed_message(),
            "Malformed CVSS2 vector \"AX:A\": unknown metric \"AX\""
        );

        let err = Cvss2Error::mandatory("AV:L", vec!["AC"]);
        assert_eq!(err.detailed_message(), err.to_string());
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Cvss2Error::malformed("", MalformedReason::Empty).kind(),
            ErrorKind::Malformed
        );
        assert_eq!(
            Cvss2Error::mandatory("", vec!["A"]).kind(),
            ErrorKind::Mandatory
        );
        assert_eq!(
            Cvss2Error::rh_malformed("", RhMalformedReason::MissingScore).kind(),
            ErrorKind::RhMalformed
        );
        let mismatch = Cvss2Error::RhScoreMismatch {
            vector: "5.0/AV:L".to_string(),
            declared: dec!(5.0),
            computed: dec!(4.3),
        };
        assert_eq!(mismatch.kind(), ErrorKind::RhScoreMismatch);
        assert_eq!(mismatch.vector(), "5.0/AV:L");
    }

    #[test]
    fn test_rh_source_chain() {
        let err = Cvss2Error::rh_malformed(
            "ABC/AV:L",
            RhMalformedReason::InvalidScore {
                score: "ABC".to_string(),
            },
        );
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("ABC"));
    }
}
