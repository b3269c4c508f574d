//! CVSS2 vector parser.
//!
//! Grammar: `METRIC:VALUE` fields joined by `/`, in any order. Abbreviations
//! and values are case-sensitive and no whitespace is tolerated.

use super::MetricSet;
use crate::error::{Cvss2Error, MalformedReason, Result};
use crate::metrics::{Metric, MetricValue};

/// Field separator
pub const FIELD_SEPARATOR: char = '/';
/// Separator between abbreviation and value
pub const VALUE_SEPARATOR: char = ':';

/// Parse a CVSS2 vector into a complete [`MetricSet`].
///
/// Empty segments (`AV:L//AC:H`) are skipped, but a vector must contain at
/// least one field. Absent optional metrics take their "Not Defined" value.
pub fn parse_vector(vector: &str) -> Result<MetricSet> {
    let mut selected: [Option<&'static MetricValue>; Metric::COUNT] = [None; Metric::COUNT];
    let mut field_count = 0usize;

    for field in vector.split(FIELD_SEPARATOR).filter(|f| !f.is_empty()) {
        field_count += 1;
        let (metric, value) = parse_field(vector, field)?;

        let slot = &mut selected[metric.index()];
        if slot.is_some() {
            return Err(Cvss2Error::malformed(
                vector,
                MalformedReason::DuplicateMetric {
                    metric: metric.abbreviation(),
                },
            ));
        }
        *slot = Some(value);
    }

    if field_count == 0 {
        return Err(Cvss2Error::malformed(vector, MalformedReason::Empty));
    }

    // Mandatory metrics have no default, so anything still unresolved is missing.
    let mut missing = Vec::new();
    let values: Vec<&'static MetricValue> = Metric::ALL
        .into_iter()
        .filter_map(|metric| {
            let value = selected[metric.index()].or_else(|| metric.definition().default_value());
            if value.is_none() {
                missing.push(metric.abbreviation());
            }
            value
        })
        .collect();

    // The array is complete exactly when nothing is missing
    let values: [&'static MetricValue; Metric::COUNT] = values
        .try_into()
        .map_err(|_| Cvss2Error::mandatory(vector, missing))?;

    tracing::trace!(vector, fields = field_count, "parsed CVSS2 vector");
    Ok(MetricSet::new(values))
}

/// Resolve one `METRIC:VALUE` field against the metric table.
fn parse_field(vector: &str, field: &str) -> Result<(Metric, &'static MetricValue)> {
    let invalid_field = || {
        Cvss2Error::malformed(
            vector,
            MalformedReason::InvalidField {
                field: field.to_string(),
            },
        )
    };

    let (abbreviation, token) = field.split_once(VALUE_SEPARATOR).ok_or_else(invalid_field)?;
    if token.contains(VALUE_SEPARATOR) {
        return Err(invalid_field());
    }

    let metric = Metric::from_abbreviation(abbreviation).ok_or_else(|| {
        Cvss2Error::malformed(
            vector,
            MalformedReason::UnknownMetric {
                metric: abbreviation.to_string(),
            },
        )
    })?;

    let value = metric.definition().value(token).ok_or_else(|| {
        Cvss2Error::malformed(
            vector,
            MalformedReason::UnknownValue {
                metric: metric.abbreviation(),
                value: token.to_string(),
            },
        )
    })?;

    Ok((metric, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn reason(vector: &str) -> MalformedReason {
        match parse_vector(vector) {
            Err(Cvss2Error::Malformed { reason, .. }) => reason,
            other => panic!("expected malformed error for {vector:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_mandatory_only() {
        let set = parse_vector("AV:A/AC:L/Au:M/C:C/I:P/A:C").expect("valid vector");
        assert_eq!(set.token(Metric::AccessVector), "A");
        assert_eq!(set.token(Metric::Authentication), "M");
        for metric in Metric::ALL.into_iter().filter(|m| !m.is_mandatory()) {
            assert_eq!(set.token(metric), "ND", "{metric}");
        }
    }

    #[test]
    fn test_parse_any_order() {
        let ordered = parse_vector("AV:A/AC:L/Au:M/C:C/I:P/A:C/E:F/CR:H").expect("valid");
        let shuffled = parse_vector("CR:H/A:C/E:F/I:P/Au:M/C:C/AC:L/AV:A").expect("valid");
        assert_eq!(ordered, shuffled);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(reason(""), MalformedReason::Empty);
        assert_eq!(reason("/"), MalformedReason::Empty);
        assert_eq!(reason("///"), MalformedReason::Empty);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert!(parse_vector("AV:A/AC:L//Au:M/C:C/I:P/A:C/").is_ok());
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            reason("AV:A/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/ARH"),
            MalformedReason::InvalidField {
                field: "ARH".to_string()
            }
        );
    }

    #[test]
    fn test_too_many_colons() {
        assert_eq!(
            reason("AV:A:N/AC:L/Au:M/C:C/I:P/A:C"),
            MalformedReason::InvalidField {
                field: "AV:A:N".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_metric() {
        assert_eq!(
            reason("AX:A/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/AR:H"),
            MalformedReason::UnknownMetric {
                metric: "AX".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_value() {
        assert_eq!(
            reason("AV:W/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/AR:H"),
            MalformedReason::UnknownValue {
                metric: "AV",
                value: "W".to_string()
            }
        );
        // ND is not a valid value for mandatory metrics
        assert_eq!(
            reason("AV:ND/AC:L/Au:M/C:C/I:P/A:C"),
            MalformedReason::UnknownValue {
                metric: "AV",
                value: "ND".to_string()
            }
        );
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(
            reason("AV:A/AV:A/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/AR:H"),
            MalformedReason::DuplicateMetric { metric: "AV" }
        );
        assert_eq!(
            reason("AV:A/AV:L/AC:L/Au:M/C:C/I:P/A:C/TD:M/IR:H/AR:H"),
            MalformedReason::DuplicateMetric { metric: "AV" }
        );
        assert_eq!(
            reason("AV:A/AC:L/Au:M/C:C/I:P/A:C/TD:ND/TD:ND"),
            MalformedReason::DuplicateMetric { metric: "TD" }
        );
    }

    #[test]
    fn test_missing_mandatory() {
        match parse_vector("AV:L/AC:L/Au:M/C:C/I:P/TD:M/IR:H/AR:H") {
            Err(Cvss2Error::Mandatory { missing, .. }) => assert_eq!(missing, ["A"]),
            other => panic!("expected mandatory error, got {other:?}"),
        }

        match parse_vector("E:F/RL:OF") {
            Err(Cvss2Error::Mandatory { missing, .. }) => {
                assert_eq!(missing, ["AV", "AC", "Au", "C", "I", "A"]);
            }
            other => panic!("expected mandatory error, got {other:?}"),
        }
    }

    #[test]
    fn test_every_metric_holds_a_table_value() {
        for vector in ["AV:L/AC:H/Au:M/C:N/I:N/A:N", "E:F/A:C/I:P/C:N/Au:S/AC:M/AV:A/AR:L"] {
            let set = parse_vector(vector).expect("valid vector");
            for (metric, value) in set.iter() {
                assert_eq!(metric.definition().value(value.token), Some(value), "{metric}");
            }
        }
    }

    #[test]
    fn test_missing_mandatory_with_optional_fields() {
        match parse_vector("AV:L/AC:L/C:C/I:P/A:C/E:F/CDP:H/TD:L/CR:H/IR:H/AR:H/RL:W/RC:C") {
            Err(Cvss2Error::Mandatory { missing, .. }) => assert_eq!(missing, ["Au"]),
            other => panic!("expected mandatory error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_wins_over_mandatory() {
        let err = parse_vector("AV:L/AC:L/Au:M/C:C/I:P/XX:Y").expect_err("invalid");
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(
            reason("av:A/AC:L/Au:M/C:C/I:P/A:C"),
            MalformedReason::UnknownMetric {
                metric: "av".to_string()
            }
        );
        assert!(matches!(
            reason("AV:a/AC:L/Au:M/C:C/I:P/A:C"),
            MalformedReason::UnknownValue { .. }
        ));
    }

    #[test]
    fn test_error_quotes_input() {
        let err = parse_vector("AV:A/AC:L/Au:M/C:C/I:P/A:X").expect_err("invalid");
        assert_eq!(err.vector(), "AV:A/AC:L/Au:M/C:C/I:P/A:X");
    }
}
