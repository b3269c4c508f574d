//! Property-based tests for vector parsing and scoring.

use cvss2_tools::metrics::{Metric, NOT_DEFINED};
use cvss2_tools::{Cvss2, ErrorKind};
use proptest::prelude::*;

/// `METRIC:VALUE` for a random allowed value of `metric`
fn field(metric: Metric) -> impl Strategy<Value = String> {
    let definition = metric.definition();
    let abbreviation = definition.abbreviation;
    prop::sample::select(definition.tokens().collect::<Vec<_>>())
        .prop_map(move |token| format!("{abbreviation}:{token}"))
}

/// Fields of a valid vector: every mandatory metric, a random subset of the
/// optional ones, in canonical order.
fn valid_fields() -> impl Strategy<Value = Vec<String>> {
    let fields: Vec<BoxedStrategy<Option<String>>> = Metric::ALL
        .into_iter()
        .map(|metric| {
            if metric.is_mandatory() {
                field(metric).prop_map(Some).boxed()
            } else {
                prop::option::of(field(metric)).boxed()
            }
        })
        .collect();
    fields.prop_map(|fields| fields.into_iter().flatten().collect())
}

fn valid_vector() -> impl Strategy<Value = String> {
    valid_fields().prop_map(|fields| fields.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn clean_vector_is_idempotent(vector in valid_vector()) {
        let clean = Cvss2::new(vector.as_str()).unwrap().clean_vector();
        let reparsed = Cvss2::new(clean.as_str()).unwrap();
        prop_assert_eq!(reparsed.clean_vector(), clean);
    }

    #[test]
    fn scores_survive_clean_vector(vector in valid_vector()) {
        let cvss = Cvss2::new(vector.as_str()).unwrap();
        let reparsed = Cvss2::new(cvss.clean_vector()).unwrap();
        prop_assert_eq!(reparsed.score_result(), cvss.score_result());
    }

    #[test]
    fn field_order_does_not_matter(fields in valid_fields().prop_shuffle()) {
        let shuffled = Cvss2::new(fields.join("/")).unwrap();
        let mut sorted = fields.clone();
        sorted.sort_by_key(|f| {
            let abbreviation = f.split(':').next().unwrap_or_default();
            Metric::from_abbreviation(abbreviation).map(Metric::index)
        });
        let ordered = Cvss2::new(sorted.join("/")).unwrap();
        prop_assert_eq!(shuffled.score_result(), ordered.score_result());
        prop_assert_eq!(shuffled.clean_vector(), ordered.clean_vector());
    }

    #[test]
    fn explicit_not_defined_is_neutral(
        vector in valid_vector(),
        extra in prop::sample::subsequence(Metric::ALL[6..].to_vec(), 0..=8),
    ) {
        let cvss = Cvss2::new(vector.as_str()).unwrap();
        let mut padded = vector.clone();
        for metric in extra {
            if !vector.split('/').any(|f| f.split(':').next() == Some(metric.abbreviation())) {
                padded.push_str(&format!("/{}:{NOT_DEFINED}", metric.abbreviation()));
            }
        }
        let padded = Cvss2::new(padded).unwrap();
        prop_assert_eq!(padded.score_result(), cvss.score_result());
        prop_assert_eq!(padded.clean_vector(), cvss.clean_vector());
    }

    #[test]
    fn duplicate_metric_is_malformed(
        fields in valid_fields(),
        index in any::<prop::sample::Index>(),
    ) {
        let duplicate = index.get(&fields).clone();
        let vector = format!("{}/{duplicate}", fields.join("/"));
        let err = Cvss2::new(vector).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn missing_mandatory_is_reported(
        fields in valid_fields(),
        index in 0usize..6,
    ) {
        let removed = Metric::ALL[index].abbreviation();
        let remaining: Vec<&String> = fields
            .iter()
            .filter(|f| f.split(':').next() != Some(removed))
            .collect();
        let vector = remaining.iter().map(|f| f.as_str()).collect::<Vec<_>>().join("/");
        let err = Cvss2::new(vector).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Mandatory);
    }

    #[test]
    fn scores_are_bounded(vector in valid_vector()) {
        let (base, temporal, environmental) = Cvss2::new(vector).unwrap().scores();
        prop_assert!((0.0..=10.0).contains(&base));
        if let Some(temporal) = temporal {
            prop_assert!((0.0..=base).contains(&temporal));
        }
        if let Some(environmental) = environmental {
            // Low requirements can push the adjusted base slightly below zero
            prop_assert!((-1.0..=10.0).contains(&environmental));
        }
    }

    #[test]
    fn rh_vector_round_trips(vector in valid_vector()) {
        let cvss = Cvss2::new(vector).unwrap();
        let parsed = Cvss2::from_rh_vector(&cvss.rh_vector()).unwrap();
        prop_assert_eq!(parsed, cvss);
    }

    #[test]
    fn parse_doesnt_panic(s in "\\PC{0,200}") {
        let _ = Cvss2::new(s.as_str());
        let _ = Cvss2::from_rh_vector(&s);
    }

    #[test]
    fn extreme_rh_scores_are_rejected_cleanly(
        score in prop_oneof![
            "-?[0-9]{20,40}(\\.[0-9]{1,30})?",
            "-?[0-9]{1,3}e-?[0-9]{1,3}",
            Just("-79228162514264337593543950335".to_string()),
            Just("79228162514264337593543950335".to_string()),
        ],
        vector in valid_vector(),
    ) {
        let rh = format!("{score}/{vector}");
        if let Err(err) = Cvss2::from_rh_vector(&rh) {
            prop_assert_eq!(err.kind(), ErrorKind::RhScoreMismatch, "{}", rh);
        }
    }

    #[test]
    fn any_rh_prefix_doesnt_panic(score in any::<f64>(), vector in valid_vector()) {
        let _ = Cvss2::from_rh_vector(&format!("{score}/{vector}"));
    }

    #[test]
    fn vector_like_input_doesnt_panic(
        s in prop::string::string_regex("([A-Za-z]{1,3}:[A-Z]{0,3}/?){0,16}").unwrap()
    ) {
        let _ = Cvss2::new(s.as_str());
    }
}
