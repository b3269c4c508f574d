//! Canonical vector serialization.

use super::parser::{FIELD_SEPARATOR, VALUE_SEPARATOR};
use super::MetricSet;

/// Render the canonical form of a metric set.
///
/// Only metrics whose value differs from the default are emitted, in the
/// metric table's canonical order, so reordered vectors and vectors that
/// spell out `ND` values share one clean form.
#[must_use]
pub fn clean_vector(metrics: &MetricSet) -> String {
    let mut clean = String::with_capacity(64);
    for (metric, value) in metrics.defined() {
        if !clean.is_empty() {
            clean.push(FIELD_SEPARATOR);
        }
        clean.push_str(metric.abbreviation());
        clean.push(VALUE_SEPARATOR);
        clean.push_str(value.token);
    }
    clean
}
