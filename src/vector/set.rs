//! Decoded metric values of one vector.

use crate::metrics::{Metric, MetricGroup, MetricValue};
use rust_decimal::Decimal;

/// The value selected for every CVSS2 metric.
///
/// A `MetricSet` is always complete: mandatory metrics come from the input
/// and absent optional metrics hold their "Not Defined" value. It is only
/// built by the vector parser and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricSet {
    values: [&'static MetricValue; Metric::COUNT],
}

impl MetricSet {
    pub(crate) const fn new(values: [&'static MetricValue; Metric::COUNT]) -> Self {
        Self { values }
    }

    /// Selected value of a metric
    #[must_use]
    pub const fn get(&self, metric: Metric) -> &'static MetricValue {
        self.values[metric.index()]
    }

    /// Selected token of a metric, e.g. `"POC"`
    #[must_use]
    pub const fn token(&self, metric: Metric) -> &'static str {
        self.get(metric).token
    }

    /// Weight of the selected value
    #[must_use]
    pub const fn weight(&self, metric: Metric) -> Decimal {
        self.get(metric).weight
    }

    /// Whether the metric holds its "Not Defined" value
    #[must_use]
    pub fn is_default(&self, metric: Metric) -> bool {
        metric.definition().is_default(self.token(metric))
    }

    /// Whether any metric of the group carries a defined value.
    ///
    /// Temporal and Environmental scores only exist when this holds for
    /// their group.
    #[must_use]
    pub fn is_group_defined(&self, group: MetricGroup) -> bool {
        Metric::in_group(group).any(|metric| !self.is_default(metric))
    }

    /// All metrics with their values, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &'static MetricValue)> + '_ {
        Metric::ALL
            .into_iter()
            .map(move |metric| (metric, self.get(metric)))
    }

    /// Metrics whose value differs from the default, in canonical order
    pub fn defined(&self) -> impl Iterator<Item = (Metric, &'static MetricValue)> + '_ {
        self.iter().filter(|(metric, _)| !self.is_default(*metric))
    }
}
