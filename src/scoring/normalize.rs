//! @ai:module:intent Min-max normalization of lower-is-better metrics across applicable tools
//! @ai:module:layer domain
//! @ai:module:public_api MetricBounds, normalize_metric, normalize_tools
//! @ai:module:stateless true

use crate::scoring::types::MetricBreakdown;
use crate::store::{BenchmarkEntry, Metric};

/// @ai:intent Observed range of one metric among applicable tools
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
}

impl MetricBounds {
    /// @ai:intent Range of the present values; None when no value is present
    /// @ai:effects pure
    pub fn observe<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| match bounds {
            None => Some(Self { min: v, max: v }),
            Some(b) => Some(Self {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
    }
}

/// @ai:intent Map a raw value onto [0, 1] where 1 is the best (lowest) observed
/// @ai:post result in [0, 1]
/// @ai:effects pure
/// @ai:example (Some(0.175), Some(0.175..2.104)) -> 1.0
pub fn normalize_metric(value: Option<f64>, bounds: Option<MetricBounds>) -> f64 {
    match (value, bounds) {
        (None, _) | (_, None) => 0.0,
        (Some(_), Some(b)) if b.min == b.max => 0.5,
        (Some(v), Some(b)) => (b.max - v) / (b.max - b.min),
    }
}

/// @ai:intent Normalize every metric of every applicable entry against each other
/// @ai:pre entries only contains applicable tools
/// @ai:post result.len() == entries.len()
/// @ai:effects pure
pub fn normalize_tools(entries: &[&BenchmarkEntry]) -> Vec<MetricBreakdown> {
    let mut breakdowns = vec![MetricBreakdown::default(); entries.len()];

    for metric in Metric::ALL {
        let bounds = MetricBounds::observe(entries.iter().filter_map(|e| e.get(metric)));

        for (entry, breakdown) in entries.iter().zip(breakdowns.iter_mut()) {
            breakdown.set(metric, normalize_metric(entry.get(metric), bounds));
        }
    }

    breakdowns
}
