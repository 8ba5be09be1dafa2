use crate::traits::Metric;
use crate::types::{MetricValue, Trace};

/// Total latency: the sum of `end - start` over all calls.
///
/// Durations are not clamped, so a call recorded with `end < start`
/// reduces the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatencyMetric;

impl LatencyMetric {
    pub const NAME: &'static str = "latency";
}

impl Metric for LatencyMetric {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compute(&self, trace: &Trace) -> MetricValue {
        MetricValue::Scalar(
            trace
                .iter()
                .fold(0.0, |total, call| total + call.duration()),
        )
    }
}
