use crate::traits::Metric;
use crate::types::{MetricValue, Trace};

/// Total cost: the sum of `cost` over all calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostMetric;

impl CostMetric {
    pub const NAME: &'static str = "cost";
}

impl Metric for CostMetric {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compute(&self, trace: &Trace) -> MetricValue {
        // Fold from +0.0; `f64::sum` starts at -0.0.
        MetricValue::Scalar(trace.iter().fold(0.0, |total, call| total + call.cost))
    }
}
