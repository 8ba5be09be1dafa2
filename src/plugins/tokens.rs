use crate::traits::Metric;
use crate::types::{MetricValue, Trace};

/// Total tokens: input tokens plus output tokens over all calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMetric;

impl TokenMetric {
    pub const NAME: &'static str = "tokens";
}

impl Metric for TokenMetric {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compute(&self, trace: &Trace) -> MetricValue {
        // Counts are valid up to u64::MAX each; sum wide so totals cannot wrap.
        let total: u128 = trace
            .iter()
            .map(|call| u128::from(call.input_tokens) + u128::from(call.output_tokens))
            .sum();
        MetricValue::Scalar(total as f64)
    }
}
