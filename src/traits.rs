//! Core Metric trait

use crate::types::{MetricValue, Trace};

/// The capability every trace metric provides.
///
/// A metric is a named, pure function from a [`Trace`] to a [`MetricValue`].
/// Implementations hold no shared state; the registry creates a fresh
/// instance per request through a factory.
///
/// # Example
///
/// ```rust
/// use muninn::{Metric, MetricValue, Trace};
///
/// #[derive(Default)]
/// struct CallCount;
///
/// impl Metric for CallCount {
///     fn name(&self) -> &str {
///         "calls"
///     }
///
///     fn compute(&self, trace: &Trace) -> MetricValue {
///         MetricValue::from(trace.len() as u64)
///     }
/// }
/// ```
pub trait Metric: Send + Sync {
    /// Metric name, used as the registry key and the result key.
    ///
    /// Must be non-empty and stable for the lifetime of the instance.
    fn name(&self) -> &str;

    /// Compute the metric over a trace.
    ///
    /// Must tolerate a trace with zero calls, returning the additive
    /// identity (typically `0`).
    fn compute(&self, trace: &Trace) -> MetricValue;
}
