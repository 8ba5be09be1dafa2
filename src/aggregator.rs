//! Metric aggregation over a trace.
//!
//! A [`MetricAggregator`] is built once from a list of [`MetricSpec`]s
//! (metric names resolved through a [`MetricRegistry`], or ready-made
//! instances) and then computes all of them over any number of traces.
//!
//! # Example
//!
//! ```rust
//! use muninn::{Call, MetricAggregator, MetricRegistry, Trace};
//!
//! # fn main() -> muninn::Result<()> {
//! let registry = MetricRegistry::with_builtins()?;
//! let aggregator = MetricAggregator::new(&registry, ["cost", "tokens"])?;
//!
//! let trace = Trace::from_calls(vec![
//!     Call::new("What is 2+2?", "4")
//!         .with_timing(0.0, 1.5)
//!         .with_tokens(10, 20)
//!         .with_cost(0.00003),
//! ]);
//!
//! let results = aggregator.compute_all(&trace);
//! assert_eq!(results.scalar("tokens"), Some(30.0));
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use tracing::instrument;

use crate::registry::MetricRegistry;
use crate::telemetry;
use crate::traits::Metric;
use crate::types::{MetricResults, Trace};
use crate::{MuninnError, Result};

/// One requested metric: a registry name or an instance.
pub enum MetricSpec {
    /// Resolved through the registry at aggregator construction.
    Name(String),
    /// Used as-is.
    Instance(Box<dyn Metric>),
}

impl MetricSpec {
    /// Wrap a metric instance.
    pub fn instance(metric: impl Metric + 'static) -> Self {
        MetricSpec::Instance(Box::new(metric))
    }
}

impl fmt::Debug for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricSpec::Name(name) => f.debug_tuple("Name").field(name).finish(),
            MetricSpec::Instance(metric) => f.debug_tuple("Instance").field(&metric.name()).finish(),
        }
    }
}

impl From<&str> for MetricSpec {
    fn from(name: &str) -> Self {
        MetricSpec::Name(name.to_string())
    }
}

impl From<String> for MetricSpec {
    fn from(name: String) -> Self {
        MetricSpec::Name(name)
    }
}

impl From<&String> for MetricSpec {
    fn from(name: &String) -> Self {
        MetricSpec::Name(name.clone())
    }
}

impl From<Box<dyn Metric>> for MetricSpec {
    fn from(metric: Box<dyn Metric>) -> Self {
        MetricSpec::Instance(metric)
    }
}

/// Computes a fixed set of metrics over traces.
///
/// The metric list is resolved at construction and never changes. Metric
/// names within one aggregator are unique, so every metric owns exactly
/// one key in the results.
pub struct MetricAggregator {
    metrics: Vec<Box<dyn Metric>>,
}

impl fmt::Debug for MetricAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricAggregator")
            .field("metrics", &self.metric_names())
            .finish()
    }
}

impl MetricAggregator {
    /// Build an aggregator from metric names and/or instances.
    ///
    /// Names resolve through `registry`. Fails fast on:
    /// - `InvalidInput` — an empty name, or an instance with an empty name
    /// - `MetricNotFound` — a name the registry does not know
    /// - `DuplicateSpec` — two specs resolving to the same metric name
    pub fn new<I, S>(registry: &MetricRegistry, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<MetricSpec>,
    {
        let metrics = specs
            .into_iter()
            .map(|spec| {
                let spec: MetricSpec = spec.into();
                match spec {
                    MetricSpec::Name(name) if name.trim().is_empty() => Err(
                        MuninnError::InvalidInput("metric name must not be empty".to_string()),
                    ),
                    MetricSpec::Name(name) => registry.create_instance(&name),
                    MetricSpec::Instance(metric) => Ok(metric),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_metrics(metrics)
    }

    /// Build an aggregator from ready-made instances, without a registry.
    pub fn from_metrics(metrics: Vec<Box<dyn Metric>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for metric in &metrics {
            let name = metric.name();
            if name.trim().is_empty() {
                return Err(MuninnError::InvalidInput(
                    "metric instance has an empty name".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(MuninnError::DuplicateSpec {
                    name: name.to_string(),
                });
            }
        }
        Ok(Self { metrics })
    }

    /// Names of the resolved metrics, in construction order.
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Compute every metric over `trace`, keyed by metric name.
    ///
    /// Metrics run in construction order.
    #[instrument(skip(self, trace), fields(trace_len = trace.len(), metric_count = self.metrics.len()))]
    pub fn compute_all(&self, trace: &Trace) -> MetricResults {
        metrics::counter!(telemetry::AGGREGATIONS_TOTAL).increment(1);

        let mut results = MetricResults::new();
        for metric in &self.metrics {
            let start = Instant::now();
            let value = metric.compute(trace);
            metrics::histogram!(telemetry::METRIC_COMPUTE_SECONDS,
                "metric" => metric.name().to_owned(),
            )
            .record(start.elapsed().as_secs_f64());
            results.insert(metric.name(), value);
        }
        results
    }
}
