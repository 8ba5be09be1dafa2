//! Muninn - pluggable metrics for LLM call traces
//!
//! This crate records language-model invocations as [`Call`]s grouped into a
//! [`Trace`], and computes derived metrics (cost, latency, token usage) over
//! them through a name-keyed plugin registry. Metrics implement the
//! [`Metric`] trait; a [`MetricRegistry`] maps names to factories; a
//! [`MetricAggregator`] resolves a requested set of metrics once and runs
//! them uniformly over any trace.
//!
//! # Example
//!
//! ```rust
//! use muninn::{Call, MetricAggregator, MetricRegistry, Trace, TraceRecord};
//!
//! fn main() -> muninn::Result<()> {
//!     let registry = MetricRegistry::with_builtins()?;
//!     println!("available metrics: {:?}", registry.get_all_names());
//!
//!     let aggregator = MetricAggregator::new(&registry, ["latency", "cost", "tokens"])?;
//!
//!     let trace = Trace::from_calls(vec![
//!         Call::new("What is 2+2?", "4")
//!             .with_timing(0.0, 1.5)
//!             .with_tokens(10, 20)
//!             .with_cost(0.00003),
//!     ]);
//!
//!     let results = aggregator.compute_all(&trace);
//!     for (name, value) in results.iter() {
//!         println!("{name}: {value}");
//!     }
//!
//!     // Hand the trace and its metrics to an exporter.
//!     let record = TraceRecord::new("main_trace", trace, results).with_model("gemma3:1b");
//!     println!("{}", record.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Custom metrics
//!
//! ```rust
//! use muninn::{Metric, MetricRegistry, MetricValue, Trace};
//!
//! #[derive(Default)]
//! struct CallCount;
//!
//! impl Metric for CallCount {
//!     fn name(&self) -> &str {
//!         "calls"
//!     }
//!
//!     fn compute(&self, trace: &Trace) -> MetricValue {
//!         MetricValue::from(trace.len() as u64)
//!     }
//! }
//!
//! let registry = MetricRegistry::with_builtins().unwrap();
//! registry.register::<CallCount>().unwrap();
//! assert!(registry.is_registered("calls"));
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod plugins;
pub mod registry;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use aggregator::{MetricAggregator, MetricSpec};
pub use config::Config;
pub use error::{MuninnError, Result};
pub use plugins::{BUILTIN_METRICS, CostMetric, LatencyMetric, TokenMetric, register_builtins};
pub use registry::{MetricFactory, MetricRegistry};
pub use traits::Metric;
pub use version::{PKG_VERSION, version_string};

// Re-export all types
pub use types::{Call, MetricResults, MetricValue, Trace, TraceRecord};
