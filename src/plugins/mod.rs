//! Built-in metric plugins.
//!
//! Each plugin is a stateless unit struct. [`register_builtins`] is the
//! static initializer list that makes them discoverable by name; call it
//! once on a fresh registry (or use [`MetricRegistry::with_builtins`])
//! before any lookup.

mod cost;
mod latency;
mod tokens;

pub use cost::CostMetric;
pub use latency::LatencyMetric;
pub use tokens::TokenMetric;

use crate::Result;
use crate::registry::MetricRegistry;

/// Names of the built-in metrics, in registration order.
pub const BUILTIN_METRICS: &[&str] = &[CostMetric::NAME, LatencyMetric::NAME, TokenMetric::NAME];

/// Register every built-in metric into `registry`.
///
/// Fails with `DuplicateMetric` if any built-in name is already taken;
/// metrics registered before the failure stay registered.
pub fn register_builtins(registry: &MetricRegistry) -> Result<()> {
    registry.register::<CostMetric>()?;
    registry.register::<LatencyMetric>()?;
    registry.register::<TokenMetric>()?;
    Ok(())
}
