//! Telemetry metric name constants.
//!
//! Centralised names for the counters and histograms muninn emits about
//! its own work. These are process telemetry, not trace metrics: consumers
//! install their own `metrics` recorder (e.g. prometheus, statsd); without
//! a recorder installed, all calls are no-ops.
//!
//! # Naming conventions
//!
//! All names are prefixed with `muninn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `metric` — trace metric name (e.g. "cost", "latency")
//! - `status` — outcome, see each constant

/// Total `compute_all` invocations.
pub const AGGREGATIONS_TOTAL: &str = "muninn_aggregations_total";

/// Time spent computing a single trace metric, in seconds.
///
/// Labels: `metric`.
pub const METRIC_COMPUTE_SECONDS: &str = "muninn_metric_compute_seconds";

/// Total registry lookups by name.
///
/// Labels: `status` ("ok" | "missing").
pub const REGISTRY_LOOKUPS_TOTAL: &str = "muninn_registry_lookups_total";

/// Total registration attempts.
///
/// Labels: `status` ("ok" | "duplicate").
pub const REGISTRATIONS_TOTAL: &str = "muninn_registrations_total";
