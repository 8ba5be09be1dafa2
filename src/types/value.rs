//! Metric values and aggregation results

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The value a metric computes over a trace.
///
/// Most metrics produce a single number; some produce a small record of
/// named sub-values. Serializes untagged: a number or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Scalar(f64),
    Breakdown(BTreeMap<String, f64>),
}

impl MetricValue {
    /// The scalar value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MetricValue::Scalar(v) => Some(*v),
            MetricValue::Breakdown(_) => None,
        }
    }

    /// The sub-values, if this is a breakdown.
    pub fn as_breakdown(&self) -> Option<&BTreeMap<String, f64>> {
        match self {
            MetricValue::Scalar(_) => None,
            MetricValue::Breakdown(parts) => Some(parts),
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Scalar(0.0)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Scalar(v)
    }
}

/// Counts above 2^53 round to the nearest representable `f64`.
impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Scalar(v as f64)
    }
}

impl From<BTreeMap<String, f64>> for MetricValue {
    fn from(parts: BTreeMap<String, f64>) -> Self {
        MetricValue::Breakdown(parts)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Scalar(v) => write!(f, "{v}"),
            MetricValue::Breakdown(parts) => {
                write!(f, "{{")?;
                for (i, (name, v)) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Metric name → computed value, produced fresh by each
/// [`compute_all`](crate::MetricAggregator::compute_all) call.
///
/// Iterates and serializes in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricResults {
    values: BTreeMap<String, MetricValue>,
}

impl MetricResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: MetricValue) -> Option<MetricValue> {
        self.values.insert(name.into(), value)
    }

    /// Get a value by metric name.
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.values.get(name)
    }

    /// Get a scalar value by metric name.
    ///
    /// Returns `None` if the metric is absent or produced a breakdown.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(MetricValue::as_scalar)
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Metric names in name order.
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume into the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, MetricValue> {
        self.values
    }
}

impl IntoIterator for MetricResults {
    type Item = (String, MetricValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_serializes_as_number() {
        let json = serde_json::to_string(&MetricValue::Scalar(1.5)).unwrap();
        assert_eq!(json, "1.5");
    }

    #[test]
    fn large_counts_round_to_nearest_f64() {
        let exact = 1u64 << 53;
        assert_eq!(MetricValue::from(exact).as_scalar(), Some(exact as f64));
        assert_eq!(MetricValue::from(exact + 1).as_scalar(), Some(exact as f64));
    }

    #[test]
    fn breakdown_serializes_as_object() {
        let mut parts = BTreeMap::new();
        parts.insert("input".to_string(), 10.0);
        parts.insert("output".to_string(), 20.0);
        let json = serde_json::to_string(&MetricValue::Breakdown(parts)).unwrap();
        assert_eq!(json, r#"{"input":10.0,"output":20.0}"#);
    }

    #[test]
    fn breakdown_display() {
        let mut parts = BTreeMap::new();
        parts.insert("a".to_string(), 1.0);
        parts.insert("b".to_string(), 2.5);
        assert_eq!(MetricValue::Breakdown(parts).to_string(), "{a: 1, b: 2.5}");
    }

    #[test]
    fn results_are_name_ordered() {
        let mut results = MetricResults::new();
        results.insert("tokens", 40u64.into());
        results.insert("cost", MetricValue::Scalar(0.5));
        assert_eq!(results.names(), vec!["cost", "tokens"]);
        assert_eq!(results.scalar("tokens"), Some(40.0));
        assert_eq!(results.scalar("missing"), None);
    }
}
