//! Outbound trace record for export collaborators.

use serde::{Deserialize, Serialize};

use super::{MetricResults, Trace};
use crate::Result;

/// A trace together with its computed metrics.
///
/// This is the shape handed to whatever exports traces (a tracing backend,
/// a log line, a file). Muninn builds and serializes it; transport is the
/// exporter's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Trace name (e.g. "main_trace").
    pub name: String,
    /// Model that served the calls, if known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    pub trace: Trace,
    pub metrics: MetricResults,
    /// Muninn version that computed the metrics.
    pub version: String,
}

impl TraceRecord {
    /// Create a record stamped with the running muninn version.
    pub fn new(name: impl Into<String>, trace: Trace, metrics: MetricResults) -> Self {
        Self {
            name: name.into(),
            model: None,
            trace,
            metrics,
            version: crate::PKG_VERSION.to_string(),
        }
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
