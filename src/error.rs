//! Muninn error types

/// Muninn error types
#[derive(Debug, thiserror::Error)]
pub enum MuninnError {
    // Registry errors
    /// A metric with this name is already registered.
    #[error("metric '{name}' is already registered; use a different name or unregister the existing one")]
    DuplicateMetric { name: String },

    /// No metric is registered under the requested name.
    #[error("metric '{name}' not found in registry; available metrics: [{}]", .available.join(", "))]
    MetricNotFound {
        name: String,
        available: Vec<String>,
    },

    // Construction errors
    /// Two specs given to one aggregator resolve to the same metric name.
    #[error("metric '{name}' requested more than once")]
    DuplicateSpec { name: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MuninnError {
    /// Whether this error came from resolving a metric name.
    ///
    /// Lookup errors abort a single aggregation request; everything else
    /// is an initialization or input problem.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, MuninnError::MetricNotFound { .. })
    }
}

/// Result type alias for Muninn operations
pub type Result<T> = std::result::Result<T, MuninnError>;
