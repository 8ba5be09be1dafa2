use muninn::{MuninnError, Result};

#[test]
fn test_duplicate_display() {
    let err = MuninnError::DuplicateMetric {
        name: "cost".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("'cost'"));
    assert!(msg.contains("already registered"));
}

#[test]
fn test_not_found_lists_available() {
    let err = MuninnError::MetricNotFound {
        name: "throughput".to_string(),
        available: vec!["cost".to_string(), "latency".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "metric 'throughput' not found in registry; available metrics: [cost, latency]"
    );
}

#[test]
fn test_not_found_with_empty_registry() {
    let err = MuninnError::MetricNotFound {
        name: "cost".to_string(),
        available: vec![],
    };
    assert!(err.to_string().ends_with("available metrics: []"));
}

#[test]
fn test_duplicate_spec_display() {
    let err = MuninnError::DuplicateSpec {
        name: "tokens".to_string(),
    };
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_json_conversion() {
    let json_err = serde_json::from_str::<muninn::Trace>("not json").unwrap_err();
    let err: MuninnError = json_err.into();
    assert!(matches!(err, MuninnError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(MuninnError::InvalidInput("bad".into()))
    }
    assert!(returns_error().is_err());
}

// ============================================================================
// Lookup error classification
// ============================================================================

#[test]
fn lookup_errors() {
    assert!(
        MuninnError::MetricNotFound {
            name: "x".into(),
            available: vec![]
        }
        .is_lookup_error()
    );
}

#[test]
fn non_lookup_errors() {
    assert!(!MuninnError::DuplicateMetric { name: "x".into() }.is_lookup_error());
    assert!(!MuninnError::DuplicateSpec { name: "x".into() }.is_lookup_error());
    assert!(!MuninnError::InvalidInput("x".into()).is_lookup_error());
    assert!(!MuninnError::Configuration("x".into()).is_lookup_error());
}
