use muninn::{Call, MetricAggregator, MetricRegistry, MetricResults, Trace, TraceRecord};

const TRACE_JSON: &str = r#"{
    "llm_calls": [
        {
            "prompt": "What is 2+2?",
            "response": "4",
            "start": 1700000000.0,
            "end": 1700000001.5,
            "input_tokens": 10,
            "output_tokens": 20,
            "cost": 0.00003
        }
    ]
}"#;

#[test]
fn call_builder() {
    let call = Call::new("prompt", "response")
        .with_timing(1.0, 3.5)
        .with_tokens(4, 6)
        .with_cost(0.25);
    assert_eq!(call.prompt, "prompt");
    assert_eq!(call.response, "response");
    assert_eq!(call.duration(), 2.5);
    assert_eq!(call.total_tokens(), 10);
    assert_eq!(call.cost, 0.25);
}

#[test]
fn call_duration_is_not_clamped() {
    let call = Call::new("p", "r").with_timing(5.0, 4.0);
    assert_eq!(call.duration(), -1.0);
}

#[test]
fn trace_preserves_insertion_order() {
    let mut trace = Trace::new();
    assert!(trace.is_empty());
    trace.push(Call::new("first", "1"));
    trace.push(Call::new("second", "2"));
    trace.push(Call::new("third", "3"));

    assert_eq!(trace.len(), 3);
    let prompts: Vec<_> = trace.iter().map(|c| c.prompt.as_str()).collect();
    assert_eq!(prompts, vec!["first", "second", "third"]);
    assert_eq!(trace.calls()[0].prompt, "first");
}

#[test]
fn deserialize_llm_calls_shape() {
    let trace: Trace = serde_json::from_str(TRACE_JSON).unwrap();
    assert_eq!(trace.len(), 1);
    let call = &trace.calls()[0];
    assert_eq!(call.input_tokens, 10);
    assert_eq!(call.output_tokens, 20);
    assert_eq!(call.duration(), 1.5);
}

#[test]
fn deserialize_calls_alias_and_empty() {
    let trace: Trace = serde_json::from_str(r#"{"calls": []}"#).unwrap();
    assert!(trace.is_empty());

    let trace: Trace = serde_json::from_str("{}").unwrap();
    assert!(trace.is_empty());
}

#[test]
fn serialize_uses_llm_calls_key() {
    let trace = Trace::from_calls(vec![Call::new("p", "r")]);
    let value = serde_json::to_value(&trace).unwrap();
    assert!(value.get("llm_calls").is_some());
    assert_eq!(value["llm_calls"][0]["prompt"], "p");
}

#[test]
fn deserialize_rejects_negative_tokens() {
    let json = r#"{"llm_calls": [{"prompt": "p", "response": "r", "start": 0.0,
        "end": 1.0, "input_tokens": -1, "output_tokens": 0, "cost": 0.0}]}"#;
    assert!(serde_json::from_str::<Trace>(json).is_err());
}

#[test]
fn results_serialize_as_plain_object() {
    let registry = MetricRegistry::with_builtins().unwrap();
    let aggregator = MetricAggregator::new(&registry, ["tokens", "latency"]).unwrap();
    let trace: Trace = serde_json::from_str(TRACE_JSON).unwrap();

    let results = aggregator.compute_all(&trace);
    let json = serde_json::to_string(&results).unwrap();
    assert_eq!(json, r#"{"latency":1.5,"tokens":30.0}"#);

    let back: MetricResults = serde_json::from_str(&json).unwrap();
    assert_eq!(back, results);
}

#[test]
fn trace_record_carries_trace_and_metrics() {
    let registry = MetricRegistry::with_builtins().unwrap();
    let aggregator = MetricAggregator::new(&registry, ["cost", "tokens"]).unwrap();
    let trace: Trace = serde_json::from_str(TRACE_JSON).unwrap();
    let results = aggregator.compute_all(&trace);

    let record = TraceRecord::new("main_trace", trace.clone(), results).with_model("gemma3:1b");
    assert_eq!(record.version, muninn::PKG_VERSION);

    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(value["name"], "main_trace");
    assert_eq!(value["model"], "gemma3:1b");
    assert_eq!(value["metrics"]["tokens"], 30.0);
    assert_eq!(value["trace"]["llm_calls"][0]["prompt"], "What is 2+2?");

    let back: TraceRecord = serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back.trace, trace);
}

#[test]
fn trace_record_omits_missing_model() {
    let record = TraceRecord::new("t", Trace::new(), MetricResults::new());
    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert!(value.get("model").is_none());
}
