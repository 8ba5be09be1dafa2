//! Trace data model: the record shapes every metric consumes.

use serde::{Deserialize, Serialize};

/// One recorded language-model invocation.
///
/// Produced by whatever issued the call; immutable once it is part of a
/// [`Trace`]. Timestamps are seconds since the epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub prompt: String,
    pub response: String,
    pub start: f64,
    pub end: f64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Cost of the call in a currency-agnostic unit.
    pub cost: f64,
}

impl Call {
    /// Create a call record with zero timing, tokens and cost.
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            ..Default::default()
        }
    }

    /// Set the start and end timestamps.
    pub fn with_timing(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the input and output token counts.
    pub fn with_tokens(mut self, input: u64, output: u64) -> Self {
        self.input_tokens = input;
        self.output_tokens = output;
        self
    }

    /// Set the cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Wall-clock duration, `end - start`.
    ///
    /// Not clamped: a record with `end < start` yields a negative duration.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Input plus output tokens, saturating at `u64::MAX`.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// An ordered sequence of [`Call`]s for one logical unit of work.
///
/// Insertion order is chronological call order and is preserved.
/// Serializes as `{"llm_calls": [...]}`; `"calls"` is accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "llm_calls", alias = "calls", default)]
    calls: Vec<Call>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trace from calls in chronological order.
    pub fn from_calls(calls: Vec<Call>) -> Self {
        Self { calls }
    }

    /// Parse a trace from its JSON record shape.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a trace in its JSON record shape from `reader`.
    pub fn from_reader(reader: impl std::io::Read) -> crate::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append a call.
    pub fn push(&mut self, call: Call) {
        self.calls.push(call);
    }

    /// The calls, in order.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Iterate over the calls in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Call> {
        self.calls.iter()
    }

    /// Number of calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the trace has no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl FromIterator<Call> for Trace {
    fn from_iter<I: IntoIterator<Item = Call>>(iter: I) -> Self {
        Self {
            calls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Call;
    type IntoIter = std::slice::Iter<'a, Call>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}
