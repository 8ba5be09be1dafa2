//! Public types for the Muninn API.

mod record;
mod trace;
mod value;

pub use record::TraceRecord;
pub use trace::{Call, Trace};
pub use value::{MetricResults, MetricValue};
