//! JSON Lines representation of finished spans.
//!
//! One [`SpanRecord`] is written per span, flattened for `jq`-style reading
//! instead of nesting it in OTLP resource/scope envelopes. Log events recorded
//! inside a span (`tracing::error!` and friends) travel along as `events`.

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A finished span, ready to be serialized as one line.
#[derive(Debug, Serialize)]
pub struct SpanRecord {
    pub service: String,
    pub name: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    /// Start time in milliseconds since the Unix epoch.
    pub start_ms: u64,
    pub duration_us: u64,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An event recorded while the span was open.
#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub name: String,
    /// Milliseconds since the span started.
    pub offset_ms: u64,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl SpanRecord {
    /// Flattens SDK span data for the given service.
    pub fn from_span(span: &SpanData, service: &str) -> Self {
        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
        let (status, error) = match &span.status {
            Status::Unset => ("unset", None),
            Status::Ok => ("ok", None),
            Status::Error { description } => ("error", Some(description.to_string())),
        };

        Self {
            service: service.to_string(),
            name: span.name.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            start_ms: millis(since_epoch(span.start_time)),
            duration_us: micros(elapsed(span.start_time, span.end_time)),
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    offset_ms: millis(elapsed(span.start_time, event.timestamp)),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            status,
            error,
        }
    }
}

fn since_epoch(time: SystemTime) -> Duration {
    time.duration_since(UNIX_EPOCH).unwrap_or_default()
}

fn elapsed(from: SystemTime, to: SystemTime) -> Duration {
    to.duration_since(from).unwrap_or_default()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Key/value attributes as a sorted JSON object.
fn attribute_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

/// Converts an attribute value to its natural JSON type.
///
/// Arrays fall back to their debug representation.
pub fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(format!("{value:?}")),
    }
}
