//! OTLP JSON span serialization.
//!
//! Converts finished OpenTelemetry spans into OTLP (OpenTelemetry Protocol)
//! JSON documents, one document per exported batch. The output is compatible
//! with standard OTLP trace tooling.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;

/// Instrumentation scope name reported in exported documents.
const SCOPE_NAME: &str = "ticklist";

/// Formats a batch of spans as one complete OTLP JSON document.
///
/// The document carries the resource attributes (service name and friends),
/// a single instrumentation scope, and every span in the batch.
pub fn batch_to_json(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| {
            serde_json::json!({
                "key": key.to_string(),
                "value": value_to_json(value),
            })
        })
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(span_to_json).collect();

    serde_json::json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans,
            }]
        }]
    })
}

/// Formats one span: hex ids, nanosecond timestamps, attributes, events,
/// links, and status.
fn span_to_json(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = status_to_parts(&span.status);

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes_to_json(&span.attributes),
        "events": span.events.iter().map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes_to_json(&event.attributes),
            })
        }).collect::<Vec<_>>(),
        "links": span.links.iter().map(|link| {
            serde_json::json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": attributes_to_json(&link.attributes),
            })
        }).collect::<Vec<_>>(),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

/// Renders a timestamp as decimal nanoseconds since the Unix epoch.
///
/// OTLP transmits 64-bit nanosecond values as strings; pre-epoch timestamps
/// clamp to zero.
fn unix_nanos(time: std::time::SystemTime) -> String {
    time.duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

/// Maps a span kind to its OTLP integer code.
const fn kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

/// Formats a key-value list as an OTLP attribute array.
fn attributes_to_json(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": value_to_json(&kv.value),
            })
        })
        .collect()
}

/// Maps an attribute value to its typed OTLP representation.
///
/// Integers are transmitted as strings per the OTLP JSON encoding; arrays
/// fall back to their debug rendering.
fn value_to_json(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

/// Maps a span status to its OTLP code and message.
fn status_to_parts(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}
