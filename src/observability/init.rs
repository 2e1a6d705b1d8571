//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used across the crate to the file-based OTLP
//! exporter: spans are filtered by the configured level, handed to the
//! OpenTelemetry layer, serialized, and appended to the trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in the trace resource.
const SERVICE_NAME: &str = "ticklist";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Traces land in `~/.local/share/ticklist/ticklist-otlp.json`, rotated by
/// size. The level comes from `config.trace_level`, defaulting to `info`.
///
/// Observability is optional by design: when the data directory cannot be
/// created the function returns without installing a subscriber, and repeated
/// calls after a successful install are ignored.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("ticklist-otlp.json");
    let provider = tracer::build_provider(trace_file, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
