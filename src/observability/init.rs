//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in every span record.
pub const SERVICE_NAME: &str = "zcovid";

/// File name of the span log inside the data directory.
pub const SPAN_FILE: &str = "zcovid-spans.jsonl";

/// Installs the global subscriber: `EnvFilter` from `config.trace_level`
/// feeding an OpenTelemetry layer that exports to `<data dir>/zcovid-spans.jsonl`.
///
/// Does nothing when the data directory cannot be created. Only the first
/// call installs a subscriber; later calls are ignored.
///
/// # Example
///
/// ```no_run
/// use zcovid::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(SPAN_FILE), SERVICE_NAME, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
