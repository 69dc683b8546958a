//! Subscriber setup wiring `tracing` into the file-exporting tracer provider.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
const SERVICE_NAME: &str = "Reelscout";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level` and defaults to `"info"`. Spans
/// are written to [`paths::trace_file`]. If the data directory cannot be
/// created, tracing stays disabled; the plugin works the same without it.
///
/// Only the first call installs a subscriber.
///
/// ```rust
/// use reelscout::observability::init_tracing;
/// use reelscout::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(paths::get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(paths::trace_file(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
