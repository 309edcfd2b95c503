//! Subscriber initialization: env filter, console output, optional OTLP export
//! (OpenTelemetry 0.31 API) and the optional log sink.

use once_cell::sync::OnceCell;
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer;

// Kept for flushing on shutdown.
static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Build the filter: explicit level first, then `RUST_LOG`, then "info".
fn env_filter(config: &ObservabilityConfig) -> Result<tracing_subscriber::EnvFilter, ObservabilityError> {
    match config.log_level.as_deref() {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log level {level:?}: {e}"))),
        None => Ok(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))),
    }
}

/// Install the global tracing subscriber.
///
/// Fails if the log level does not parse or a global subscriber is already set.
/// A failing OTLP exporter is not an error: it falls back to console-only.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = env_filter(&config)?;

    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    for (key, value) in &config.resource_attributes {
        attributes.push(KeyValue::new(key.clone(), value.clone()));
    }
    let resource = Resource::builder().with_attributes(attributes).build();

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut otlp_status = None;
    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            match build_otlp_tracer_provider(&config.service_name, endpoint, resource) {
                Ok((tracer, provider)) => {
                    // Global provider must be set before the layer is built.
                    global::set_tracer_provider(provider.clone());
                    let _ = TRACER_PROVIDER.set(provider);
                    otlp_status = Some(Ok(endpoint.clone()));
                    Some(OpenTelemetryLayer::new(tracer))
                }
                Err(e) => {
                    otlp_status = Some(Err((endpoint.clone(), e)));
                    None
                }
            }
        }
        None => None,
    };

    let log_sink_layer = sink_layer::sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .with(log_sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    // Logged after init so the lines reach the subscriber.
    match otlp_status {
        Some(Ok(endpoint)) => tracing::info!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            "OTLP tracing enabled"
        ),
        Some(Err((endpoint, e))) => tracing::warn!(
            service.name = %config.service_name,
            endpoint = %endpoint,
            error = %e,
            "Failed to initialize OTLP export, falling back to console-only tracing"
        ),
        None => tracing::debug!(
            service.name = %config.service_name,
            "Tracing initialized (console only, no OTLP endpoint configured)"
        ),
    }

    Ok(())
}

/// Build an OTLP span exporter (tonic) and a batch tracer provider.
fn build_otlp_tracer_provider(
    service_name: &str,
    endpoint: &str,
    resource: Resource,
) -> Result<(opentelemetry_sdk::trace::SdkTracer, SdkTracerProvider), ObservabilityError> {
    let span_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(service_name.to_string());

    Ok((tracer, provider))
}

/// Flush and shut down the tracer provider, if OTLP export was enabled.
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        let _ = provider.shutdown();
        tracing::debug!("OpenTelemetry tracer provider shut down");
    }
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
