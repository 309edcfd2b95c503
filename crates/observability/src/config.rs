//! Logging and trace export settings.

use std::sync::Arc;

/// Receives each formatted log line. Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

const DEFAULT_SERVICE_NAME: &str = "tema";

/// What [`crate::init`] installs.
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Reported as `service.name` on exported spans
    pub service_name: String,
    pub service_version: Option<String>,
    /// OTLP gRPC endpoint; no export when unset
    pub otlp_endpoint: Option<String>,
    /// Human-readable lines on stderr
    pub enable_console: bool,
    /// `EnvFilter` directives, e.g. "warn,tema_resolver=debug".
    /// Falls back to `RUST_LOG`, then "info".
    pub log_level: Option<String>,
    /// Extra OTLP resource attributes
    pub resource_attributes: Vec<(String, String)>,
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_NAME)
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .field("otlp_endpoint", &self.otlp_endpoint)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("resource_attributes", &self.resource_attributes)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            resource_attributes: Vec::new(),
            log_sink: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_resource_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.resource_attributes.push((key.into(), value.into()));
        self
    }

    /// Forward every formatted log line to `sink` as well.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Read settings from the environment.
    ///
    /// - `OTEL_SERVICE_NAME` or `SERVICE_NAME`
    /// - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION`
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT`
    /// - `OTEL_LOG_LEVEL` or `RUST_LOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ObservabilityConfig::from_env`] with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let either = |a: &str, b: &str| lookup(a).or_else(|| lookup(b)).filter(|v| !v.trim().is_empty());

        let mut config = Self::new(
            either("OTEL_SERVICE_NAME", "SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        );
        config.service_version = either("OTEL_SERVICE_VERSION", "SERVICE_VERSION");
        // Export only when asked for; otherwise console only.
        config.otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());
        config.log_level = either("OTEL_LOG_LEVEL", "RUST_LOG");
        config
    }
}
