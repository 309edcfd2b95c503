//! tema observability: tracing setup shared by the resolver, the store client
//! and the CLI.
//!
//! # Quick Start
//!
//! ```no_run
//! use tema_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("tema")
//!     .with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("theme resolver started");
//! # Ok::<(), tema_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint (tracing export only when set)
//! - `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod telemetry;
pub mod spans;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, shutdown};
pub use spans::{record_duration, record_error};

// store_span!() and subscription_span!() are exported via #[macro_export].
