//! Tracing setup shared by Linkhub binaries.
//!
//! Installs a global `tracing` subscriber with an `RUST_LOG` filter, text
//! or JSON output, a bridge for `log` records, and optionally an OTLP span
//! exporter.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};
use typed_builder::TypedBuilder;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(TelemetryError::UnknownFormat(other.to_string())),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetryConfig {
    #[builder(setter(into))]
    service_name: String,
    #[builder(default)]
    format: LogFormat,
    /// OTLP gRPC collector endpoint; spans are only exported when set.
    #[builder(default)]
    otlp_endpoint: Option<String>,
}

/// Keeps the span exporter alive; flushes pending spans on drop.
#[must_use = "dropping the guard shuts down span export"]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down tracer provider: {e}");
            }
        }
    }
}

/// Installs the global subscriber. Call once, early in `main`.
pub fn init(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let provider = match &config.otlp_endpoint {
        Some(endpoint) => Some(tracer_provider(&config.service_name, endpoint)?),
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    let otel_layer = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(config.service_name.clone()))
    });

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(otel_layer)
        .with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    tracing::debug!(
        service = %config.service_name,
        format = %config.format,
        otlp = config.otlp_endpoint.is_some(),
        "telemetry initialized"
    );

    Ok(TelemetryGuard { provider })
}

fn tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> Result<SdkTracerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_resource(
            Resource::builder()
                .with_service_name(service_name.to_string())
                .build(),
        )
        .with_batch_exporter(exporter)
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());
    Ok(provider)
}
