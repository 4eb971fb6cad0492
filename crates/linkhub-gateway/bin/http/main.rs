mod cli;

use crate::cli::CLI;
use clap::Parser;
use linkhub_gateway::{App, AppState};
use linkhub_shortener::{Credentials, GatewayConfig, ShortenerGateway};
use linkhub_telemetry::TelemetryConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let _telemetry = linkhub_telemetry::init(
        TelemetryConfig::builder()
            .service_name("linkhub-gateway")
            .format(config.log_format.into())
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        upstream_timeout_secs = config.upstream_timeout_secs,
        log_format = %config.log_format,
        "starting gateway server"
    );

    let gateway = ShortenerGateway::new(
        GatewayConfig::builder()
            .credentials(Credentials::from_env())
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build(),
    )?;
    let state = AppState::new(Arc::new(gateway));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
