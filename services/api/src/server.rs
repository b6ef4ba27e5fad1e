use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_country_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use country_matcher::config::AppConfig;
use country_matcher::error::AppError;
use country_matcher::router::ReloadState;
use country_matcher::{telemetry, CountryService, SharedIndex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let data_source = config.data.kind();
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        data_source,
    };

    let index = Arc::new(SharedIndex::load(&config.data)?);
    telemetry::record_index(&index.snapshot(), data_source);

    let service = Arc::new(CountryService::new(Arc::clone(&index)));
    let reload = ReloadState {
        index,
        source: Arc::new(config.data.clone()),
    };

    let app = with_country_routes(service, reload)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, data_source, "country matcher ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(readiness_flag))
        .await?;
    info!("country matcher stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. Readiness drops first so probes stop routing traffic while
/// in-flight requests drain.
async fn shutdown_signal(readiness: Arc<AtomicBool>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "ctrl_c", "shutting down"),
        _ = terminate => info!(signal = "terminate", "shutting down"),
    }
    readiness.store(false, Ordering::Release);
}
