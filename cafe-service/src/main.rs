use cafe_service::{config::CafeConfig, startup::Application};
use service_core::error::AppError;
use service_core::middleware::metrics::init_metrics;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = CafeConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;
    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        store = ?config.store.backend,
        "Starting cafe service"
    );

    let application = Application::build(config).await?;
    let result = application.run_until_stopped().await;

    shutdown_tracing();
    result
}
