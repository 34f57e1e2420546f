use service_core::error::AppError;
use service_core::observability::init_tracing;
use starter_service::config::StarterConfig;
use starter_service::services::{init_metrics, SystemClock};
use starter_service::startup::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = StarterConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        debug = config.debug,
        "Starting starter service"
    );

    let application = Application::build(config, Arc::new(SystemClock)).await?;
    application.run_until_stopped().await?;

    Ok(())
}
