use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use hydrobill::bills::BillGenerator;
use hydrobill::config::Config;
use hydrobill::modules::{bills, health, tariffs};
use hydrobill::tariffs::TariffSettingsStore;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing, JSON lines in production
    let json_logs = config.app.env == "production";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hydrobill={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting Hydrobill water billing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let settings = config
        .tariff
        .load_settings()
        .context("Failed to load tariff settings")?;
    let store = Arc::new(TariffSettingsStore::new(settings));
    let generator = Arc::new(BillGenerator::new(config.app.bill_due_days));

    tracing::info!(
        "Tariff settings in force: fcda={}%, vat={}%; bills due after {} days",
        settings.fcda_percentage,
        settings.vat_percentage,
        generator.due_days()
    );

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(generator.clone()))
            .configure(health::controllers::configure)
            .configure(tariffs::controllers::configure)
            .configure(bills::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
