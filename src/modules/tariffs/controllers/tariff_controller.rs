//! Tariff controller for HTTP endpoints
//!
//! Calculation preview plus administration of the settings document.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::tariffs::models::{MeterSize, ServiceType, TariffSettings, TariffSettingsPatch};
use crate::modules::tariffs::services::{coerce_consumption, TariffCalculator, TariffSettingsStore};

/// Request body for a calculation preview
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateChargesRequest {
    /// Loosely typed; non-numeric values count as zero usage, out-of-range numbers are rejected
    #[serde(default)]
    pub consumption: serde_json::Value,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub meter_size: String,
    /// Settings override merged over the defaults instead of the stored settings
    pub settings: Option<TariffSettingsPatch>,
}

/// Calculate a charge breakdown
/// POST /tariffs/calculate
pub async fn calculate_charges(
    store: web::Data<Arc<TariffSettingsStore>>,
    request: web::Json<CalculateChargesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let settings = match request.settings {
        Some(ref patch) => TariffSettings::from_patch(patch)?,
        None => store.current()?,
    };

    let consumption = coerce_consumption(&request.consumption)?;

    let breakdown = TariffCalculator::new().calculate_bill_details(
        consumption,
        &ServiceType::from_label(&request.service_type),
        &MeterSize::new(&request.meter_size),
        &settings,
    );

    Ok(HttpResponse::Ok().json(breakdown))
}

/// Get the settings currently in force
/// GET /tariffs/settings
pub async fn get_settings(
    store: web::Data<Arc<TariffSettingsStore>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.current()?))
}

/// Replace the settings document
/// PUT /tariffs/settings
pub async fn replace_settings(
    store: web::Data<Arc<TariffSettingsStore>>,
    patch: web::Json<TariffSettingsPatch>,
) -> Result<HttpResponse, AppError> {
    let settings = store.replace(&patch).map_err(|err| {
        tracing::warn!("Rejected tariff settings update: {}", err);
        err
    })?;

    Ok(HttpResponse::Ok().json(settings))
}

/// Configure tariff routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tariffs")
            .route("/calculate", web::post().to(calculate_charges))
            .route("/settings", web::get().to(get_settings))
            .route("/settings", web::put().to(replace_settings)),
    );
}
