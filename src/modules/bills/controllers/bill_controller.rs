use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::core::error::AppError;
use crate::modules::bills::models::GenerateBillRequest;
use crate::modules::bills::services::BillGenerator;
use crate::modules::tariffs::services::TariffSettingsStore;

/// Issue a bill from two meter readings
/// POST /bills
///
/// The bill is returned to the caller for persistence; this service keeps
/// no bill records.
pub async fn generate_bill(
    generator: web::Data<Arc<BillGenerator>>,
    store: web::Data<Arc<TariffSettingsStore>>,
    request: web::Json<GenerateBillRequest>,
) -> Result<HttpResponse, AppError> {
    let settings = store.current()?;
    let bill = generator.generate(&request, &settings, Utc::now())?;

    Ok(HttpResponse::Created().json(bill))
}

/// Configure bill routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/bills").route("", web::post().to(generate_bill)));
}
