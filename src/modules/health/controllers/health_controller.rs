use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::tariffs::services::TariffSettingsStore;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub tariff_settings: bool,
}

/// GET /health - Liveness check
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness check
/// Ready once the tariff settings can be read
pub async fn readiness_check(store: web::Data<Arc<TariffSettingsStore>>) -> impl Responder {
    let tariff_settings = match store.current() {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Tariff settings readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: tariff_settings,
        checks: ReadinessChecks { tariff_settings },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
