use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::constants::START_TIME;
use crate::AppState;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime_seconds: i64,
    timestamp: String,
    start_at: String,
    version: &'static str,
    /// "file" or "embedded"; callers can tell whether writes are supported.
    storage: &'static str,
    /// "argon2", "plaintext", or "disabled".
    password_mode: &'static str,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime_seconds: now.signed_duration_since(*START_TIME).num_seconds(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        storage: state.content_repo.mode(),
        password_mode: state.auth_handler.verifier.mode(),
    })
}
