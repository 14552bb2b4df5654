use actix_web::{get, put, web, HttpResponse, Responder};

use crate::entities::site_config::SiteConfig;
use crate::use_cases::extractors::AdminSession;
use crate::AppState;

#[get("")]
pub async fn get_site_config(state: web::Data<AppState>) -> impl Responder {
    match state.content_repo.get_site_config().await {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(e) => {
            tracing::error!("Failed to read site config: {}", e);
            e.to_http_response()
        }
    }
}

#[put("")]
pub async fn save_site_config(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<SiteConfig>,
) -> impl Responder {
    let config = body.into_inner();
    match state.content_repo.save_site_config(&config).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "config": config,
        })),
        Err(e) => e.to_http_response(),
    }
}
