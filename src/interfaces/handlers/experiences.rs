use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::entities::experience::{ExperienceUpdate, NewExperience};
use crate::errors::AppError;
use crate::use_cases::extractors::AdminSession;
use crate::utils::slugs::experience_filename;
use crate::AppState;

#[get("")]
pub async fn list_experiences(state: web::Data<AppState>) -> impl Responder {
    match state.content_repo.list_experiences().await {
        Ok(experiences) => HttpResponse::Ok().json(experiences),
        Err(e) => {
            tracing::error!("Failed to list experiences: {}", e);
            e.to_http_response()
        }
    }
}

#[post("")]
pub async fn create_experience(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<NewExperience>,
) -> impl Responder {
    let new_experience = body.into_inner();
    if let Err(errors) = new_experience.validate() {
        return AppError::from(errors).to_http_response();
    }

    // Order comes from the current record count, the slug from order+title.
    let order = match state.content_repo.list_experiences().await {
        Ok(existing) => existing.len() as u32 + 1,
        Err(e) => return e.to_http_response(),
    };
    let slug = experience_filename(order, &new_experience.title);
    let experience = new_experience.into_experience(order, slug.clone());

    match state.content_repo.save_experience(&slug, &experience).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "slug": slug,
            "experience": experience,
        })),
        Err(e) => e.to_http_response(),
    }
}

#[get("/{slug}")]
pub async fn get_experience(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> impl Responder {
    match state.content_repo.get_experience(&slug).await {
        Ok(experience) => HttpResponse::Ok().json(experience),
        Err(e) => e.to_http_response(),
    }
}

#[put("/{slug}")]
pub async fn update_experience(
    _session: AdminSession,
    state: web::Data<AppState>,
    slug: web::Path<String>,
    body: web::Json<ExperienceUpdate>,
) -> impl Responder {
    let existing = match state.content_repo.get_experience(&slug).await {
        Ok(experience) => experience,
        Err(e) => return e.to_http_response(),
    };

    let merged = existing.merged(body.into_inner());
    match state.content_repo.save_experience(&slug, &merged).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "experience": merged,
        })),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/{slug}")]
pub async fn delete_experience(
    _session: AdminSession,
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> impl Responder {
    // Existence first so read-only deployments still 404 on unknown slugs.
    if let Err(e) = state.content_repo.get_experience(&slug).await {
        return e.to_http_response();
    }

    match state.content_repo.delete_experience(&slug).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"success": true})),
        Err(e) => e.to_http_response(),
    }
}
