use actix_web::{get, patch, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::entities::skill::{SkillCategoryInput, SkillCategoryKey, SkillPatch};
use crate::errors::AppError;
use crate::use_cases::extractors::AdminSession;
use crate::AppState;

#[get("")]
pub async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    match state.content_repo.list_skills().await {
        Ok(skills) => HttpResponse::Ok().json(skills),
        Err(e) => {
            tracing::error!("Failed to list skills: {}", e);
            e.to_http_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplaceCategoryRequest {
    pub category: Option<String>,
    pub data: Option<SkillCategoryInput>,
}

#[put("")]
pub async fn replace_category(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<ReplaceCategoryRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let (Some(category), Some(data)) = (request.category, request.data) else {
        return AppError::invalid("category", "Category and data are required").to_http_response();
    };

    let key: SkillCategoryKey = match category.parse() {
        Ok(key) => key,
        Err(e) => return e.to_http_response(),
    };

    let record = data.into_category(key);
    if let Err(e) = state.content_repo.save_skill_category(key, &record).await {
        return e.to_http_response();
    }

    match state.content_repo.list_skills().await {
        Ok(skills) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "skills": skills,
        })),
        Err(e) => e.to_http_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct PatchSkillRequest {
    pub category: Option<String>,
    #[serde(rename = "skillIndex")]
    pub skill_index: Option<usize>,
    pub skill: Option<SkillPatch>,
}

#[patch("")]
pub async fn patch_skill(
    _session: AdminSession,
    state: web::Data<AppState>,
    body: web::Json<PatchSkillRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let (Some(category), Some(index), Some(patch)) =
        (request.category, request.skill_index, request.skill)
    else {
        return AppError::invalid("skill", "Category, skillIndex, and skill are required")
            .to_http_response();
    };

    let key: SkillCategoryKey = match category.parse() {
        Ok(key) => key,
        Err(e) => return e.to_http_response(),
    };

    let mut record = match state.content_repo.get_skill_category(key).await {
        Ok(record) => record,
        Err(e) => return e.to_http_response(),
    };

    if index >= record.skills.len() {
        return AppError::invalid("skillIndex", "Invalid skill index").to_http_response();
    }
    let merged = record.skills[index].merged(patch);
    record.skills[index] = merged;

    match state.content_repo.save_skill_category(key, &record).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "category": record,
        })),
        Err(e) => e.to_http_response(),
    }
}
