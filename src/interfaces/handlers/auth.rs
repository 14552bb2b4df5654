use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder, ResponseError};

use crate::auth::session::{SessionStatus, SessionStore};
use crate::entities::session::LoginRequest;
use crate::AppState;

#[post("")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(request.into_inner()) {
        Ok((_session, cookie)) => HttpResponse::Ok()
            .cookie(cookie)
            .json(serde_json::json!({"success": true})),
        Err(e) => e.error_response(),
    }
}

#[delete("")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(state.auth_handler.logout())
        .json(serde_json::json!({"success": true}))
}

#[get("")]
pub async fn status(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match state.auth_handler.session_status(&req) {
        SessionStatus::Valid(_) => {
            HttpResponse::Ok().json(serde_json::json!({"authenticated": true}))
        }
        SessionStatus::Expired => {
            // Expired sessions are cleaned up on the check that notices them.
            HttpResponse::Ok()
                .cookie(SessionStore::removal_cookie())
                .json(serde_json::json!({"authenticated": false}))
        }
        _ => HttpResponse::Ok().json(serde_json::json!({"authenticated": false})),
    }
}
