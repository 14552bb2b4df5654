use std::fmt;
use std::future::{ready, Ready};

use actix_web::{
    error::ResponseError, http::StatusCode, web, FromRequest, HttpRequest, HttpResponse,
};

use crate::auth::session::{SessionStatus, SessionStore};
use crate::entities::session::SessionData;
use crate::AppState;

/// Extractor for an authenticated admin session.
/// Returns 401 if the cookie is missing, malformed, or expired; an expired
/// session additionally gets its cookie cleared by the rejection response.
/// Usage: add `session: AdminSession` as a parameter to your handler.
/// Auth runs before body extraction, so mutating handlers check it first.
#[derive(Debug)]
pub struct AdminSession(pub SessionData);

impl FromRequest for AdminSession {
    type Error = SessionRejection;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing while extracting admin session");
            return ready(Err(SessionRejection(SessionStatus::Missing)));
        };

        match state.auth_handler.session_status(req) {
            SessionStatus::Valid(session) => ready(Ok(AdminSession(session))),
            status => ready(Err(SessionRejection(status))),
        }
    }
}

/// 401 rejection carrying the session state that caused it.
#[derive(Debug)]
pub struct SessionRejection(pub SessionStatus);

impl fmt::Display for SessionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unauthorized")
    }
}

impl ResponseError for SessionRejection {
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if self.0 == SessionStatus::Expired {
            // Lazy cleanup: the response observing expiry clears the cookie.
            builder.cookie(SessionStore::removal_cookie());
        }
        builder.json(serde_json::json!({"error": "Unauthorized"}))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}
