use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    HttpRequest,
};

use crate::constants::{ADMIN_COOKIE_NAME, SESSION_DURATION_SECS};
use crate::entities::session::SessionData;

/// Outcome of inspecting the session cookie on a request. `Expired` is kept
/// distinct from `Missing` so the observing response can clear the stale
/// cookie (lazy cleanup; nothing sweeps sessions proactively).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Valid(SessionData),
    Missing,
    Malformed,
    Expired,
}

impl SessionStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionStatus::Valid(_))
    }
}

/// Stateless cookie-backed session store. There is no server-side session
/// table: the cookie contents plus the clock fully determine validity.
#[derive(Debug, Clone)]
pub struct SessionStore {
    secure: bool,
}

impl SessionStore {
    pub fn new(secure: bool) -> Self {
        SessionStore { secure }
    }

    /// Issues a new session and the cookie carrying it. A new login simply
    /// overwrites any previous cookie on the client.
    pub fn issue(&self) -> (SessionData, Cookie<'static>) {
        let session = SessionData::issue();
        let payload = serde_json::to_string(&session)
            .expect("session data serializes to JSON");

        let cookie = Cookie::build(ADMIN_COOKIE_NAME, urlencoding::encode(&payload).into_owned())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(SESSION_DURATION_SECS))
            .finish();

        (session, cookie)
    }

    pub fn status(&self, req: &HttpRequest) -> SessionStatus {
        let Some(cookie) = req.cookie(ADMIN_COOKIE_NAME) else {
            return SessionStatus::Missing;
        };

        let Ok(decoded) = urlencoding::decode(cookie.value()) else {
            return SessionStatus::Malformed;
        };
        let Ok(session) = serde_json::from_str::<SessionData>(&decoded) else {
            return SessionStatus::Malformed;
        };

        if session.is_expired() {
            SessionStatus::Expired
        } else {
            SessionStatus::Valid(session)
        }
    }

    /// Cookie that deletes the session on the client. Idempotent.
    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::new(ADMIN_COOKIE_NAME, "");
        cookie.set_path("/");
        cookie.make_removal();
        cookie
    }
}
