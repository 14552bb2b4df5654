use actix_web::cookie::Cookie;
use actix_web::HttpRequest;
use validator::Validate;

use crate::auth::password::AdminVerifier;
use crate::auth::session::{SessionStatus, SessionStore};
use crate::entities::session::{LoginRequest, SessionData};
use crate::errors::AuthError;

/// Ties the password verifier to the session store: a successful
/// verification mints the session cookie, everything else stays stateless.
pub struct AuthHandler {
    pub verifier: AdminVerifier,
    pub sessions: SessionStore,
}

impl AuthHandler {
    pub fn new(verifier: AdminVerifier, sessions: SessionStore) -> Self {
        AuthHandler { verifier, sessions }
    }

    /// Verifies the submitted password and issues a session on success.
    pub fn login(&self, request: LoginRequest) -> Result<(SessionData, Cookie<'static>), AuthError> {
        request.validate()?;

        if !self.verifier.verify(&request.password) {
            tracing::warn!("Rejected admin login attempt");
            return Err(AuthError::WrongCredentials);
        }

        tracing::info!("Admin session issued");
        Ok(self.sessions.issue())
    }

    /// Removal cookie for logout. Idempotent regardless of session state.
    pub fn logout(&self) -> Cookie<'static> {
        SessionStore::removal_cookie()
    }

    pub fn session_status(&self, req: &HttpRequest) -> SessionStatus {
        self.sessions.status(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn handler() -> AuthHandler {
        let hash = hash_password("Correct-horse9").unwrap();
        AuthHandler::new(
            AdminVerifier::Argon2 { hash },
            SessionStore::new(false),
        )
    }

    #[test]
    fn login_with_correct_password_issues_a_session() {
        let (session, cookie) = handler()
            .login(LoginRequest {
                password: "Correct-horse9".into(),
            })
            .unwrap();
        assert!(!session.is_expired());
        assert!(cookie.value().contains("expiresAt"));
    }

    #[test]
    fn login_with_wrong_password_is_unauthorized() {
        let err = handler()
            .login(LoginRequest {
                password: "guess".into(),
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongCredentials));
    }

    #[test]
    fn login_with_empty_password_is_missing_credentials() {
        let err = handler()
            .login(LoginRequest {
                password: "".into(),
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }
}
