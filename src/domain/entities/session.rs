use chrono::Utc;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::SESSION_DURATION_SECS;

/// Body of `POST /auth`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Contents of the admin session cookie. The wire format is plain JSON with
/// camelCase names (`{"token": …, "expiresAt": …}`); the cookie itself is
/// the only place this state lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl SessionData {
    /// Mints a fresh session: 32 bytes from the OS CSPRNG, hex encoded,
    /// expiring 24 hours from now (unix milliseconds).
    pub fn issue() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let token = bytes.iter().map(|b| format!("{:02x}", b)).collect();

        SessionData {
            token,
            expires_at: Utc::now().timestamp_millis() + SESSION_DURATION_SECS * 1000,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at
    }
}
