use argon2::{
    password_hash::{
        rand_core::OsRng, Error as Argon2Error, PasswordHash, PasswordHasher, PasswordVerifier as _,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use zeroize::Zeroizing;

use crate::errors::PasswordError;
use crate::settings::AppConfig;

fn argon2_instance() -> Result<Argon2<'static>, PasswordError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15_000, 2, 1, None)
            .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?,
    ))
}

/// Hashes a password with Argon2id. Used to mint the reference hash held in
/// `APP_ADMIN_PASSWORD_HASH`.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2_instance()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingError(e.to_string()))
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(hashed).map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(Argon2Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerificationError(e.to_string())),
    }
}

/// Compares a submitted admin password against the configured reference
/// value. The reference is an Argon2id hash in the full deployment and a
/// plaintext value in the edge/read-only deployment; callers can observe
/// which mode is active via `mode()`.
pub enum AdminVerifier {
    Argon2 { hash: String },
    Plaintext { password: Zeroizing<String> },
    Disabled,
}

impl AdminVerifier {
    pub fn from_config(config: &AppConfig) -> Self {
        if let Some(hash) = &config.admin_password_hash {
            return AdminVerifier::Argon2 { hash: hash.clone() };
        }
        if let Some(password) = &config.admin_password {
            tracing::warn!(
                "Admin password is configured in plaintext; intended for the read-only deployment only"
            );
            return AdminVerifier::Plaintext {
                password: Zeroizing::new(password.clone()),
            };
        }
        tracing::warn!("No admin password configured; all logins will be rejected");
        AdminVerifier::Disabled
    }

    /// Fail-closed verification: misconfiguration or hash-parse failures
    /// count as a mismatch, never an error to the caller.
    pub fn verify(&self, submitted: &str) -> bool {
        match self {
            AdminVerifier::Argon2 { hash } => match verify_password(submitted, hash) {
                Ok(valid) => valid,
                Err(e) => {
                    tracing::warn!("Password verification failed: {}", e);
                    false
                }
            },
            AdminVerifier::Plaintext { password } => submitted == password.as_str(),
            AdminVerifier::Disabled => false,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            AdminVerifier::Argon2 { .. } => "argon2",
            AdminVerifier::Plaintext { .. } => "plaintext",
            AdminVerifier::Disabled => "disabled",
        }
    }
}
