use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Name of the admin session cookie.
pub const ADMIN_COOKIE_NAME: &str = "admin_session";

/// Session lifetime in seconds (24 hours).
pub const SESSION_DURATION_SECS: i64 = 24 * 60 * 60;

/// The closed set of skill category keys, in canonical order.
pub const SKILL_CATEGORY_KEYS: [&str; 3] = ["frontend", "backend", "tools"];

/// Guidance attached to 501 responses when a write reaches the embedded
/// read-only deployment.
pub const READ_ONLY_GUIDANCE: &str =
    "Content is embedded at build time in this deployment. \
     Edit the content sources and redeploy to change it.";
