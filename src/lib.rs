use std::sync::Arc;

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, utils};
pub use interfaces::{handlers, repositories, routes};

use auth::password::AdminVerifier;
use auth::session::SessionStore;
use repositories::content::ContentRepository;
use repositories::embedded::EmbeddedContentRepo;
use repositories::fs_repo::FsContentRepo;
use use_cases::auth::AuthHandler;

pub struct AppState {
    pub auth_handler: AuthHandler,
    pub content_repo: Arc<dyn ContentRepository>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let verifier = AdminVerifier::from_config(config);
        let sessions = SessionStore::new(config.is_production());
        let auth_handler = AuthHandler::new(verifier, sessions);

        let content_repo: Arc<dyn ContentRepository> = if config.read_only {
            Arc::new(EmbeddedContentRepo)
        } else {
            Arc::new(FsContentRepo::new(config.content_dir.clone()))
        };

        AppState {
            auth_handler,
            content_repo,
        }
    }
}
