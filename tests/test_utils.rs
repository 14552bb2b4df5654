use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use reqwest::Client;

use portfolio_cms::{
    auth::password::hash_password,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};

pub const TEST_PASSWORD: &str = "TestAdminPass123!";

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    /// Full deployment: file-backed store in a fresh temp directory, Argon2
    /// password hash.
    pub async fn spawn() -> Self {
        let mut config = test_config();
        config.content_dir = fresh_content_dir();
        config.admin_password_hash =
            Some(hash_password(TEST_PASSWORD).expect("Failed to hash test password"));

        Self::spawn_with(config).await
    }

    /// Read-only deployment: embedded snapshot, plaintext password.
    pub async fn spawn_read_only() -> Self {
        let mut config = test_config();
        config.read_only = true;
        config.admin_password = Some(TEST_PASSWORD.to_string());

        Self::spawn_with(config).await
    }

    async fn spawn_with(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let app_state = web::Data::new(AppState::new(&config));
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build test client");

        while client.get(format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            config,
        }
    }

    pub async fn login(&self) -> reqwest::Response {
        self.login_with(TEST_PASSWORD).await
    }

    pub async fn login_with(&self, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/auth", self.address))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await
            .expect("Failed to send login request")
    }

    pub async fn create_experience(&self, title: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/experiences", self.address))
            .json(&serde_json::json!({
                "year": "2024",
                "title": title,
                "company": "Acme",
                "description": "Things were built.",
                "technologies": ["Rust"],
            }))
            .send()
            .await
            .expect("Failed to send create request")
    }
}

fn fresh_content_dir() -> PathBuf {
    std::env::temp_dir().join(format!("portfolio-cms-it-{}", uuid::Uuid::new_v4()))
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio-CMS-Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        content_dir: PathBuf::from("content"),
        read_only: false,
        admin_password_hash: None,
        admin_password: None,
    }
}
