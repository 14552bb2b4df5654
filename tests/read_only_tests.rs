mod test_utils;

use reqwest::StatusCode;
use serde_json::Value;
use test_utils::TestApp;

#[actix_rt::test]
async fn embedded_content_is_served_publicly() {
    let app = TestApp::spawn_read_only().await;

    let experiences: Vec<Value> = app
        .client
        .get(format!("{}/experiences", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(experiences.len(), 4);
    assert_eq!(experiences[2]["slug"], "03-junior-developer");

    let skills: Value = app
        .client
        .get(format!("{}/skills", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(skills.as_object().unwrap().len(), 3);
}

#[actix_rt::test]
async fn authenticated_writes_return_501_with_guidance() {
    let app = TestApp::spawn_read_only().await;
    let login = app.login().await;
    assert_eq!(login.status(), StatusCode::OK);

    let response = app.create_experience("New Role").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body: Value = response.json().await.unwrap();
    assert!(
        body["details"].as_str().unwrap().contains("redeploy"),
        "501 body should point at the redeploy workflow: {body}"
    );

    let response = app
        .client
        .put(format!("{}/skills", app.address))
        .json(&serde_json::json!({
            "category": "frontend",
            "data": {"skills": []},
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let response = app
        .client
        .delete(format!("{}/experiences/01-senior-developer", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[actix_rt::test]
async fn unauthorized_check_still_comes_before_the_unsupported_one() {
    let app = TestApp::spawn_read_only().await;

    let response = app.create_experience("New Role").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn unknown_slug_still_404s_in_read_only_mode() {
    let app = TestApp::spawn_read_only().await;
    app.login().await;

    let response = app
        .client
        .delete(format!("{}/experiences/99-ghost", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn health_reports_the_deployment_mode() {
    let app = TestApp::spawn_read_only().await;

    let health: Value = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["storage"], "embedded");
    assert_eq!(health["password_mode"], "plaintext");
}

#[actix_rt::test]
async fn site_config_writes_are_unsupported_but_reads_work() {
    let app = TestApp::spawn_read_only().await;
    app.login().await;

    let config: Value = app
        .client
        .get(format!("{}/config", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(config.get("personalInfo").is_some());

    let response = app
        .client
        .put(format!("{}/config", app.address))
        .json(&config)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}
